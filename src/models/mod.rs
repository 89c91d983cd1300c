// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Client, ClientPreferences, ClientStatus, MatchCriteria, Property,
    Recommendation, RecommendationStatus, ScoredProperty,
};
pub use requests::{
    ClientSearchQuery, CreateRecommendationRequest, FindMatchesRequest, LoginRequest,
    PropertySearchQuery,
};
pub use responses::{
    ClientListResponse, ErrorResponse, FindMatchesResponse, HealthResponse, LoginResponse,
    PropertyListResponse,
};
