// Core algorithm exports
pub mod analytics;
pub mod filters;
pub mod matcher;
pub mod report;
pub mod scoring;

pub use analytics::{DashboardSummary, PRICE_RANGES};
pub use filters::{bedroom_options, property_types, ClientFilter, PropertyFilter};
pub use matcher::{MatchResult, Matcher, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};
pub use report::{create_recommendation, create_recommendation_at, REPORT_SIZE};
pub use scoring::{calculate_match_score, ScoreBreakdown};
