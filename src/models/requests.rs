use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ClientStatus, MatchCriteria, Property};

/// Request to run the matcher over ad-hoc criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub criteria: MatchCriteria,
    /// Inline catalog; when absent the loaded catalog is used
    #[serde(default)]
    #[validate(nested)]
    pub properties: Option<Vec<Property>>,
}

/// Request to build a recommendation report for a stored client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRecommendationRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "client_id", rename = "clientId")]
    pub client_id: String,
    /// Hand-picked listings; when absent the matcher picks them
    #[serde(alias = "property_ids", rename = "propertyIds", default)]
    pub property_ids: Option<Vec<String>>,
}

/// Agent login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Query string for property search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(alias = "min_price", rename = "minPrice", default)]
    pub min_price: Option<f64>,
    #[serde(alias = "max_price", rename = "maxPrice", default)]
    pub max_price: Option<f64>,
    #[serde(alias = "property_type", rename = "propertyType", default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
}

/// Query string for client search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub status: Option<ClientStatus>,
}
