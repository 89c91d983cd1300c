use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Client budget bounds, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_order"))]
pub struct BudgetRange {
    #[validate(range(min = 0.0))]
    pub min: f64,
    #[validate(range(min = 0.0))]
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

fn validate_budget_order(budget: &BudgetRange) -> Result<(), ValidationError> {
    if budget.min > budget.max {
        return Err(ValidationError::new("budget_min_exceeds_max"));
    }
    Ok(())
}

/// Optional listing preferences stated by a client
///
/// A zero count or an empty string is treated the same as an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "propertyType", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl ClientPreferences {
    pub fn wanted_bedrooms(&self) -> Option<u32> {
        self.bedrooms.filter(|&beds| beds > 0)
    }

    pub fn wanted_bathrooms(&self) -> Option<f64> {
        self.bathrooms.filter(|&baths| baths != 0.0 && !baths.is_nan())
    }

    pub fn wanted_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }

    pub fn wanted_property_type(&self) -> Option<&str> {
        self.property_type.as_deref().filter(|kind| !kind.is_empty())
    }
}

/// Everything the matcher needs to know about a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchCriteria {
    #[serde(rename = "budgetRange")]
    #[validate(nested)]
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub preferences: ClientPreferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Pending,
    Recommended,
    InProgress,
    Closed,
}

/// CRM client record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: ClientStatus,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub criteria: MatchCriteria,
}

/// Property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Property {
    #[validate(length(min = 1))]
    pub id: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub bedrooms: u32,
    #[validate(range(min = 0.0))]
    pub bathrooms: f64,
    #[serde(rename = "propertyType")]
    pub property_type: String,
    #[serde(rename = "squareFeet", default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "yearBuilt", default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "agentTags", default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,
}

/// A property annotated with its match score (0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProperty {
    #[serde(flatten)]
    pub property: Property,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Draft,
    Sent,
    Viewed,
}

/// Recommendation report handed to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub properties: Vec<ScoredProperty>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    pub status: RecommendationStatus,
}
