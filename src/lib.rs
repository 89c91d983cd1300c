//! Homie Match - property-to-client matching service for the HomieHome agent dashboard
//!
//! This library scores property listings against a client's budget and
//! preferences, ranks the best fits and packages them into recommendation
//! reports. It also serves the in-memory catalog behind the agent CRM.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{create_recommendation, calculate_match_score, Matcher, MatchResult, ScoreBreakdown};
pub use crate::models::{Client, ClientPreferences, BudgetRange, MatchCriteria, Property, Recommendation, ScoredProperty};
