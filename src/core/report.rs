use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::core::Matcher;
use crate::models::{Client, Property, Recommendation, RecommendationStatus, ScoredProperty};

/// Maximum number of properties in a recommendation report
pub const REPORT_SIZE: usize = 5;

/// Build a draft recommendation report for a client
///
/// When `selected` is `None` the matcher picks from `catalog`; otherwise the
/// agent's hand-picked listings are scored and kept in the given order.
pub fn create_recommendation(
    matcher: &Matcher,
    client: &Client,
    catalog: &[Property],
    selected: Option<&[Property]>,
) -> Recommendation {
    create_recommendation_at(matcher, client, catalog, selected, Utc::now())
}

pub fn create_recommendation_at(
    matcher: &Matcher,
    client: &Client,
    catalog: &[Property],
    selected: Option<&[Property]>,
    now: DateTime<Utc>,
) -> Recommendation {
    let mut properties: Vec<ScoredProperty> = match selected {
        Some(picked) => picked
            .iter()
            .map(|property| matcher.score(&client.criteria, property))
            .collect(),
        None => matcher.find_matches(&client.criteria, catalog).matches,
    };
    properties.truncate(REPORT_SIZE);

    let recommendation = Recommendation {
        id: format!("r{}", Uuid::new_v4().simple()),
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        properties,
        created_at: now.date_naive(),
        status: RecommendationStatus::Draft,
    };

    tracing::info!(
        "Created recommendation {} for client {} with {} properties",
        recommendation.id,
        client.id,
        recommendation.properties.len()
    );

    recommendation
}
