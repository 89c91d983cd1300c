use serde::{Deserialize, Serialize};
use crate::core::Matcher;
use crate::models::{Client, ClientStatus, Property};

/// Listing price bands, half-open: `min <= price < max`
pub const PRICE_RANGES: [(&str, f64, f64); 5] = [
    ("<400K", f64::NEG_INFINITY, 400_000.0),
    ("400-600K", 400_000.0, 600_000.0),
    ("600-800K", 600_000.0, 800_000.0),
    ("800K-1M", 800_000.0, 1_000_000.0),
    ("1M+", 1_000_000.0, f64::INFINITY),
];

const STATUSES: [ClientStatus; 4] = [
    ClientStatus::Pending,
    ClientStatus::Recommended,
    ClientStatus::InProgress,
    ClientStatus::Closed,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ClientStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub property_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPrice {
    pub city: String,
    pub listings: usize,
    pub average_price: f64,
}

/// Agent dashboard figures over the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub total_properties: usize,
    /// Every status, zero counts included
    pub clients_by_status: Vec<StatusCount>,
    /// First-seen order
    pub property_types: Vec<TypeCount>,
    pub price_ranges: Vec<PriceRangeCount>,
    /// First-seen order, averages rounded to whole dollars
    pub average_price_by_city: Vec<CityPrice>,
    pub total_listing_value: f64,
    pub average_price: Option<f64>,
    /// Mean score of the matches surfaced for every client
    pub average_match_score: Option<u8>,
}

impl DashboardSummary {
    pub fn compute(matcher: &Matcher, clients: &[Client], properties: &[Property]) -> Self {
        let clients_by_status = STATUSES
            .iter()
            .map(|&status| StatusCount {
                status,
                count: clients.iter().filter(|c| c.status == status).count(),
            })
            .collect();

        let price_ranges = PRICE_RANGES
            .iter()
            .map(|&(label, min, max)| PriceRangeCount {
                range: label.to_string(),
                count: properties.iter().filter(|p| p.price >= min && p.price < max).count(),
            })
            .collect();

        let total_listing_value: f64 = properties.iter().map(|p| p.price).sum();
        let average_price = (!properties.is_empty())
            .then(|| (total_listing_value / properties.len() as f64).round());

        let (score_sum, score_count) = clients
            .iter()
            .flat_map(|client| matcher.find_matches(&client.criteria, properties).matches)
            .fold((0u64, 0u64), |(sum, n), m| (sum + m.match_score as u64, n + 1));
        let average_match_score = (score_count > 0)
            .then(|| (score_sum as f64 / score_count as f64).round() as u8);

        tracing::debug!(
            "Dashboard summary over {} clients and {} listings",
            clients.len(),
            properties.len()
        );

        Self {
            total_clients: clients.len(),
            total_properties: properties.len(),
            clients_by_status,
            property_types: type_counts(properties),
            price_ranges,
            average_price_by_city: city_prices(properties),
            total_listing_value,
            average_price,
            average_match_score,
        }
    }
}

fn type_counts(properties: &[Property]) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for property in properties {
        match counts.iter_mut().find(|t| t.property_type == property.property_type) {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount {
                property_type: property.property_type.clone(),
                count: 1,
            }),
        }
    }
    counts
}

fn city_prices(properties: &[Property]) -> Vec<CityPrice> {
    let mut totals: Vec<(String, f64, usize)> = Vec::new();
    for property in properties {
        match totals.iter_mut().find(|(city, _, _)| *city == property.city) {
            Some((_, total, n)) => {
                *total += property.price;
                *n += 1;
            }
            None => totals.push((property.city.clone(), property.price, 1)),
        }
    }

    totals
        .into_iter()
        .map(|(city, total, listings)| CityPrice {
            city,
            listings,
            average_price: (total / listings as f64).round(),
        })
        .collect()
}
