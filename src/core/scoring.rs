use crate::models::{BudgetRange, ClientPreferences, MatchCriteria, Property};

pub const BUDGET_WEIGHT: f64 = 40.0;
pub const BEDROOMS_WEIGHT: f64 = 20.0;
pub const BATHROOMS_WEIGHT: f64 = 15.0;
pub const LOCATION_WEIGHT: f64 = 15.0;
pub const PROPERTY_TYPE_WEIGHT: f64 = 10.0;

/// Points awarded per criterion for one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub location: f64,
    pub property_type: f64,
}

impl ScoreBreakdown {
    pub fn points(&self) -> f64 {
        self.budget + self.bedrooms + self.bathrooms + self.location + self.property_type
    }

    /// Every criterion always contributes to the denominator.
    pub fn max_points(&self) -> f64 {
        BUDGET_WEIGHT + BEDROOMS_WEIGHT + BATHROOMS_WEIGHT + LOCATION_WEIGHT + PROPERTY_TYPE_WEIGHT
    }

    /// Final percentage, rounded half away from zero and clamped to 0-100
    pub fn match_score(&self) -> u8 {
        let pct = (self.points() / self.max_points() * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

/// Score a property against a client's budget and preferences
///
/// Scoring formula (out of 100):
///   budget        40  in range / within 10% of a bound / linear decay
///   bedrooms      20  exact / off by one / decay, 10 if unstated
///   bathrooms     15  stepped by difference, 7 if unstated
///   location      15  city match / substring / same region, 7 if unstated
///   property type 10  exact / any, 5 if unstated
pub fn calculate_match_score(property: &Property, criteria: &MatchCriteria) -> ScoreBreakdown {
    let prefs = &criteria.preferences;

    ScoreBreakdown {
        budget: budget_points(property.price, &criteria.budget_range),
        bedrooms: bedroom_points(property.bedrooms, prefs),
        bathrooms: bathroom_points(property.bathrooms, prefs),
        location: location_points(&property.city, prefs),
        property_type: property_type_points(&property.property_type, prefs),
    }
}

/// Checks run in order: in-range first, then the min band, then the max band.
#[inline]
fn budget_points(price: f64, budget: &BudgetRange) -> f64 {
    if budget.contains(price) {
        return BUDGET_WEIGHT;
    }

    let near_min = price < budget.min * 1.1 && price > budget.min * 0.9;
    let near_max = price > budget.max * 0.9 && price < budget.max * 1.1;
    if near_min || near_max {
        return 30.0;
    }

    let distance = (price - budget.min).abs().min((price - budget.max).abs());
    let range = budget.max - budget.min;

    // A zero-width range yields -inf here, which clamps to 0
    (20.0 - (distance / range) * 20.0).max(0.0)
}

#[inline]
fn bedroom_points(bedrooms: u32, prefs: &ClientPreferences) -> f64 {
    let Some(wanted) = prefs.wanted_bedrooms() else {
        return 10.0;
    };

    match bedrooms.abs_diff(wanted) {
        0 => BEDROOMS_WEIGHT,
        1 => 15.0,
        diff => (10.0 - diff as f64 * 5.0).max(0.0),
    }
}

#[inline]
fn bathroom_points(bathrooms: f64, prefs: &ClientPreferences) -> f64 {
    let Some(wanted) = prefs.wanted_bathrooms() else {
        return 7.0;
    };

    let diff = (bathrooms - wanted).abs();
    if diff == 0.0 {
        BATHROOMS_WEIGHT
    } else if diff <= 0.5 {
        12.0
    } else if diff <= 1.0 {
        8.0
    } else {
        (5.0 - diff * 2.0).max(0.0)
    }
}

#[inline]
fn location_points(city: &str, prefs: &ClientPreferences) -> f64 {
    let Some(wanted) = prefs.wanted_location() else {
        return 7.0;
    };

    let city = city.to_lowercase();
    let wanted = wanted.to_lowercase();

    if city == wanted {
        LOCATION_WEIGHT
    } else if city.contains(&wanted) || wanted.contains(&city) {
        10.0
    } else {
        // Same-region fallback
        5.0
    }
}

#[inline]
fn property_type_points(property_type: &str, prefs: &ClientPreferences) -> f64 {
    match prefs.wanted_property_type() {
        Some(wanted) if wanted == property_type => PROPERTY_TYPE_WEIGHT,
        Some(_) => 3.0,
        None => 5.0,
    }
}
