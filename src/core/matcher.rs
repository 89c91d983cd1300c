use crate::models::{MatchCriteria, Property, ScoredProperty};
use crate::core::scoring::calculate_match_score;

/// Minimum match score a property needs to be recommended
pub const DEFAULT_MIN_SCORE: u8 = 70;
/// Maximum number of matches returned per run
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredProperty>,
    pub total_candidates: usize,
}

/// Property-to-client matcher
///
/// # Pipeline Stages
/// 1. Score every candidate against the client's criteria
/// 2. Drop candidates under the acceptance threshold
/// 3. Rank by score, keeping input order for ties
/// 4. Truncate to the result cap
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    min_score: u8,
    max_results: usize,
}

impl Matcher {
    pub fn new(min_score: u8, max_results: usize) -> Self {
        Self { min_score, max_results }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Annotate a single property with its score, without thresholding
    pub fn score(&self, criteria: &MatchCriteria, property: &Property) -> ScoredProperty {
        let breakdown = calculate_match_score(property, criteria);

        ScoredProperty {
            property: property.clone(),
            match_score: breakdown.match_score(),
        }
    }

    /// Find the best-matching properties for a client
    ///
    /// # Arguments
    /// * `criteria` - The client's budget and preferences
    /// * `candidates` - Property catalog, in any order
    ///
    /// # Returns
    /// MatchResult containing scored and ranked matches
    pub fn find_matches(&self, criteria: &MatchCriteria, candidates: &[Property]) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredProperty> = candidates
            .iter()
            .map(|property| self.score(criteria, property))
            .filter(|scored| scored.match_score >= self.min_score)
            .collect();

        // Stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(self.max_results);

        tracing::debug!(
            "Matched {} of {} candidates (threshold {})",
            scored.len(),
            total_candidates,
            self.min_score
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE, DEFAULT_MAX_RESULTS)
    }
}
