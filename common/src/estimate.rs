//! Lead-estimate projection for the dashboard.
//!
//! `project` maps a filter selection to how many leads match, how many are
//! expected to answer and how many meetings that should yield. It is a
//! heuristic: a fixed base population shrunk by one decay factor per
//! populated category, plus a handful of explicit rules. Only decay factors
//! no greater than 1 are ever applied to the lead count, so adding a
//! category can never increase it.
//!
//! `project_with_jitter` adds display noise to the lead count. The noise is
//! cosmetic and carries no statistical meaning.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{C_LEVEL, ENTERPRISE_BRACKET, FilterCategory};
use crate::model::filter::FilterState;

/// Projection constants for one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Leads matched by an empty selection.
    pub base_population: u32,
    /// Share of leads expected to answer before rule adjustments.
    pub response_rate: f64,
    /// Share of responses expected to turn into a meeting.
    pub meeting_rate: f64,
    /// Multiplier applied to the lead count when the enterprise bracket is selected.
    pub enterprise_boost: f64,
    pub c_level_response_penalty: f64,
    pub recent_activity_response_bonus: f64,
    pub interaction_response_bonus: f64,
    pub min_response_rate: f64,
    pub max_response_rate: f64,
    /// Half-width of the display noise, as a fraction of the lead count.
    pub jitter: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            base_population: 2500,
            response_rate: 0.10,
            meeting_rate: 0.25,
            enterprise_boost: 1.5,
            c_level_response_penalty: 0.04,
            recent_activity_response_bonus: 0.03,
            interaction_response_bonus: 0.02,
            min_response_rate: 0.04,
            max_response_rate: 0.15,
            jitter: 0.15,
        }
    }
}

/// Derived figures shown in the estimate panel. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateProjection {
    pub potential_leads: u32,
    pub expected_responses: u32,
    pub estimated_meetings: u32,
    pub conversion_rate_percent: f64,
}

/// Multiplicative decay applied once when `category` has any selection.
pub fn decay_factor(category: FilterCategory) -> f64 {
    match category {
        FilterCategory::Industries => 0.70,
        FilterCategory::CompanySizes => 0.65,
        FilterCategory::HierarchyLevels => 0.80,
        FilterCategory::FunctionalRoles => 0.75,
        FilterCategory::Countries => 0.85,
        FilterCategory::States => 0.80,
        FilterCategory::Cities => 0.70,
        FilterCategory::TechStacks => 0.65,
        FilterCategory::RecentActivities => 0.80,
        FilterCategory::Interactions => 0.85,
        FilterCategory::CustomTags => 0.70,
        FilterCategory::AnnualRevenues => 0.75,
    }
}

/// Lead multiplier for one populated category, rules included.
fn category_multiplier(filters: &FilterState, category: FilterCategory, config: &EstimateConfig) -> f64 {
    let mut factor = decay_factor(category);
    if category == FilterCategory::CompanySizes
        && filters.contains_plain(FilterCategory::CompanySizes, ENTERPRISE_BRACKET)
    {
        factor *= config.enterprise_boost;
    }
    // keeps the lead count non-increasing whatever the config says
    factor.min(1.0)
}

fn response_rate(filters: &FilterState, config: &EstimateConfig) -> f64 {
    let mut rate = config.response_rate;
    if filters.contains_plain(FilterCategory::HierarchyLevels, C_LEVEL) {
        rate -= config.c_level_response_penalty;
    }
    if filters.is_populated(FilterCategory::RecentActivities) {
        rate += config.recent_activity_response_bonus;
    }
    if filters.is_populated(FilterCategory::Interactions) {
        rate += config.interaction_response_bonus;
    }
    rate.clamp(config.min_response_rate, config.max_response_rate)
}

/// Deterministic projection for `filters`.
pub fn project(filters: &FilterState, config: &EstimateConfig) -> EstimateProjection {
    let leads = filters
        .populated_categories()
        .fold(f64::from(config.base_population), |acc, category| {
            acc * category_multiplier(filters, category, config)
        })
        .round();
    let rate = response_rate(filters, config);
    let responses = (leads * rate).round();
    let meetings = (responses * config.meeting_rate).round();

    EstimateProjection {
        potential_leads: leads as u32,
        expected_responses: responses as u32,
        estimated_meetings: meetings as u32,
        conversion_rate_percent: (rate * 1000.0).round() / 10.0,
    }
}

/// `project` with ±`config.jitter` noise on `potential_leads`, for display.
///
/// Seed `rng` to make the output reproducible; the other figures are left
/// exactly as `project` computes them.
pub fn project_with_jitter<R: Rng + ?Sized>(
    filters: &FilterState,
    config: &EstimateConfig,
    rng: &mut R,
) -> EstimateProjection {
    let mut projection = project(filters, config);
    if config.jitter > 0.0 {
        let noise = rng.gen_range(-config.jitter..=config.jitter);
        let noisy = (f64::from(projection.potential_leads) * (1.0 + noise)).round();
        projection.potential_leads = noisy.max(0.0) as u32;
    }
    projection
}
