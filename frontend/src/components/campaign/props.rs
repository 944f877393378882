//! Properties of the `CampaignDashboard` component.

use common::estimate::EstimateConfig;
use yew::prelude::*;

/// Lets a parent tune the dashboard without touching its internals.
#[derive(Properties, PartialEq, Clone)]
pub struct CampaignDashboardProps {
    /// Projection constants. `None` (the default) uses
    /// `EstimateConfig::default()`, the constants the service publishes.
    #[prop_or_default]
    pub estimate_config: Option<EstimateConfig>,

    /// Delay between two lines of the confirmation log, in milliseconds.
    #[prop_or(800)]
    pub line_delay_ms: u64,
}
