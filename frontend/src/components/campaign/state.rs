//! Runtime state of the campaign dashboard.
//!
//! The filter selection and campaign name live in a `FilterStore` backed by
//! `localStorage`; the rest is view state (active tab, tag input) and the
//! confirmation playback once a campaign is submitted.

use common::catalog::FilterCategory;
use common::estimate::{project, project_with_jitter, EstimateConfig, EstimateProjection};
use common::model::filter::TagKind;
use common::playback::PlaybackConfig;
use common::ports::SystemClock;
use common::store::FilterStore;
use common::submission::{Submission, SubmissionFlow};
use gloo_timers::callback::Timeout;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::props::CampaignDashboardProps;
use crate::services::storage::LocalStoragePort;

/// Main state container for the `CampaignDashboard`.
///
/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct CampaignDashboard {
    /// Selected filters and campaign name, mirrored to `localStorage`.
    pub store: FilterStore<LocalStoragePort>,

    /// Configuring / previewing / submitted.
    pub flow: SubmissionFlow,

    pub estimate_config: EstimateConfig,

    /// Category whose values are shown in the picker.
    pub active_category: FilterCategory,

    /// Text typed into the free-text input of an open category.
    pub tag_input: String,

    /// Kind applied to the next custom tag.
    pub tag_kind: TagKind,

    /// Figures on display. `potential_leads` carries jitter.
    pub projection: EstimateProjection,

    /// Source of the display jitter.
    pub rng: StdRng,

    /// Result of the last submit: record, download and playback.
    pub submission: Option<Submission>,

    /// Log lines revealed so far.
    pub log_lines: Vec<String>,

    /// Pending playback tick. Dropping it cancels the timer.
    pub playback_timer: Option<Timeout>,

    /// Guard to run first-render notices once.
    pub loaded: bool,
}

impl CampaignDashboard {
    /// Restores the last draft from `localStorage` and computes the first
    /// projection.
    pub fn new(props: &CampaignDashboardProps) -> Self {
        let estimate_config = props.estimate_config.clone().unwrap_or_default();
        let playback = PlaybackConfig {
            line_delay_ms: props.line_delay_ms,
        };
        let store = FilterStore::rehydrate(LocalStoragePort, &SystemClock);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

        let mut dashboard = Self {
            store,
            flow: SubmissionFlow::new(estimate_config.clone(), playback),
            projection: project(&Default::default(), &estimate_config),
            estimate_config,
            active_category: FilterCategory::Industries,
            tag_input: String::new(),
            tag_kind: TagKind::Plain,
            rng: StdRng::seed_from_u64(seed),
            submission: None,
            log_lines: Vec::new(),
            playback_timer: None,
            loaded: false,
        };
        dashboard.refresh_projection();
        dashboard
    }

    /// Recomputes the displayed figures from the current selection.
    pub fn refresh_projection(&mut self) {
        self.projection =
            project_with_jitter(self.store.filters(), &self.estimate_config, &mut self.rng);
    }

    /// Figures without display noise, used in the preview summary.
    pub fn exact_projection(&self) -> EstimateProjection {
        project(self.store.filters(), &self.estimate_config)
    }

    /// Stops the confirmation log. Safe to call when nothing is running.
    pub fn cancel_playback(&mut self) {
        // dropping a gloo `Timeout` clears it
        drop(self.playback_timer.take());
    }
}
