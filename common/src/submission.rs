//! Campaign submission flow: `Configuring -> Previewing -> Submitted`.
//!
//! Submission is local only. The campaign is validated, turned into a
//! `CampaignRecord`, serialized to the `<name>-filtros.json` document the
//! browser downloads, and the persisted draft is cleared. The only way this
//! can fail is the validation guard (or calling it from the wrong stage);
//! a refused transition leaves the stage untouched.

use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::estimate::{EstimateConfig, project};
use crate::model::campaign::{CampaignDraft, CampaignRecord};
use crate::playback::{LogPlayback, PlaybackConfig};
use crate::ports::{Clock, PersistencePort};
use crate::store::FilterStore;

pub const DEFAULT_FILE_STEM: &str = "campana";
pub const DOWNLOAD_SUFFIX: &str = "-filtros.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Configuring,
    Previewing,
    Submitted,
}

/// Reasons a draft cannot move forward. The messages are shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingresa un nombre para la campaña.")]
    MissingCampaignName,
    #[error("Selecciona al menos un filtro.")]
    NoFiltersSelected,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("La campaña no se puede enviar desde el paso actual ({0:?}).")]
    InvalidStage(SubmissionStage),
    #[error("No se pudo generar el archivo de la campaña: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Guard shared by the preview and submit transitions.
pub fn validate(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingCampaignName);
    }
    if draft.filters.is_empty() {
        return Err(ValidationError::NoFiltersSelected);
    }
    Ok(())
}

/// A file ready to be handed to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// `<campaign name>-filtros.json`, with characters browsers reject in
/// filenames replaced by dashes.
pub fn download_filename(campaign_name: &str) -> String {
    let stem: String = campaign_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '-'
            } else {
                c
            }
        })
        .collect();
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        format!("{}{}", DEFAULT_FILE_STEM, DOWNLOAD_SUFFIX)
    } else {
        format!("{}{}", stem, DOWNLOAD_SUFFIX)
    }
}

/// Everything produced by a successful submit.
///
/// `download` is complete as soon as `submit` returns and should be handed
/// to the browser right away: the draft has already been cleared, so a
/// playback cut short must not cost the user the file.
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: CampaignRecord,
    pub download: DownloadFile,
    pub playback: LogPlayback,
}

#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    stage: SubmissionStage,
    estimate: EstimateConfig,
    playback: PlaybackConfig,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new(EstimateConfig::default(), PlaybackConfig::default())
    }
}

impl SubmissionFlow {
    pub fn new(estimate: EstimateConfig, playback: PlaybackConfig) -> Self {
        Self {
            stage: SubmissionStage::Configuring,
            estimate,
            playback,
        }
    }

    pub fn stage(&self) -> SubmissionStage {
        self.stage
    }

    /// `Configuring -> Previewing`. Calling it again while previewing is a
    /// no-op once the guard passes.
    pub fn preview(&mut self, draft: &CampaignDraft) -> Result<(), SubmissionError> {
        if self.stage == SubmissionStage::Submitted {
            return Err(SubmissionError::InvalidStage(self.stage));
        }
        validate(draft)?;
        self.stage = SubmissionStage::Previewing;
        Ok(())
    }

    /// `Previewing -> Configuring`. Returns whether the stage changed.
    pub fn back(&mut self) -> bool {
        if self.stage == SubmissionStage::Previewing {
            self.stage = SubmissionStage::Configuring;
            true
        } else {
            false
        }
    }

    /// `Previewing -> Submitted`.
    ///
    /// Re-checks the guard, builds the download document and the log
    /// playback, then clears the draft from `store` and its storage.
    pub fn submit<P: PersistencePort>(
        &mut self,
        store: &mut FilterStore<P>,
        clock: &dyn Clock,
    ) -> Result<Submission, SubmissionError> {
        if self.stage != SubmissionStage::Previewing {
            return Err(SubmissionError::InvalidStage(self.stage));
        }
        let draft = store.draft();
        validate(&draft)?;

        let record = CampaignRecord::from_draft(&draft, Uuid::new_v4().to_string());
        let download = DownloadFile {
            filename: download_filename(&record.name),
            mime: "application/json",
            contents: record.to_json()?,
        };
        let projection = project(&record.filters, &self.estimate);
        let playback = LogPlayback::for_campaign(&record, &projection, &self.playback);

        store.clear(clock);
        self.stage = SubmissionStage::Submitted;
        info!(
            "campaign {} submitted with {} selected values",
            record.id,
            record.filters.selected_count()
        );

        Ok(Submission {
            record,
            download,
            playback,
        })
    }

    /// Leaves the submitted state for a fresh, empty draft.
    pub fn start_new<P: PersistencePort>(&mut self, store: &mut FilterStore<P>, clock: &dyn Clock) {
        store.clear(clock);
        self.stage = SubmissionStage::Configuring;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterCategory;
    use crate::model::filter::{FilterState, FilterValue};
    use crate::ports::{FixedClock, MemoryStorage};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap())
    }

    fn draft(name: &str, filters: FilterState) -> CampaignDraft {
        CampaignDraft {
            name: name.to_string(),
            filters,
            created_at: clock().0,
        }
    }

    fn saas() -> FilterState {
        let mut filters = FilterState::new();
        filters.toggle(FilterCategory::Industries, FilterValue::plain("SaaS"));
        filters
    }

    #[test]
    fn preview_requires_a_name() {
        let mut flow = SubmissionFlow::default();
        let err = flow.preview(&draft("", saas())).unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Validation(ValidationError::MissingCampaignName)
        ));
        assert_eq!(flow.stage(), SubmissionStage::Configuring);
        assert_eq!(err.to_string(), "Ingresa un nombre para la campaña.");
    }

    #[test]
    fn preview_requires_a_filter() {
        let mut flow = SubmissionFlow::default();
        let err = flow.preview(&draft("Q2 Leads", FilterState::new())).unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Validation(ValidationError::NoFiltersSelected)
        ));
        assert_eq!(flow.stage(), SubmissionStage::Configuring);
    }

    #[test]
    fn whitespace_name_counts_as_missing() {
        assert_eq!(
            validate(&draft("   ", saas())),
            Err(ValidationError::MissingCampaignName)
        );
    }

    #[test]
    fn back_only_leaves_preview() {
        let mut flow = SubmissionFlow::default();
        assert!(!flow.back());
        flow.preview(&draft("Q2 Leads", saas())).unwrap();
        assert!(flow.back());
        assert_eq!(flow.stage(), SubmissionStage::Configuring);
    }

    #[test]
    fn submit_is_refused_outside_preview() {
        let mut flow = SubmissionFlow::default();
        let mut store = FilterStore::new(MemoryStorage::new(), &clock());
        let err = flow.submit(&mut store, &clock()).unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::InvalidStage(SubmissionStage::Configuring)
        ));
    }

    #[test]
    fn submit_rechecks_the_guard() {
        let mut flow = SubmissionFlow::default();
        let mut store = FilterStore::new(MemoryStorage::new(), &clock());
        store.set_campaign_name("Q2 Leads");
        store
            .toggle_filter_value(FilterCategory::Industries, FilterValue::plain("SaaS"))
            .unwrap();
        flow.preview(&store.draft()).unwrap();

        store.set_campaign_name("");
        assert!(flow.submit(&mut store, &clock()).is_err());
        assert_eq!(flow.stage(), SubmissionStage::Previewing);
        assert!(!store.filters().is_empty());
    }

    #[test]
    fn filenames_fall_back_and_strip_separators() {
        assert_eq!(download_filename("Q2 Leads"), "Q2-Leads-filtros.json");
        assert_eq!(download_filename("  "), "campana-filtros.json");
        assert_eq!(download_filename("a/b:c"), "a-b-c-filtros.json");
        assert_eq!(download_filename("Campaña Ñandú"), "Campaña-Ñandú-filtros.json");
    }

    proptest! {
        #[test]
        fn empty_name_is_always_refused(count in 0usize..5) {
            let mut filters = FilterState::new();
            for value in crate::catalog::INDUSTRIES.iter().take(count) {
                filters.toggle(FilterCategory::Industries, FilterValue::plain(*value));
            }
            let mut flow = SubmissionFlow::default();
            prop_assert!(flow.preview(&draft("", filters)).is_err());
            prop_assert_eq!(flow.stage(), SubmissionStage::Configuring);
        }

        #[test]
        fn empty_filters_are_always_refused(name in ".{0,24}") {
            let mut flow = SubmissionFlow::default();
            prop_assert!(flow.preview(&draft(&name, FilterState::new())).is_err());
            prop_assert_eq!(flow.stage(), SubmissionStage::Configuring);
        }
    }
}
