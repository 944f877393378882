use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::filter::FilterState;

/// A campaign while it is still being configured on the dashboard.
///
/// Owned by the dashboard session that created it. It is mutated as the
/// name or filters change and discarded from storage once submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub filters: FilterState,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status written into the downloaded campaign document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Submitted by the client, not yet picked up by the prospecting team.
    Pending,
}

/// The document handed to the browser as `<name>-filtros.json` when a
/// campaign is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub name: String,
    /// UUID v4 generated at submission time.
    pub id: String,
    /// RFC 3339 / ISO-8601 timestamp of the draft creation.
    pub created_at: String,
    pub filters: FilterState,
    pub status: CampaignStatus,
}

impl CampaignRecord {
    pub fn from_draft(draft: &CampaignDraft, id: String) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            id,
            created_at: draft.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            filters: draft.filters.clone(),
            status: CampaignStatus::Pending,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterCategory;
    use crate::model::filter::FilterValue;
    use chrono::TimeZone;

    #[test]
    fn record_serializes_with_download_field_names() {
        let mut filters = FilterState::new();
        filters.replace(FilterCategory::Industries, vec![FilterValue::plain("SaaS")]);
        let draft = CampaignDraft {
            name: "  Q2 Leads ".into(),
            filters,
            created_at: Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).unwrap(),
        };

        let record = CampaignRecord::from_draft(&draft, "abc".into());
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(json["name"], "Q2 Leads");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["created_at"], "2024-04-02T09:30:00.000Z");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["filters"]["industries"][0], "SaaS");
    }
}
