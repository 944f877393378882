//! Filter state store for the campaign dashboard.
//!
//! `FilterStore` owns the selected filters, the campaign name and the draft
//! timestamp, and mirrors the first two to a `PersistencePort` after every
//! mutation. Two independent entries are written: the JSON-encoded filter
//! map under `FILTERS_KEY` and the raw campaign name under `NAME_KEY`.
//!
//! Rehydration never fails: a missing entry means "nothing saved", a
//! malformed one is logged and ignored.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use thiserror::Error;

use crate::catalog::FilterCategory;
use crate::model::campaign::CampaignDraft;
use crate::model::filter::{FilterState, FilterValue};
use crate::ports::{Clock, PersistencePort};

pub const FILTERS_KEY: &str = "leadflow.campaign.filters";
pub const NAME_KEY: &str = "leadflow.campaign.name";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("\"{value}\" no es un valor válido para {}.", .category.label())]
    ValueNotInDomain {
        category: FilterCategory,
        value: String,
    },
}

pub struct FilterStore<P: PersistencePort> {
    filters: FilterState,
    campaign_name: String,
    created_at: DateTime<Utc>,
    persistence: P,
}

impl<P: PersistencePort> FilterStore<P> {
    /// An empty store. Nothing is written until the first mutation.
    pub fn new(persistence: P, clock: &dyn Clock) -> Self {
        Self {
            filters: FilterState::new(),
            campaign_name: String::new(),
            created_at: clock.now(),
            persistence,
        }
    }

    /// Restores the store from whatever `persistence` holds.
    pub fn rehydrate(persistence: P, clock: &dyn Clock) -> Self {
        let filters = persistence
            .get(FILTERS_KEY)
            .and_then(|raw| match serde_json::from_str::<FilterState>(&raw) {
                Ok(mut filters) => {
                    let dropped = filters.retain_accepted();
                    if dropped > 0 {
                        warn!("dropped {} persisted filter values outside their catalog", dropped);
                    }
                    Some(filters)
                }
                Err(e) => {
                    warn!("discarding malformed persisted filters: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        let campaign_name = persistence.get(NAME_KEY).unwrap_or_default();

        debug!(
            "rehydrated campaign draft with {} selected values",
            filters.selected_count()
        );

        Self {
            filters,
            campaign_name,
            created_at: clock.now(),
            persistence,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn campaign_name(&self) -> &str {
        &self.campaign_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn draft(&self) -> CampaignDraft {
        CampaignDraft {
            name: self.campaign_name.clone(),
            filters: self.filters.clone(),
            created_at: self.created_at,
        }
    }

    /// Replaces the campaign name. Empty names are allowed here; the
    /// submission guard is what rejects them.
    pub fn set_campaign_name(&mut self, name: impl Into<String>) {
        self.campaign_name = name.into();
        self.persist_name();
    }

    /// Replaces the whole selection for `category`.
    ///
    /// Fails without touching the state if any value is outside the
    /// category's domain.
    pub fn update_filter(
        &mut self,
        category: FilterCategory,
        values: Vec<FilterValue>,
    ) -> Result<(), StoreError> {
        if let Some(bad) = values.iter().find(|v| !category.accepts(v)) {
            return Err(StoreError::ValueNotInDomain {
                category,
                value: bad.text().to_string(),
            });
        }
        self.filters.replace(category, values);
        self.persist_filters();
        Ok(())
    }

    /// Removes `value` if selected, appends it otherwise. Returns whether it
    /// ends up selected. Toggling the same value twice is a no-op overall.
    pub fn toggle_filter_value(
        &mut self,
        category: FilterCategory,
        value: FilterValue,
    ) -> Result<bool, StoreError> {
        if !category.accepts(&value) {
            return Err(StoreError::ValueNotInDomain {
                category,
                value: value.text().to_string(),
            });
        }
        let selected = self.filters.toggle(category, value);
        self.persist_filters();
        Ok(selected)
    }

    pub fn is_value_selected(&self, category: FilterCategory, value: &FilterValue) -> bool {
        self.filters.contains(category, value)
    }

    /// Starts over with a fresh draft and forgets the persisted one.
    pub fn clear(&mut self, clock: &dyn Clock) {
        self.filters.clear();
        self.campaign_name.clear();
        self.created_at = clock.now();
        self.persistence.remove(FILTERS_KEY);
        self.persistence.remove(NAME_KEY);
        debug!("campaign draft cleared");
    }

    fn persist_filters(&self) {
        match serde_json::to_string(&self.filters) {
            Ok(json) => {
                self.persistence.set(FILTERS_KEY, &json);
                debug!("persisted {} selected values", self.filters.selected_count());
            }
            Err(e) => warn!("could not serialize filters: {}", e),
        }
    }

    fn persist_name(&self) {
        self.persistence.set(NAME_KEY, &self.campaign_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::TagKind;
    use crate::ports::{FixedClock, MemoryStorage};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    fn saas() -> FilterValue {
        FilterValue::plain("SaaS")
    }

    #[test]
    fn toggling_twice_leaves_category_empty() {
        let mut store = FilterStore::new(MemoryStorage::new(), &clock());
        store.toggle_filter_value(FilterCategory::Industries, saas()).unwrap();
        store.toggle_filter_value(FilterCategory::Industries, saas()).unwrap();

        assert!(store.filters().values(FilterCategory::Industries).is_empty());
        assert!(store.filters().is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let storage = MemoryStorage::new();
        let mut store = FilterStore::new(&storage, &clock());

        store.set_campaign_name("Q2 Leads");
        store.toggle_filter_value(FilterCategory::Industries, saas()).unwrap();
        store
            .update_filter(
                FilterCategory::CompanySizes,
                vec![FilterValue::plain("51-200")],
            )
            .unwrap();

        assert_eq!(storage.writes(), 3);
        assert_eq!(storage.get(NAME_KEY).as_deref(), Some("Q2 Leads"));
        let saved: FilterState = serde_json::from_str(&storage.get(FILTERS_KEY).unwrap()).unwrap();
        assert_eq!(&saved, store.filters());
    }

    #[test]
    fn out_of_domain_values_are_refused_without_side_effects() {
        let storage = MemoryStorage::new();
        let mut store = FilterStore::new(&storage, &clock());

        let err = store
            .update_filter(
                FilterCategory::CompanySizes,
                vec![FilterValue::plain("51-200"), FilterValue::plain("enorme")],
            )
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::ValueNotInDomain {
                category: FilterCategory::CompanySizes,
                value: "enorme".into()
            }
        );
        assert!(store.filters().is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn open_categories_take_free_text() {
        let mut store = FilterStore::new(MemoryStorage::new(), &clock());
        let tag = FilterValue::Title("Head of Growth".into());
        assert!(store.toggle_filter_value(FilterCategory::CustomTags, tag.clone()).unwrap());
        assert!(store.is_value_selected(FilterCategory::CustomTags, &tag));
    }

    #[test]
    fn update_with_empty_list_removes_category() {
        let mut store = FilterStore::new(MemoryStorage::new(), &clock());
        store.update_filter(FilterCategory::Industries, vec![saas()]).unwrap();
        store.update_filter(FilterCategory::Industries, Vec::new()).unwrap();
        assert!(store.filters().is_empty());
    }

    #[test]
    fn rehydrate_restores_saved_draft() {
        let storage = MemoryStorage::new();
        {
            let mut store = FilterStore::new(&storage, &clock());
            store.set_campaign_name("Retail LATAM");
            store.toggle_filter_value(FilterCategory::Countries, FilterValue::plain("Chile")).unwrap();
        }

        let store = FilterStore::rehydrate(&storage, &clock());
        assert_eq!(store.campaign_name(), "Retail LATAM");
        assert!(store.is_value_selected(FilterCategory::Countries, &FilterValue::plain("Chile")));
    }

    #[test]
    fn rehydrate_tolerates_missing_and_malformed_entries() {
        let storage = MemoryStorage::new();
        let store = FilterStore::rehydrate(&storage, &clock());
        assert!(store.filters().is_empty());
        assert_eq!(store.campaign_name(), "");

        storage.set(FILTERS_KEY, "{not json");
        storage.set(NAME_KEY, "Solo nombre");
        let store = FilterStore::rehydrate(&storage, &clock());
        assert!(store.filters().is_empty());
        assert_eq!(store.campaign_name(), "Solo nombre");
    }

    #[test]
    fn rehydrate_drops_unknown_category_keys_as_malformed() {
        let storage = MemoryStorage::new();
        storage.set(FILTERS_KEY, r#"{"planets":["Mars"]}"#);
        let store = FilterStore::rehydrate(&storage, &clock());
        assert!(store.filters().is_empty());
    }

    #[test]
    fn clear_resets_state_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = FilterStore::new(&storage, &clock());
        store.set_campaign_name("X");
        store.toggle_filter_value(FilterCategory::Industries, saas()).unwrap();

        store.clear(&clock());

        assert!(store.filters().is_empty());
        assert_eq!(store.campaign_name(), "");
        assert!(storage.is_empty());
    }

    fn catalog_pick() -> impl Strategy<Value = (FilterCategory, FilterValue)> {
        let kinds = prop_oneof![
            Just(TagKind::Plain),
            Just(TagKind::Company),
            Just(TagKind::Title)
        ];
        (0..FilterCategory::ALL.len(), any::<prop::sample::Index>(), kinds).prop_map(
            |(i, idx, kind)| {
                let category = FilterCategory::ALL[i];
                let value = match category.domain() {
                    crate::catalog::Domain::Closed(values) => {
                        FilterValue::plain(values[idx.index(values.len())])
                    }
                    // only custom tags take company and title values
                    crate::catalog::Domain::Open if category == FilterCategory::CustomTags => {
                        FilterValue::new(kind, format!("libre-{}", idx.index(50)))
                    }
                    crate::catalog::Domain::Open => {
                        FilterValue::plain(format!("libre-{}", idx.index(50)))
                    }
                };
                (category, value)
            },
        )
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(
            seed in prop::collection::vec(catalog_pick(), 0..12),
            (category, value) in catalog_pick(),
        ) {
            let mut store = FilterStore::new(MemoryStorage::new(), &clock());
            for (c, v) in seed {
                store.toggle_filter_value(c, v).unwrap();
            }
            let before = store.filters().clone();

            store.toggle_filter_value(category, value.clone()).unwrap();
            store.toggle_filter_value(category, value).unwrap();

            prop_assert_eq!(store.filters(), &before);
        }

        #[test]
        fn toggle_flips_selection(
            seed in prop::collection::vec(catalog_pick(), 0..12),
            (category, value) in catalog_pick(),
        ) {
            let mut store = FilterStore::new(MemoryStorage::new(), &clock());
            for (c, v) in seed {
                store.toggle_filter_value(c, v).unwrap();
            }
            let was = store.is_value_selected(category, &value);
            let now = store.toggle_filter_value(category, value.clone()).unwrap();

            prop_assert_eq!(now, !was);
            prop_assert_eq!(store.is_value_selected(category, &value), !was);
        }
    }
}
