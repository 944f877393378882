use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FilterCategory;

/// Kind of a free-text tag typed into the custom tags input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Plain,
    Company,
    Title,
}

/// A single selected filter value.
///
/// Catalog values and plain tags are `Plain`; company names and job titles
/// entered as custom tags carry their kind explicitly instead of a string
/// prefix. On the wire a plain value is a bare JSON string and a tagged one
/// is `{"kind": "company", "value": "Acme"}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "ValueRepr", into = "ValueRepr")]
pub enum FilterValue {
    Plain(String),
    Company(String),
    Title(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Bare(String),
    Tagged { kind: TagKind, value: String },
}

impl From<ValueRepr> for FilterValue {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Bare(value) => FilterValue::Plain(value),
            ValueRepr::Tagged { kind, value } => FilterValue::new(kind, value),
        }
    }
}

impl From<FilterValue> for ValueRepr {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Plain(value) => ValueRepr::Bare(value),
            FilterValue::Company(value) => ValueRepr::Tagged {
                kind: TagKind::Company,
                value,
            },
            FilterValue::Title(value) => ValueRepr::Tagged {
                kind: TagKind::Title,
                value,
            },
        }
    }
}

impl FilterValue {
    pub fn new(kind: TagKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            TagKind::Plain => FilterValue::Plain(value),
            TagKind::Company => FilterValue::Company(value),
            TagKind::Title => FilterValue::Title(value),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        FilterValue::Plain(value.into())
    }

    pub fn kind(&self) -> TagKind {
        match self {
            FilterValue::Plain(_) => TagKind::Plain,
            FilterValue::Company(_) => TagKind::Company,
            FilterValue::Title(_) => TagKind::Title,
        }
    }

    /// The text without its kind.
    pub fn text(&self) -> &str {
        match self {
            FilterValue::Plain(text) | FilterValue::Company(text) | FilterValue::Title(text) => text,
        }
    }

    /// Whether this is the plain catalog entry `text`.
    pub fn is_plain(&self, text: &str) -> bool {
        matches!(self, FilterValue::Plain(value) if value == text)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Plain(text) => write!(f, "{}", text),
            FilterValue::Company(text) => write!(f, "Empresa: {}", text),
            FilterValue::Title(text) => write!(f, "Cargo: {}", text),
        }
    }
}

/// Selected values per category.
///
/// Lists keep insertion order and never hold duplicates. A category with no
/// selection has no entry at all, so an empty map means "no filters".
/// Equality ignores the order inside a category. Deserialized input is
/// normalized the same way, so duplicates and empty lists never survive
/// parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FilterCategory, Vec<FilterValue>>")]
#[serde(into = "BTreeMap<FilterCategory, Vec<FilterValue>>")]
pub struct FilterState {
    selected: BTreeMap<FilterCategory, Vec<FilterValue>>,
}

impl From<BTreeMap<FilterCategory, Vec<FilterValue>>> for FilterState {
    fn from(raw: BTreeMap<FilterCategory, Vec<FilterValue>>) -> Self {
        let mut state = FilterState::new();
        for (category, values) in raw {
            state.replace(category, values);
        }
        state
    }
}

impl From<FilterState> for BTreeMap<FilterCategory, Vec<FilterValue>> {
    fn from(state: FilterState) -> Self {
        state.selected
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        let sorted = |values: &[FilterValue]| {
            let mut values = values.to_vec();
            values.sort();
            values
        };
        self.selected.len() == other.selected.len()
            && self.selected.iter().all(|(category, values)| {
                sorted(values) == sorted(other.values(*category))
            })
    }
}

impl Eq for FilterState {}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, category: FilterCategory) -> &[FilterValue] {
        self.selected
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: FilterCategory, value: &FilterValue) -> bool {
        self.values(category).contains(value)
    }

    /// Whether the plain catalog value `text` is selected under `category`.
    pub fn contains_plain(&self, category: FilterCategory, text: &str) -> bool {
        self.values(category).iter().any(|v| v.is_plain(text))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_populated(&self, category: FilterCategory) -> bool {
        self.selected.contains_key(&category)
    }

    pub fn populated_categories(&self) -> impl Iterator<Item = FilterCategory> + '_ {
        self.selected.keys().copied()
    }

    /// Total number of selected values across every category.
    pub fn selected_count(&self) -> usize {
        self.selected.values().map(Vec::len).sum()
    }

    /// Replaces the list for `category`, dropping duplicates and removing
    /// the entry when nothing is left. Callers check the domain first.
    pub(crate) fn replace(&mut self, category: FilterCategory, values: Vec<FilterValue>) {
        let mut deduped: Vec<FilterValue> = Vec::with_capacity(values.len());
        for value in values {
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        if deduped.is_empty() {
            self.selected.remove(&category);
        } else {
            self.selected.insert(category, deduped);
        }
    }

    /// Removes `value` when present, appends it otherwise. Returns whether it
    /// is selected afterwards.
    pub(crate) fn toggle(&mut self, category: FilterCategory, value: FilterValue) -> bool {
        let list = self.selected.entry(category).or_default();
        let selected = match list.iter().position(|v| v == &value) {
            Some(index) => {
                list.remove(index);
                false
            }
            None => {
                list.push(value);
                true
            }
        };
        if list.is_empty() {
            self.selected.remove(&category);
        }
        selected
    }

    /// Keeps only the values each category accepts; returns how many were
    /// dropped. Used when loading data written by an older catalog.
    pub(crate) fn retain_accepted(&mut self) -> usize {
        let mut dropped = 0;
        for (category, values) in self.selected.iter_mut() {
            let before = values.len();
            let mut seen: Vec<FilterValue> = Vec::with_capacity(before);
            values.retain(|value| {
                let keep = category.accepts(value) && !seen.contains(value);
                if keep {
                    seen.push(value.clone());
                }
                keep
            });
            dropped += before - values.len();
        }
        self.selected.retain(|_, values| !values.is_empty());
        dropped
    }

    pub(crate) fn clear(&mut self) {
        self.selected.clear();
    }
}
