//! Seams between the campaign logic and the browser.
//!
//! The dashboard logic never touches `window` directly: storage, time and
//! the third-party chat widget are reached through these traits. The
//! frontend supplies DOM-backed implementations; tests use the in-memory
//! ones defined here.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// String-keyed storage for the dashboard draft.
///
/// Writes are fire-and-forget: an implementation that cannot write logs the
/// failure and carries on, the in-memory state stays authoritative.
pub trait PersistencePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PersistencePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<P: PersistencePort + ?Sized> PersistencePort for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Loader for the embeddable chat widget.
pub trait WidgetLoader {
    /// Whether the widget script is already present.
    fn is_loaded(&self) -> bool;
    /// Injects the script. Returns `false` when injection failed.
    fn load(&self) -> bool;
}

/// Loads the widget unless it is already there. Several entry points call
/// this, so it must be safe to call any number of times.
pub fn ensure_widget(loader: &dyn WidgetLoader) -> bool {
    if loader.is_loaded() {
        log::debug!("chat widget already present");
        return true;
    }
    let loaded = loader.load();
    if !loaded {
        log::warn!("chat widget could not be injected");
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingLoader {
        present: Cell<bool>,
        loads: Cell<usize>,
    }

    impl WidgetLoader for CountingLoader {
        fn is_loaded(&self) -> bool {
            self.present.get()
        }

        fn load(&self) -> bool {
            self.loads.set(self.loads.get() + 1);
            self.present.set(true);
            true
        }
    }

    #[test]
    fn widget_is_injected_once() {
        let loader = CountingLoader::default();
        assert!(ensure_widget(&loader));
        assert!(ensure_widget(&loader));
        assert!(ensure_widget(&loader));
        assert_eq!(loader.loads.get(), 1);
    }

    #[test]
    fn memory_storage_counts_writes_and_removes() {
        let storage = MemoryStorage::new();
        storage.set("a", "1");
        storage.set("a", "2");
        assert_eq!(storage.get("a").as_deref(), Some("2"));
        assert_eq!(storage.writes(), 2);
        storage.remove("a");
        assert!(storage.is_empty());
    }
}
