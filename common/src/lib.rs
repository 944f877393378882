//! Shared campaign model and dashboard logic.
//!
//! Everything here is deterministic and free of browser globals: the
//! frontend plugs storage, time and the chat widget in through `ports`.
//!
//! - `catalog`: filter categories and their selectable values.
//! - `model`: filter values/state, campaign draft and record, contact record.
//! - `store`: the persisted filter state store.
//! - `estimate`: lead-estimate projection.
//! - `submission`: preview/submit state machine and download document.
//! - `playback`: scripted confirmation log on virtual time.

pub mod catalog;
pub mod estimate;
pub mod model;
pub mod playback;
pub mod ports;
pub mod store;
pub mod submission;
