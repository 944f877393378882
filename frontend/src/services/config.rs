//! Build-time settings.
//!
//! The client is a static bundle, so these are baked in when it is built,
//! e.g. `RECORDS_API_URL=... trunk build --release`. A missing value turns
//! the matching feature off.

/// Endpoint of the table that receives contact records.
pub const RECORDS_API_URL: Option<&str> = option_env!("RECORDS_API_URL");

/// Bearer token for `RECORDS_API_URL`.
pub const RECORDS_API_TOKEN: Option<&str> = option_env!("RECORDS_API_TOKEN");

/// Script URL of the embeddable chat widget.
pub const CHAT_WIDGET_URL: Option<&str> = option_env!("CHAT_WIDGET_URL");

/// DOM id of the injected chat `<script>`; its presence means "loaded".
pub const CHAT_WIDGET_ELEMENT_ID: &str = "leadflow-chat-widget";
