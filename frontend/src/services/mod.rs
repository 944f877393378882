//! Browser-side adapters for the ports and side effects `common` leaves out.

pub mod chat_widget;
pub mod config;
pub mod download;
pub mod records;
pub mod storage;
