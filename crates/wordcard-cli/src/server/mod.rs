//! Local web server for reviewing curated records.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
