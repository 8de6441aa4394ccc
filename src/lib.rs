//! # DLT Dashboard - Super Lotto analysis client
//!
//! Client side of the Super Lotto (DLT) analysis and prediction system.
//! All statistics, predictions and backtests are computed by the backend;
//! this crate talks to it and keeps the navigation and UI state.
//!
//! ## Architecture
//!
//! - **API**: HTTP client wrapper and the per-area endpoint groups
//! - **Models**: Wire types returned by the backend
//! - **Router**: Route table and the title guard
//! - **State**: Centralized store for UI flags and notifications
//! - **App**: Wires the client, router and store together
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod state;

pub use api::HttpClient;
pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use router::Router;
pub use state::Store;
