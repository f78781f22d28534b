//! # Profile TUI
//!
//! A minimal terminal-based user profile viewer: fetches a single user
//! record from a REST endpoint and renders it, with loading and error
//! states and a user-initiated retry.
//!
//! ## Features
//! - One GET against a configurable endpoint, issued once on startup
//! - Explicit view state machine (idle / loading / loaded / failed)
//! - Retry control after a failure
//! - Endpoint URL read from a config file
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, ViewState};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::User;
pub use network::{FetchError, NetworkActor};
