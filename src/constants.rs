//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default URL of the user resource
pub const DEFAULT_USER_URL: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Application name
pub const APP_NAME: &str = "Profile TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Display strings. Single fixed language, no localization mechanism.

/// Shown while the fetch is in flight
pub const LOADING_TEXT: &str = "Loading user data...";

/// Header of the profile view
pub const HEADER_TEXT: &str = "User Profile";

/// Prefix of the displayed error line
pub const ERROR_PREFIX: &str = "Error: ";

/// Label of the retry control
pub const RETRY_TEXT: &str = "Try again";

/// Shown when nothing has been fetched yet
pub const EMPTY_TEXT: &str = "No user data";
