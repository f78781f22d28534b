//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::User;

/// The view, as an explicit tagged state.
///
/// Exactly one variant is active at a time; loading, error, and data can
/// never be set simultaneously.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet and no request running
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last fetch succeeded
    Loaded(User),
    /// The last fetch failed, with the message to display
    Failed(String),
}

impl ViewState {
    /// Stable marker identifying the rendered state, for terminal automation
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading => Some("loading"),
            ViewState::Loaded(_) => Some("user-data"),
            ViewState::Failed(_) => Some("error"),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The retry control is only offered after a failure
    pub fn can_retry(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub view: ViewState,
    pub endpoint: String,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub time_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            view: ViewState::Idle,
            endpoint: config.endpoint,
            next_request_id: 1,
            pending_request_id: None,
            time_ms: 0,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Snapshot the state for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            view: self.view.clone(),
            endpoint: self.endpoint.clone(),
            time_ms: self.time_ms,
        }
    }
}
