//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::ViewState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// The view to draw
    pub view: ViewState,
    /// Endpoint the user resource is fetched from
    pub endpoint: String,
    /// Round-trip time of the last settled request
    pub time_ms: u64,
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_USER_URL;
        RenderState {
            view: ViewState::Idle,
            endpoint: String::from(DEFAULT_USER_URL),
            time_ms: 0,
        }
    }
}
