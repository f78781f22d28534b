//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, ViewState};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    /// Start a fetch of the user resource.
    ///
    /// No-op while a request is already in flight; overlapping retries are
    /// ignored rather than raced.
    pub fn start_fetch(&mut self) -> Option<NetworkCommand> {
        if self.view.is_loading() {
            return None;
        }

        // Entering Loading clears any prior error or data
        self.view = ViewState::Loading;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::FetchUser {
            id,
            url: self.endpoint.clone(),
        })
    }

    /// Re-run the fetch after a failure
    pub fn retry(&mut self) -> Option<NetworkCommand> {
        if !self.view.can_retry() {
            return None;
        }
        self.start_fetch()
    }

    /// Apply a network response.
    ///
    /// Responses whose id does not match the pending request are stale and
    /// dropped. A matching response always leaves the loading view, on the
    /// success and error paths alike.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::User { user, time_ms, .. } => {
                self.time_ms = time_ms;
                self.view = ViewState::Loaded(user);
            }
            NetworkResponse::Error {
                message, time_ms, ..
            } => {
                self.time_ms = time_ms;
                self.view = ViewState::Failed(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_USER_URL;
    use crate::models::User;

    fn sample_user() -> User {
        User {
            id: 1,
            name: String::from("Leanne Graham"),
            email: String::from("Sincere@april.biz"),
            phone: String::from("1-770-736-8031 x56442"),
            website: String::from("hildegard.org"),
        }
    }

    #[test]
    fn test_start_fetch_enters_loading() {
        let mut state = AppState::default();

        let cmd = state.start_fetch().expect("fetch command");
        match cmd {
            NetworkCommand::FetchUser { id, url } => {
                assert_eq!(id, 1);
                assert_eq!(url, DEFAULT_USER_URL);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(state.view.is_loading());
        assert_eq!(state.view.marker(), Some("loading"));
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_start_fetch_while_loading_is_noop() {
        let mut state = AppState::default();
        state.start_fetch().unwrap();

        assert!(state.start_fetch().is_none());
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_success_response_loads_user() {
        let mut state = AppState::default();
        state.start_fetch().unwrap();

        state.handle_response(NetworkResponse::User {
            id: 1,
            user: sample_user(),
            time_ms: 12,
        });

        assert_eq!(state.view, ViewState::Loaded(sample_user()));
        assert_eq!(state.view.marker(), Some("user-data"));
        assert!(!state.view.is_loading());
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.time_ms, 12);
    }

    #[test]
    fn test_error_response_enters_failed() {
        let mut state = AppState::default();
        state.start_fetch().unwrap();

        state.handle_response(NetworkResponse::Error {
            id: 1,
            message: String::from("Network error"),
            time_ms: 5,
        });

        assert_eq!(state.view, ViewState::Failed(String::from("Network error")));
        assert_eq!(state.view.marker(), Some("error"));
        assert!(state.view.can_retry());
        assert!(!state.view.is_loading());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = AppState::default();
        state.start_fetch().unwrap();

        state.handle_response(NetworkResponse::Error {
            id: 99,
            message: String::from("late failure"),
            time_ms: 5,
        });

        assert!(state.view.is_loading());
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_retry_after_failure_reissues_fetch() {
        let mut state = AppState::default();
        state.start_fetch().unwrap();
        state.handle_response(NetworkResponse::Error {
            id: 1,
            message: String::from("Error: 500"),
            time_ms: 3,
        });

        let cmd = state.retry().expect("retry command");
        match cmd {
            NetworkCommand::FetchUser { id, url } => {
                assert_eq!(id, 2);
                assert_eq!(url, DEFAULT_USER_URL);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(state.view.is_loading());

        state.handle_response(NetworkResponse::User {
            id: 2,
            user: sample_user(),
            time_ms: 8,
        });
        assert_eq!(state.view, ViewState::Loaded(sample_user()));
    }

    #[test]
    fn test_retry_requires_failed_view() {
        let mut state = AppState::default();
        assert!(state.retry().is_none());

        state.start_fetch().unwrap();
        state.handle_response(NetworkResponse::User {
            id: 1,
            user: sample_user(),
            time_ms: 8,
        });
        assert!(state.retry().is_none());
    }
}
