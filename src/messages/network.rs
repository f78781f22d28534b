//! Network messages - communication between App and Network layers

use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the user resource
    FetchUser { id: u64, url: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Successful fetch with a decoded user record
    User { id: u64, user: User, time_ms: u64 },
    /// Error response
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::User { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
