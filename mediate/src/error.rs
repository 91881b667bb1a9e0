//! Mediator error types

use thiserror::Error;

use crate::mediator::{ColleagueId, Role};

/// Errors that can occur while routing a message between colleagues
#[derive(Debug, Error)]
pub enum MediatorError {
    #[error("No colleague registered in the {role} slot")]
    Unregistered { role: Role },

    #[error("Sender {id} is not registered with this mediator")]
    UnknownSender { id: ColleagueId },

    #[error("Colleague in the {role} slot was dropped after registration")]
    ColleagueDropped { role: Role },

    #[error("Failed to write delivery: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode delivery: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_message_names_slot() {
        let err = MediatorError::Unregistered { role: Role::Second };

        let msg = err.to_string();
        assert!(msg.contains("second"));
    }

    #[test]
    fn test_unknown_sender_message_names_id() {
        let id = ColleagueId::from_string("stranger.0193".to_string());
        let err = MediatorError::UnknownSender { id };

        let msg = err.to_string();
        assert!(msg.contains("stranger.0193"));
    }
}
