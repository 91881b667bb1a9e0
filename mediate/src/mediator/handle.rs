//! MediatorHandle - what a colleague holds to reach the mediator

use std::rc::Rc;

use tracing::debug;

use super::core::Mediator;
use super::messages::ColleagueId;
use crate::error::MediatorError;

/// Handle for a colleague to send through its mediator
///
/// Bound to one colleague's ID at construction. Cloning shares the same
/// mediator; nothing on the handle can be changed after creation.
#[derive(Clone)]
pub struct MediatorHandle {
    mediator: Rc<dyn Mediator>,
    id: ColleagueId,
}

impl MediatorHandle {
    pub fn new(mediator: Rc<dyn Mediator>, id: ColleagueId) -> Self {
        debug!(%id, "MediatorHandle::new: called");
        Self { mediator, id }
    }

    /// The ID of the colleague this handle speaks for
    pub fn id(&self) -> &ColleagueId {
        &self.id
    }

    /// Send a message as this handle's colleague
    pub fn send(&self, message: &str) -> Result<(), MediatorError> {
        debug!(id = %self.id, %message, "MediatorHandle::send: called");
        self.mediator.send(message, &self.id)
    }
}
