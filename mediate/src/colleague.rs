//! Colleagues - participants that only talk through a mediator

use std::rc::Rc;

use tracing::debug;

use crate::error::MediatorError;
use crate::mediator::{ColleagueId, Delivery, Mediator, MediatorHandle};
use crate::output::Sink;

/// Default label of the colleague in the first slot
pub const COLLEAGUE_ONE: &str = "colleague one";

/// Default label of the colleague in the second slot
pub const COLLEAGUE_TWO: &str = "colleague two";

/// A participant that sends via a mediator and is notified by it
pub trait Colleague {
    fn id(&self) -> &ColleagueId;

    /// Hand a message to the mediator for routing
    fn send(&self, message: &str) -> Result<(), MediatorError>;

    /// Receive a message routed by the mediator
    fn notify(&self, message: &str) -> Result<(), MediatorError>;
}

/// Colleague that reports each received message under its label
pub struct ConcreteColleague {
    handle: MediatorHandle,
    label: String,
    sink: Rc<dyn Sink>,
}

impl ConcreteColleague {
    pub fn new(mediator: Rc<dyn Mediator>, label: impl Into<String>, sink: Rc<dyn Sink>) -> Rc<Self> {
        let label = label.into();
        debug!(%label, "ConcreteColleague::new: called");
        let handle = MediatorHandle::new(mediator, ColleagueId::new(&label));
        Rc::new(Self { handle, label, sink })
    }

    /// Colleague labelled "colleague one"
    pub fn one(mediator: Rc<dyn Mediator>, sink: Rc<dyn Sink>) -> Rc<Self> {
        Self::new(mediator, COLLEAGUE_ONE, sink)
    }

    /// Colleague labelled "colleague two"
    pub fn two(mediator: Rc<dyn Mediator>, sink: Rc<dyn Sink>) -> Rc<Self> {
        Self::new(mediator, COLLEAGUE_TWO, sink)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Colleague for ConcreteColleague {
    fn id(&self) -> &ColleagueId {
        self.handle.id()
    }

    fn send(&self, message: &str) -> Result<(), MediatorError> {
        debug!(label = %self.label, %message, "ConcreteColleague::send: called");
        self.handle.send(message)
    }

    fn notify(&self, message: &str) -> Result<(), MediatorError> {
        debug!(label = %self.label, %message, "ConcreteColleague::notify: called");
        self.sink.emit(&Delivery::new(self.label.as_str(), message))
    }
}
