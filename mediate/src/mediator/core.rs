//! ConcreteMediator implementation

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::messages::{ColleagueId, MediatorStats, Role};
use crate::colleague::Colleague;
use crate::error::MediatorError;

/// Anything that can route a message on behalf of a colleague
pub trait Mediator {
    /// Route `message` from `sender` to the other registered colleague
    fn send(&self, message: &str, sender: &ColleagueId) -> Result<(), MediatorError>;
}

/// A registered colleague
///
/// The mediator does not own its colleagues; the slot only keeps a weak
/// reference so colleagues can hold a strong handle back to the mediator.
struct Slot {
    id: ColleagueId,
    colleague: Weak<dyn Colleague>,
}

/// Mediator with exactly two colleague slots
#[derive(Default)]
pub struct ConcreteMediator {
    first: RefCell<Option<Slot>>,
    second: RefCell<Option<Slot>>,
    stats: Cell<MediatorStats>,
}

impl ConcreteMediator {
    /// Create an unwired mediator
    pub fn new() -> Rc<Self> {
        debug!("ConcreteMediator::new: called");
        Rc::new(Self::default())
    }

    fn slot(&self, role: Role) -> &RefCell<Option<Slot>> {
        match role {
            Role::First => &self.first,
            Role::Second => &self.second,
        }
    }

    /// Store a colleague in the given slot, replacing any previous one
    pub fn register<C>(&self, role: Role, colleague: &Rc<C>)
    where
        C: Colleague + 'static,
    {
        let id = colleague.id().clone();
        debug!(%role, %id, "ConcreteMediator::register: called");
        let weak: Weak<C> = Rc::downgrade(colleague);
        let weak: Weak<dyn Colleague> = weak;
        let previous = self.slot(role).replace(Some(Slot { id, colleague: weak }));
        if let Some(previous) = previous {
            debug!(%role, previous = %previous.id, "ConcreteMediator::register: replaced colleague");
        }
    }

    pub fn register_first<C>(&self, colleague: &Rc<C>)
    where
        C: Colleague + 'static,
    {
        self.register(Role::First, colleague);
    }

    pub fn register_second<C>(&self, colleague: &Rc<C>)
    where
        C: Colleague + 'static,
    {
        self.register(Role::Second, colleague);
    }

    /// Find the slot a colleague is registered in
    ///
    /// The first slot wins if the same colleague sits in both.
    pub fn role_of(&self, id: &ColleagueId) -> Option<Role> {
        [Role::First, Role::Second]
            .into_iter()
            .find(|role| self.slot(*role).borrow().as_ref().is_some_and(|slot| &slot.id == id))
    }

    /// True once both slots hold a colleague
    pub fn is_wired(&self) -> bool {
        self.first.borrow().is_some() && self.second.borrow().is_some()
    }

    pub fn stats(&self) -> MediatorStats {
        self.stats.get()
    }

    /// First empty slot, if any
    fn unwired_slot(&self) -> Option<Role> {
        [Role::First, Role::Second]
            .into_iter()
            .find(|role| self.slot(*role).borrow().is_none())
    }

    fn resolve_target(&self, sender: &ColleagueId) -> Result<Rc<dyn Colleague>, MediatorError> {
        // Nothing is routed until both slots are set, whoever the sender is
        if let Some(role) = self.unwired_slot() {
            return Err(MediatorError::Unregistered { role });
        }

        let role = self
            .role_of(sender)
            .ok_or_else(|| MediatorError::UnknownSender { id: sender.clone() })?;
        let target = role.peer();

        // Clone the weak ref out so the slot is not borrowed during notify
        let weak = self
            .slot(target)
            .borrow()
            .as_ref()
            .map(|slot| slot.colleague.clone())
            .ok_or(MediatorError::Unregistered { role: target })?;

        weak.upgrade().ok_or(MediatorError::ColleagueDropped { role: target })
    }

    fn record(&self, routed: bool) {
        let mut stats = self.stats.get();
        if routed {
            stats.routed += 1;
        } else {
            stats.rejected += 1;
        }
        self.stats.set(stats);
    }
}

impl Mediator for ConcreteMediator {
    fn send(&self, message: &str, sender: &ColleagueId) -> Result<(), MediatorError> {
        debug!(%sender, %message, "ConcreteMediator::send: called");
        let target = match self.resolve_target(sender) {
            Ok(target) => target,
            Err(e) => {
                warn!(%sender, error = %e, "Rejected send");
                self.record(false);
                return Err(e);
            }
        };

        debug!(target = %target.id(), "ConcreteMediator::send: routing");
        let result = target.notify(message);
        if let Err(e) = &result {
            warn!(target = %target.id(), error = %e, "Delivery failed");
        }
        self.record(result.is_ok());
        result
    }
}
