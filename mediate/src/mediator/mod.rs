//! Mediator for colleague-to-colleague communication
//!
//! Colleagues never hold references to each other. Each one holds a
//! [`MediatorHandle`]; the [`ConcreteMediator`] keeps two slots keyed by
//! [`Role`] and relays every message to the slot opposite the sender.

mod core;
mod handle;
mod messages;

pub use core::{ConcreteMediator, Mediator};
pub use handle::MediatorHandle;
pub use messages::{ColleagueId, Delivery, MediatorStats, Role};
