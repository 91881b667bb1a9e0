//! mediate - two colleagues talking through a mediator
//!
//! Colleagues never reference each other. Each holds a handle to a
//! [`ConcreteMediator`], which keeps the two colleagues in slots keyed by
//! [`Role`] and relays every message to the slot opposite the sender.
//!
//! # Wiring
//!
//! The mediator and its colleagues depend on each other, so they are wired in
//! two phases: the mediator is created empty, colleagues are created with a
//! handle to it, then the colleagues are registered. The mediator only keeps
//! weak references; whoever built the colleagues owns them.
//!
//! ```
//! use std::rc::Rc;
//! use mediate::{Config, MemorySink, run_demo};
//!
//! let sink = Rc::new(MemorySink::new());
//! run_demo(&Config::default(), sink.clone())?;
//! assert_eq!(sink.lines()[0], "colleague two received: eat rice");
//! # Ok::<(), mediate::MediatorError>(())
//! ```
//!
//! # Modules
//!
//! - [`mediator`] - mediator trait, slots and routing
//! - [`colleague`] - colleague trait and the labelled colleague
//! - [`output`] - sinks deliveries are emitted to
//! - [`wiring`] - two-phase builder and the demo run
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod colleague;
pub mod config;
pub mod error;
pub mod mediator;
pub mod output;
pub mod wiring;

pub use colleague::{COLLEAGUE_ONE, COLLEAGUE_TWO, Colleague, ConcreteColleague};
pub use config::Config;
pub use error::MediatorError;
pub use mediator::{ColleagueId, ConcreteMediator, Delivery, Mediator, MediatorHandle, MediatorStats, Role};
pub use output::{ConsoleSink, MemorySink, OutputFormat, Sink};
pub use wiring::{Wiring, run_demo};
