//! Two-phase wiring of a mediator and its two colleagues, and the demo run

use std::rc::Rc;

use tracing::{debug, info};

use crate::colleague::{Colleague, ConcreteColleague};
use crate::config::Config;
use crate::error::MediatorError;
use crate::mediator::{ConcreteMediator, MediatorStats, Role};
use crate::output::Sink;

/// A mediator with both colleagues registered
///
/// Owns the colleagues; the mediator only holds weak references to them, so
/// dropping the wiring drops everything.
pub struct Wiring {
    pub mediator: Rc<ConcreteMediator>,
    pub first: Rc<ConcreteColleague>,
    pub second: Rc<ConcreteColleague>,
}

impl Wiring {
    /// Build an unwired mediator, colleagues that point at it, then register them
    pub fn build(config: &Config, sink: Rc<dyn Sink>) -> Self {
        debug!(first = %config.labels.first, second = %config.labels.second, "Wiring::build: called");
        let mediator = ConcreteMediator::new();

        let first = ConcreteColleague::new(mediator.clone(), config.labels.first.as_str(), sink.clone());
        let second = ConcreteColleague::new(mediator.clone(), config.labels.second.as_str(), sink);

        mediator.register_first(&first);
        mediator.register_second(&second);

        info!(first = %first.id(), second = %second.id(), "Mediator wired");
        Self {
            mediator,
            first,
            second,
        }
    }

    /// The colleague registered in the given slot
    pub fn colleague(&self, role: Role) -> &Rc<ConcreteColleague> {
        match role {
            Role::First => &self.first,
            Role::Second => &self.second,
        }
    }

    /// Send `message` from the colleague in `from`, `repeat` times
    pub fn send_from(&self, from: Role, message: &str, repeat: usize) -> Result<(), MediatorError> {
        debug!(%from, %message, repeat, "Wiring::send_from: called");
        let colleague = self.colleague(from);
        for _ in 0..repeat {
            colleague.send(message)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> MediatorStats {
        self.mediator.stats()
    }
}

/// Wire up both colleagues and have each send its configured message once
pub fn run_demo(config: &Config, sink: Rc<dyn Sink>) -> Result<MediatorStats, MediatorError> {
    debug!("run_demo: called");
    let wiring = Wiring::build(config, sink);

    wiring.first.send(&config.demo.first_message)?;
    wiring.second.send(&config.demo.second_message)?;

    let stats = wiring.stats();
    info!(routed = stats.routed, "Demo complete");
    Ok(stats)
}
