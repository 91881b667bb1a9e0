//! Integration tests for mediate
//!
//! These exercise the public API end to end: wiring, routing and sinks.

use std::cell::RefCell;
use std::rc::Rc;

use mediate::{
    Colleague, ColleagueId, ConcreteColleague, ConcreteMediator, Config, Delivery, MediatorError, MediatorHandle,
    MediatorStats, MemorySink, Role, Sink, Wiring, run_demo,
};
use proptest::prelude::*;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_demo_scenario() {
    let sink = Rc::new(MemorySink::new());
    run_demo(&Config::default(), sink.clone()).expect("Demo should route both messages");

    assert_eq!(
        sink.lines(),
        vec!["colleague two received: eat rice", "colleague one received: you're treating"]
    );
}

#[test]
fn test_only_first_registered_fails_without_emitting() {
    let mediator = ConcreteMediator::new();
    let sink = Rc::new(MemorySink::new());
    let c1 = ConcreteColleague::one(mediator.clone(), sink.clone());
    let _c2 = ConcreteColleague::two(mediator.clone(), sink.clone());
    mediator.register_first(&c1);

    let err = c1.send("x").unwrap_err();

    assert!(matches!(err, MediatorError::Unregistered { role: Role::Second }));
    assert!(sink.is_empty());
    assert_eq!(mediator.stats().rejected, 1);
}

#[test]
fn test_reregistered_slot_receives_instead_of_old() {
    let sink = Rc::new(MemorySink::new());
    let wiring = Wiring::build(&Config::default(), sink.clone());
    let replacement = ConcreteColleague::new(wiring.mediator.clone(), "colleague three", sink.clone());
    wiring.mediator.register_second(&replacement);

    wiring.first.send("who's there").unwrap();

    assert_eq!(sink.lines(), vec!["colleague three received: who's there"]);
    assert_eq!(wiring.mediator.role_of(wiring.second.id()), None);

    // The replaced colleague is no longer a known sender
    let err = wiring.second.send("me?").unwrap_err();
    assert!(matches!(err, MediatorError::UnknownSender { .. }));
}

#[test]
fn test_message_content_is_relayed_verbatim() {
    let sink = Rc::new(MemorySink::new());
    let wiring = Wiring::build(&Config::default(), sink.clone());

    for message in ["", "  padded  ", "吃饭喇嘛", "line\nbreak"] {
        wiring.first.send(message).unwrap();
    }

    let received: Vec<String> = sink.deliveries().into_iter().map(|d| d.message).collect();
    assert_eq!(received, vec!["", "  padded  ", "吃饭喇嘛", "line\nbreak"]);
}

#[test]
fn test_only_second_registered_fails_for_either_sender() {
    let mediator = ConcreteMediator::new();
    let sink = Rc::new(MemorySink::new());
    let c1 = ConcreteColleague::one(mediator.clone(), sink.clone());
    let c2 = ConcreteColleague::two(mediator.clone(), sink.clone());
    mediator.register_second(&c2);

    for colleague in [&c1, &c2] {
        let err = colleague.send("x").unwrap_err();
        assert!(matches!(err, MediatorError::Unregistered { role: Role::First }));
    }
    assert!(sink.is_empty());
}

/// Sink whose writes always fail
struct ClosedPipe;

impl Sink for ClosedPipe {
    fn emit(&self, _delivery: &Delivery) -> Result<(), MediatorError> {
        Err(std::io::Error::other("pipe closed").into())
    }
}

#[test]
fn test_sink_failure_surfaces_as_output_error() {
    let wiring = Wiring::build(&Config::default(), Rc::new(ClosedPipe));

    let err = wiring.first.send("x").unwrap_err();

    assert!(matches!(err, MediatorError::Output(_)));
    assert!(err.to_string().contains("pipe closed"));
    assert_eq!(wiring.stats(), MediatorStats { routed: 0, rejected: 1 });
}

#[test]
fn test_demo_stops_at_first_failed_delivery() {
    let err = run_demo(&Config::default(), Rc::new(ClosedPipe)).unwrap_err();
    assert!(matches!(err, MediatorError::Output(_)));
}

// =============================================================================
// Custom colleagues
// =============================================================================

/// Colleague that answers every message it receives, once
struct Echo {
    handle: MediatorHandle,
    replied: RefCell<bool>,
}

impl Colleague for Echo {
    fn id(&self) -> &ColleagueId {
        self.handle.id()
    }

    fn send(&self, message: &str) -> Result<(), MediatorError> {
        self.handle.send(message)
    }

    fn notify(&self, message: &str) -> Result<(), MediatorError> {
        if self.replied.replace(true) {
            return Ok(());
        }
        self.send(&format!("echo: {}", message))
    }
}

#[test]
fn test_colleague_may_reply_from_notify() {
    let mediator = ConcreteMediator::new();
    let sink = Rc::new(MemorySink::new());
    let speaker = ConcreteColleague::one(mediator.clone(), sink.clone());
    let echo = Rc::new(Echo {
        handle: MediatorHandle::new(mediator.clone(), ColleagueId::new("echo")),
        replied: RefCell::new(false),
    });
    mediator.register_first(&speaker);
    mediator.register_second(&echo);

    speaker.send("hello").unwrap();

    assert_eq!(sink.lines(), vec!["colleague one received: echo: hello"]);
    assert_eq!(mediator.stats().routed, 2);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_each_send_reaches_only_the_peer(message in ".*", from_first in any::<bool>()) {
        let sink = Rc::new(MemorySink::new());
        let wiring = Wiring::build(&Config::default(), sink.clone());
        let (from, expected) = if from_first {
            (Role::First, "colleague two")
        } else {
            (Role::Second, "colleague one")
        };

        wiring.send_from(from, &message, 1).unwrap();

        let deliveries = sink.deliveries();
        prop_assert_eq!(deliveries.len(), 1);
        prop_assert_eq!(deliveries[0].recipient.as_str(), expected);
        prop_assert_eq!(&deliveries[0].message, &message);
    }

    #[test]
    fn prop_repeated_sends_are_not_deduplicated(message in "[a-z ]{0,20}", repeat in 0usize..8) {
        let sink = Rc::new(MemorySink::new());
        let wiring = Wiring::build(&Config::default(), sink.clone());

        wiring.send_from(Role::First, &message, repeat).unwrap();

        prop_assert_eq!(sink.len(), repeat);
        prop_assert!(sink.deliveries().iter().all(|d| d.message == message));
        prop_assert_eq!(wiring.stats().routed, repeat as u64);
    }
}
