//! Output sinks for colleague deliveries

use std::cell::RefCell;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MediatorError;
use crate::mediator::Delivery;

/// How deliveries are rendered on the console
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

/// Destination for what colleagues receive
pub trait Sink {
    fn emit(&self, delivery: &Delivery) -> Result<(), MediatorError>;
}

/// Writes one line per delivery to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a delivery as a single line in this sink's format
    pub fn render(&self, delivery: &Delivery) -> Result<String, MediatorError> {
        match self.format {
            OutputFormat::Text => Ok(delivery.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(delivery)?),
        }
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, delivery: &Delivery) -> Result<(), MediatorError> {
        debug!(format = ?self.format, recipient = %delivery.recipient, "ConsoleSink::emit: called");
        let line = self.render(delivery)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Keeps deliveries in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: RefCell<Vec<Delivery>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.borrow().clone()
    }

    /// Deliveries rendered as text lines
    pub fn lines(&self) -> Vec<String> {
        self.deliveries.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.deliveries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.borrow().is_empty()
    }
}

impl Sink for MemorySink {
    fn emit(&self, delivery: &Delivery) -> Result<(), MediatorError> {
        debug!(recipient = %delivery.recipient, "MemorySink::emit: called");
        self.deliveries.borrow_mut().push(delivery.clone());
        Ok(())
    }
}
