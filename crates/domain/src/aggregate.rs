//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates driven by domain events.
///
/// Command methods inspect the current state and either reject the command or
/// return the events it produces, without touching state. `apply` then folds
/// those events in:
/// - Given the same state and event, it must always produce the same new state
/// - It must not fail (events represent facts that have happened)
pub trait Aggregate: Sized {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The type of errors this aggregate's commands can produce.
    type Error: std::error::Error;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the number of events applied so far.
    fn version(&self) -> u64;

    /// Applies an event to the aggregate, updating its state.
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }
}
