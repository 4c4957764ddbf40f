//! Aggregate trait: pure decision logic split from state evolution.

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events or an error.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Because `handle` cannot mutate, a rejected command leaves the aggregate
/// exactly as it was.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    ///
    /// Events passed here must have been produced by `handle` against the
    /// current state.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Decide, then apply every resulting event in order.
    fn decide_and_apply(
        &mut self,
        command: &Self::Command,
    ) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}
