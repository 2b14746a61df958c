//! Optimistic mutation helpers shared by the cart and notification flows.

mod in_flight;
mod speculative;

pub use in_flight::{InFlightTracker, MutationOutcome, MutationPhase};
pub use speculative::Speculative;
