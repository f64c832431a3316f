//! Email adapters.

mod simulated;

pub use simulated::SimulatedMailer;
