//! The arbiter: event routing and ledger ownership.

pub mod arbiter;

pub use arbiter::Arbiter;
