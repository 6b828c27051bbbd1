//! Fun fact provider for the numclass service.
//!
//! Every classified number carries a short human-readable fact. Armstrong
//! numbers get a fact synthesized locally from their digits; every other
//! number is looked up on an external trivia service.
//!
//! # Architecture
//!
//! ```text
//! FactProvider --(Armstrong)--> armstrong_fact()
//!              \-(otherwise)--> timeout(TriviaBackend::lookup) --> fallback on any failure
//! ```
//!
//! The trivia lookup is the only network dependency of the service. It is
//! bounded by a timeout, attempted once, and never surfaces an error to
//! the caller: [`FactProvider::fun_fact`] always returns a string.

pub mod backend;
pub mod config;
pub mod error;
pub mod provider;

// Re-export primary types for convenience.
pub use backend::{create_backend, NumbersApiBackend, StaticTrivia, TriviaBackend};
pub use config::TriviaConfig;
pub use error::FactError;
pub use provider::{armstrong_fact, FactProvider, FALLBACK_FACT};
