//! Number classification core for the numclass service.
//!
//! This crate is the pure, I/O-free heart of the service. Every function
//! is total over `i64` (negative numbers and zero included) and works on
//! the absolute value of its input unless stated otherwise.
//!
//! # Modules
//!
//! - [`classify`] -- Primality, perfection, Armstrong status, parity and
//!   digit sum predicates
//! - [`types`] -- The [`Property`] tag and the [`ClassificationResult`]
//!   value object returned to clients

pub mod classify;
pub mod types;

// Re-export all public items at crate root for convenience.
pub use classify::{
    classify_properties, digit_sum, digits, is_armstrong, is_perfect, is_prime, parity,
};
pub use types::{ClassificationResult, Property};
