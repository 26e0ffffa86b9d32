//! Numerical quadrature of one-dimensional real functions
//!
//! The integrand is any `Fn(f64) -> f64`; nothing is retained between calls,
//! so integrations may run from as many threads as the caller likes.

pub mod reference;
pub mod trapezoid;

pub use reference::{CaseOutcome, ReferenceCase, DEFAULT_TOLERANCE, REFERENCE_CASES};
pub use trapezoid::{trapezoidal_rule, TrapezoidError};
