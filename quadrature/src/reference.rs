//! Reference integrals with precomputed trapezoid values
//!
//! Each case pins the integrand, bounds and subdivision count together with the
//! value the composite trapezoidal rule must reproduce, plus the analytic
//! integral so the discretization error can be reported alongside.

use log::{debug, warn};

use crate::trapezoid::{trapezoidal_rule, TrapezoidError};

/// Absolute tolerance used when comparing against precomputed values
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A fixed integration problem with known answers
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCase {
    /// Human readable integrand
    pub name: &'static str,
    pub integrand: fn(f64) -> f64,
    pub lower: f64,
    pub upper: f64,
    pub subdivisions: i64,
    /// Precomputed trapezoid estimate
    pub expected: f64,
    /// Analytic value of the integral
    pub exact: f64,
}

/// Result of running one reference case
#[derive(Debug, Clone, Copy)]
pub struct CaseOutcome {
    pub value: f64,
    /// |value - expected|
    pub deviation: f64,
    /// value - exact
    pub discretization_error: f64,
    pub passed: bool,
}

fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

fn decaying_exponential(x: f64) -> f64 {
    (-x).exp()
}

fn lorentzian(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

pub static REFERENCE_CASES: [ReferenceCase; 3] = [
    ReferenceCase {
        name: "1/x",
        integrand: reciprocal,
        lower: 1.0,
        upper: 2.0,
        subdivisions: 10,
        expected: 0.693771,
        exact: std::f64::consts::LN_2,
    },
    ReferenceCase {
        name: "exp(-x)",
        integrand: decaying_exponential,
        lower: 0.0,
        upper: 1.0,
        subdivisions: 10,
        expected: 0.632647,
        // 1 - 1/e
        exact: 0.632_120_558_828_557_7,
    },
    ReferenceCase {
        name: "1/(1+x^2)",
        integrand: lorentzian,
        lower: 0.0,
        upper: 1.0,
        subdivisions: 20,
        expected: 0.785294,
        exact: std::f64::consts::FRAC_PI_4,
    },
];

impl ReferenceCase {
    /// Integrates the case and compares the estimate against `expected`.
    pub fn evaluate(&self, tolerance: f64) -> Result<CaseOutcome, TrapezoidError> {
        let value = trapezoidal_rule(self.integrand, self.lower, self.upper, self.subdivisions)?;
        let deviation = (value - self.expected).abs();
        let passed = deviation < tolerance;

        debug!(
            "{} on [{}, {}] with n={}: {:.9} (deviation {:.3e})",
            self.name, self.lower, self.upper, self.subdivisions, value, deviation
        );
        if !passed {
            warn!(
                "{} deviates from {} by {:.3e}, tolerance {:.1e}",
                self.name, self.expected, deviation, tolerance
            );
        }

        Ok(CaseOutcome {
            value,
            deviation,
            discretization_error: value - self.exact,
            passed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        let one_minus_inv_e = 1.0 - (-1.0f64).exp();
        assert!((REFERENCE_CASES[1].exact - one_minus_inv_e).abs() < 1e-15);
    }

    #[test]
    fn test_all_cases_pass_default_tolerance() {
        for case in REFERENCE_CASES.iter() {
            let outcome = case.evaluate(DEFAULT_TOLERANCE).unwrap();
            assert!(outcome.passed, "{} gave {}", case.name, outcome.value);
        }
    }

    #[test]
    fn test_discretization_error_sign() {
        // 1/x and exp(-x) are convex on their intervals, so the chords lie above
        let convex = &REFERENCE_CASES[..2];
        for case in convex {
            let outcome = case.evaluate(DEFAULT_TOLERANCE).unwrap();
            assert!(outcome.discretization_error > 0.0, "{}", case.name);
        }

        // 1/(1+x^2) is concave near zero and the endpoint slopes dominate
        let outcome = REFERENCE_CASES[2].evaluate(DEFAULT_TOLERANCE).unwrap();
        assert!(outcome.discretization_error < 0.0);

        for case in REFERENCE_CASES.iter() {
            let outcome = case.evaluate(DEFAULT_TOLERANCE).unwrap();
            assert!(outcome.discretization_error.abs() < 1e-3, "{}", case.name);
        }
    }

    #[test]
    fn test_tight_tolerance_fails() {
        let outcome = REFERENCE_CASES[0].evaluate(1e-12).unwrap();
        assert!(!outcome.passed);
    }

    #[test]
    fn test_invalid_case_reports_error() {
        let case = ReferenceCase {
            subdivisions: 0,
            ..REFERENCE_CASES[0]
        };
        assert_eq!(
            case.evaluate(DEFAULT_TOLERANCE).unwrap_err(),
            TrapezoidError::InvalidSubdivisions(0)
        );
    }
}
