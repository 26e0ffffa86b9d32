//! Trapezoidal integration utility

use thiserror::Error;

/// Errors that can occur during trapezoidal integration
#[derive(Debug, Error, PartialEq)]
pub enum TrapezoidError {
    #[error("invalid argument: n must be positive, got {0}")]
    InvalidSubdivisions(i64),
}

/// Approximates the definite integral of `f` over `[a, b]` with the composite
/// trapezoidal rule on `n` equal-width subintervals.
///
/// The interior samples `f(a + i*h)` for `i = 1..n` are summed left to right
/// and combined as `(f(a) + 2*S + f(b)) * h / 2`, with `h = (b - a) / n`.
/// Reversed bounds give a negative step and therefore the negated integral;
/// `a == b` yields zero.
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals, must be at least 1
///
/// # Returns
///
/// The approximated integral, or [`TrapezoidError::InvalidSubdivisions`] when
/// `n <= 0`. Non-finite values produced by `f` are not trapped and propagate
/// into the result.
///
/// # Example
///
/// ```
/// use quadrature::trapezoid::trapezoidal_rule;
///
/// let area = trapezoidal_rule(|x| x * x, 0.0, 1.0, 1).unwrap();
/// assert_eq!(area, 0.5);
/// ```
pub fn trapezoidal_rule<F>(f: F, a: f64, b: f64, n: i64) -> Result<f64, TrapezoidError>
where
    F: Fn(f64) -> f64,
{
    if n <= 0 {
        return Err(TrapezoidError::InvalidSubdivisions(n));
    }

    let h = (b - a) / n as f64;

    let mut interior_sum = 0.0;
    for i in 1..n {
        interior_sum += f(a + i as f64 * h);
    }

    Ok((f(a) + 2.0 * interior_sum + f(b)) * h / 2.0)
}
