//! Reference check for the composite trapezoidal rule
//!
//! Integrates each reference case, compares the estimate against its
//! precomputed value, and exits non-zero if any case falls outside the
//! tolerance.

use clap::Parser;
use log::info;
use quadrature::reference::{DEFAULT_TOLERANCE, REFERENCE_CASES};

#[derive(Parser, Debug)]
#[command(
    name = "Trapezoid Check",
    about = "Checks the trapezoidal rule against precomputed reference integrals",
    long_about = None
)]
struct Args {
    /// Absolute tolerance against the precomputed values
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Also print the error against the analytic integral
    #[arg(long)]
    verbose: bool,
}

/// Accepts only finite, strictly positive tolerances
fn parse_tolerance(raw: &str) -> Result<f64, String> {
    let tolerance: f64 = raw
        .parse()
        .map_err(|err| format!("'{raw}' is not a number: {err}"))?;
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(format!(
            "tolerance must be a finite positive number, got {raw}"
        ));
    }
    Ok(tolerance)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    info!("Checking {} reference integrals", REFERENCE_CASES.len());

    let mut failures = Vec::new();
    for case in REFERENCE_CASES.iter() {
        let outcome = case.evaluate(args.tolerance)?;
        let status = if outcome.passed { "ok" } else { "FAIL" };
        println!(
            "{:<10} [{}, {}] n={:<3} {:.9}  expected {:.6}  {}",
            case.name,
            case.lower,
            case.upper,
            case.subdivisions,
            outcome.value,
            case.expected,
            status
        );
        if args.verbose {
            println!(
                "           analytic {:.9}, discretization error {:+.3e}",
                case.exact, outcome.discretization_error
            );
        }
        if !outcome.passed {
            failures.push(case.name);
        }
    }

    if !failures.is_empty() {
        return Err(format!(
            "{} reference integral(s) outside tolerance {:.1e}: {}",
            failures.len(),
            args.tolerance,
            failures.join(", ")
        )
        .into());
    }

    println!("All reference integrals passed");
    Ok(())
}
