//! Prepare a Bell pair with each strategy and print the amplitudes
//!
//! Run with `RUST_LOG=qcomp_state=debug` to see the engine events.

use qcomp::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut bell = Circuit::new();
    bell.append(make_gate("H", 0, None)?);
    bell.append(make_gate("CNOT", 1, Some(0))?);
    println!("circuit: {bell}\n");

    let mut reference = Computer::new(2)?;
    reference.apply_circuit(&bell)?;
    println!("apply_circuit:\n{reference}");

    let mut indexed = Computer::new(2)?;
    indexed.apply_circuit_fast(&bell)?;
    println!("apply_circuit_fast:\n{indexed}");

    let mut blocked = Computer::with_config(2, ComputerConfig::parallel())?;
    blocked.apply_circuit_fast2(&bell)?;
    println!("apply_circuit_fast2:\n{blocked}");

    for (basis, p) in BasisState::all(2)?.zip(blocked.probabilities()) {
        println!("P({basis}) = {p:.3}");
    }

    Ok(())
}
