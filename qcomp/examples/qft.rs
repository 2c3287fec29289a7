//! Quantum Fourier transform of a basis state and back
//!
//! Usage: `cargo run --example qft -- [num_qubits] [input]`

use qcomp::prelude::*;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let num_qubits: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(4);
    let input: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);

    let basis = BasisState::new(input, num_qubits)?;
    let forward = qft_circuit(num_qubits)?;
    let inverse = inverse_qft_circuit(num_qubits)?;
    println!("QFT on {num_qubits} qubits: {} gates", forward.len());

    let mut computer = Computer::new(num_qubits)?;
    computer.set_basis_state(basis)?;

    let start = Instant::now();
    computer.apply_circuit_fast2(&forward)?;
    println!("QFT{basis} ({:?}):\n{computer}", start.elapsed());

    computer.apply_circuit_fast2(&inverse)?;
    println!("after inverse:\n{computer}");
    println!("norm = {:.12}", computer.norm());

    Ok(())
}
