//! Benchmarks for the three gate application strategies
//!
//! Two circuit shapes per width: a Hadamard on every qubit, and X, Y, Z on
//! every qubit. The dense reference costs O(4^n) per gate and is only run on
//! the small widths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qcomp_core::Circuit;
use qcomp_gates::make_gate;
use qcomp_state::{Computer, ComputerConfig};

const WIDTHS: [usize; 3] = [4, 8, 16];
const DENSE_MAX_WIDTH: usize = 8;

fn hadamard_layer(num_qubits: usize) -> Circuit {
    (0..num_qubits)
        .map(|q| make_gate("H", q, None).unwrap())
        .collect()
}

fn pauli_layer(num_qubits: usize) -> Circuit {
    (0..num_qubits)
        .flat_map(|q| ["X", "Y", "Z"].map(|name| make_gate(name, q, None).unwrap()))
        .collect()
}

fn bench_circuit(c: &mut Criterion, group_name: &str, build: fn(usize) -> Circuit) {
    let mut group = c.benchmark_group(group_name);

    for &num_qubits in WIDTHS.iter() {
        let circuit = build(num_qubits);
        group.throughput(Throughput::Elements(1u64 << num_qubits));

        if num_qubits <= DENSE_MAX_WIDTH {
            group.bench_with_input(
                BenchmarkId::new("apply_circuit", num_qubits),
                &circuit,
                |b, circuit| {
                    let mut computer = Computer::new(num_qubits).unwrap();
                    b.iter(|| computer.apply_circuit(black_box(circuit)).unwrap())
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("apply_circuit_fast", num_qubits),
            &circuit,
            |b, circuit| {
                let mut computer = Computer::new(num_qubits).unwrap();
                b.iter(|| computer.apply_circuit_fast(black_box(circuit)).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("apply_circuit_fast2", num_qubits),
            &circuit,
            |b, circuit| {
                let mut computer =
                    Computer::with_config(num_qubits, ComputerConfig::sequential()).unwrap();
                b.iter(|| computer.apply_circuit_fast2(black_box(circuit)).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("apply_circuit_fast2_parallel", num_qubits),
            &circuit,
            |b, circuit| {
                let mut computer =
                    Computer::with_config(num_qubits, ComputerConfig::parallel()).unwrap();
                b.iter(|| computer.apply_circuit_fast2(black_box(circuit)).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_hadamard_layer(c: &mut Criterion) {
    bench_circuit(c, "hadamard_layer", hadamard_layer);
}

fn bench_pauli_layer(c: &mut Criterion) {
    bench_circuit(c, "pauli_layer", pauli_layer);
}

criterion_group!(benches, bench_hadamard_layer, bench_pauli_layer);
criterion_main!(benches);
