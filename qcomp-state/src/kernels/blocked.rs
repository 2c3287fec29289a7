//! Blocked gate application (`apply_circuit_fast2`)
//!
//! For a gate on qubit `q` the state is cut into contiguous blocks of
//! `2 * 2^q` amplitudes. Inside a block the lower half has bit `q` clear and
//! the upper half has it set, so the pairs are `(lower[j], upper[j])` and the
//! inner loop runs with unit stride over two slices. Two-qubit gates nest the
//! same split on the lower qubit inside blocks of the higher qubit.
//!
//! Blocks never share an amplitude, so with `parallel` set they are handed to
//! rayon as independent chunks.

use super::{apply_2x2, apply_4x4};
use num_complex::Complex64;
use qcomp_core::{Gate, GateMatrix, Matrix2, Matrix4};
use rayon::prelude::*;

/// Apply a 2×2 matrix to qubit `target`
pub fn apply_single(state: &mut [Complex64], matrix: &Matrix2, target: usize, parallel: bool) {
    let stride = 1usize << target;
    let update = |block: &mut [Complex64]| update_pairs(block, matrix, stride);

    if parallel {
        state.par_chunks_mut(stride * 2).for_each(update);
    } else {
        state.chunks_mut(stride * 2).for_each(update);
    }
}

#[inline]
fn update_pairs(block: &mut [Complex64], matrix: &Matrix2, stride: usize) {
    let (lower, upper) = block.split_at_mut(stride);
    for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
        let (a0, a1) = apply_2x2(matrix, *a, *b);
        *a = a0;
        *b = a1;
    }
}

/// Apply `block` to `target` on the amplitudes whose `control` bit is set
pub fn apply_controlled(
    state: &mut [Complex64],
    block: &Matrix2,
    control: usize,
    target: usize,
    parallel: bool,
) {
    let high = control.max(target);
    let low_stride = 1usize << control.min(target);
    let high_stride = 1usize << high;

    let update = |chunk: &mut [Complex64]| {
        let (lower, upper) = chunk.split_at_mut(high_stride);
        if control == high {
            // control set <=> upper half; pairs on the target inside it
            upper
                .chunks_mut(low_stride * 2)
                .for_each(|sub| update_pairs(sub, block, low_stride));
        } else {
            // target is the high qubit; keep sub-blocks whose control bit is set
            for (l, u) in lower
                .chunks_mut(low_stride * 2)
                .zip(upper.chunks_mut(low_stride * 2))
            {
                for (a, b) in l[low_stride..].iter_mut().zip(u[low_stride..].iter_mut()) {
                    let (a0, a1) = apply_2x2(block, *a, *b);
                    *a = a0;
                    *b = a1;
                }
            }
        }
    };

    if parallel {
        state.par_chunks_mut(high_stride * 2).for_each(update);
    } else {
        state.chunks_mut(high_stride * 2).for_each(update);
    }
}

/// Apply a general 4×4 matrix to the (`control`, `target`) qubit pair
pub fn apply_two_qubit(
    state: &mut [Complex64],
    matrix: &Matrix4,
    control: usize,
    target: usize,
    parallel: bool,
) {
    let control_is_high = control > target;
    let low_stride = 1usize << control.min(target);
    let high_stride = 1usize << control.max(target);

    let update = |chunk: &mut [Complex64]| {
        let (lower, upper) = chunk.split_at_mut(high_stride);
        for (l, u) in lower
            .chunks_mut(low_stride * 2)
            .zip(upper.chunks_mut(low_stride * 2))
        {
            let (l0, l1) = l.split_at_mut(low_stride);
            let (u0, u1) = u.split_at_mut(low_stride);
            // order the four slices by local index 2 * bit(control) + bit(target)
            let mut slots = if control_is_high {
                [l0, l1, u0, u1]
            } else {
                [l0, u0, l1, u1]
            };

            for j in 0..low_stride {
                let out = apply_4x4(
                    matrix,
                    [slots[0][j], slots[1][j], slots[2][j], slots[3][j]],
                );
                for (slot, value) in slots.iter_mut().zip(out) {
                    slot[j] = value;
                }
            }
        }
    };

    if parallel {
        state.par_chunks_mut(high_stride * 2).for_each(update);
    } else {
        state.chunks_mut(high_stride * 2).for_each(update);
    }
}

/// Apply any gate with the blocked traversal
pub fn apply_gate(state: &mut [Complex64], gate: &Gate, parallel: bool) {
    let target = gate.target().index();
    match (gate.matrix(), gate.control()) {
        (GateMatrix::Single(m), _) => apply_single(state, m, target, parallel),
        (GateMatrix::Two(m), Some(control)) => match gate.controlled_block() {
            Some(block) => apply_controlled(state, &block, control.index(), target, parallel),
            None => apply_two_qubit(state, m, control.index(), target, parallel),
        },
        // constructors and the deserializer always set the second qubit
        (GateMatrix::Two(_), None) => {}
    }
}
