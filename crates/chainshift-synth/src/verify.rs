//! Classical verification of CNOT patterns.
//!
//! CNOT networks map basis states to basis states, so a pattern can be
//! checked exactly by propagating bits: each `cx c, t` performs
//! `bits[t] ^= bits[c]`.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use chainshift_ir::{CircuitDag, Instruction, IrError, QubitId, StandardGate};

use crate::error::{SynthError, SynthResult};
use crate::sink::CxGate;

/// Propagate `bits` through `gates`. Handles missing from `bits` read as 0.
pub fn simulate_xor<Q>(gates: &[CxGate<Q>], bits: &mut FxHashMap<Q, bool>)
where
    Q: Clone + Eq + Hash,
{
    for gate in gates {
        if bits.get(&gate.control).copied().unwrap_or(false) {
            *bits.entry(gate.target.clone()).or_insert(false) ^= true;
        }
    }
}

/// Propagate `bits` through the basis-state gates of a circuit DAG.
///
/// Operations are taken in topological order; gates on disjoint qubits
/// commute, so any topological order gives the same result.
///
/// # Errors
///
/// [`SynthError::Ir`] if an operation carries the wrong number of operands.
pub fn simulate_dag(dag: &CircuitDag, bits: &mut FxHashMap<QubitId, bool>) -> SynthResult<()> {
    for (_, inst) in dag.topological_ops() {
        apply_basis_gate(inst, bits)?;
    }
    Ok(())
}

fn apply_basis_gate(inst: &Instruction, bits: &mut FxHashMap<QubitId, bool>) -> SynthResult<()> {
    match inst.gate {
        StandardGate::X => {
            let &[q] = inst.qubits.as_slice() else {
                return Err(arity_mismatch(inst));
            };
            *bits.entry(q).or_insert(false) ^= true;
        }
        StandardGate::CX => {
            let (c, t) = inst.cx_operands().ok_or_else(|| arity_mismatch(inst))?;
            if bits.get(&c).copied().unwrap_or(false) {
                *bits.entry(t).or_insert(false) ^= true;
            }
        }
        StandardGate::Swap => {
            let &[a, b] = inst.qubits.as_slice() else {
                return Err(arity_mismatch(inst));
            };
            let va = bits.get(&a).copied().unwrap_or(false);
            let vb = bits.get(&b).copied().unwrap_or(false);
            bits.insert(a, vb);
            bits.insert(b, va);
        }
    }
    Ok(())
}

fn arity_mismatch(inst: &Instruction) -> SynthError {
    IrError::QubitCountMismatch {
        gate_name: inst.name().to_string(),
        expected: inst.gate.num_qubits(),
        got: u32::try_from(inst.qubits.len()).unwrap_or(u32::MAX),
    }
    .into()
}

/// Check that every gate acts on two neighbouring positions of `path`.
///
/// # Errors
///
/// [`SynthError::NonAdjacent`] for the first gate that does not.
pub fn check_adjacency<Q>(path: &[Q], gates: &[CxGate<Q>]) -> SynthResult<()>
where
    Q: Eq + Hash,
{
    let positions: FxHashMap<&Q, usize> = path.iter().enumerate().map(|(i, q)| (q, i)).collect();

    for (index, gate) in gates.iter().enumerate() {
        let control = positions.get(&gate.control).copied();
        let target = positions.get(&gate.target).copied();
        match (control, target) {
            (Some(c), Some(t)) if c.abs_diff(t) == 1 => {}
            _ => {
                return Err(SynthError::NonAdjacent {
                    index,
                    control,
                    target,
                });
            }
        }
    }
    Ok(())
}

/// Where a single set bit at each path position ends up.
///
/// Entry `k` is the path position holding the only set bit after running
/// `gates` on the basis state with just `path[k]` set, or `None` if the
/// result is not a single bit on the path.
pub fn basis_image<Q>(path: &[Q], gates: &[CxGate<Q>]) -> Vec<Option<usize>>
where
    Q: Clone + Eq + Hash,
{
    (0..path.len())
        .map(|k| {
            let mut bits = FxHashMap::default();
            bits.insert(path[k].clone(), true);
            simulate_xor(gates, &mut bits);

            let mut set = bits.iter().filter(|&(_, &v)| v).map(|(q, _)| q);
            let first = set.next()?;
            if set.next().is_some() {
                return None;
            }
            path.iter().position(|q| q == first)
        })
        .collect()
}

/// Whether `gates` rotate the path by one position towards its start:
/// the bit at `path[k]` moves to `path[k - 1]` and `path[0]` wraps to the end.
pub fn is_cyclic_shift<Q>(path: &[Q], gates: &[CxGate<Q>]) -> bool
where
    Q: Clone + Eq + Hash,
{
    let len = path.len();
    basis_image(path, gates)
        .into_iter()
        .enumerate()
        .all(|(k, image)| image == Some((k + len - 1) % len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::CxSequence;

    fn gates(pairs: &[(u32, u32)]) -> Vec<CxGate<u32>> {
        pairs.iter().map(|&(c, t)| CxGate::new(c, t)).collect()
    }

    #[test]
    fn test_simulate_xor() {
        let mut bits = FxHashMap::default();
        bits.insert(0u32, true);
        simulate_xor(&gates(&[(0, 1), (1, 2), (2, 1)]), &mut bits);
        assert_eq!(bits.get(&0), Some(&true));
        assert_eq!(bits.get(&1), Some(&false));
        assert_eq!(bits.get(&2), Some(&true));
    }

    #[test]
    fn test_swap_is_a_transposition() {
        let swap = gates(&[(0, 1), (1, 0), (0, 1)]);
        assert_eq!(basis_image(&[0, 1], &swap), vec![Some(1), Some(0)]);
        assert!(is_cyclic_shift(&[0, 1], &swap));
    }

    #[test]
    fn test_basis_image_detects_fan_out() {
        let fan_out = gates(&[(0, 1)]);
        assert_eq!(basis_image(&[0, 1], &fan_out), vec![None, Some(1)]);
        assert!(!is_cyclic_shift(&[0, 1], &fan_out));
    }

    #[test]
    fn test_adjacency() {
        let path = [0u32, 1, 2, 3];
        check_adjacency(&path, &gates(&[(0, 1), (2, 1), (3, 2)])).unwrap();

        match check_adjacency(&path, &gates(&[(0, 1), (0, 2)])) {
            Err(SynthError::NonAdjacent {
                index,
                control,
                target,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(control, Some(0));
                assert_eq!(target, Some(2));
            }
            other => panic!("Expected NonAdjacent, got {other:?}"),
        }

        assert!(check_adjacency(&path, &gates(&[(3, 9)])).is_err());
    }

    #[test]
    fn test_simulate_dag_matches_sequence() {
        use chainshift_ir::Circuit;

        let mut circuit = Circuit::with_size("sim", 3);
        circuit.x(QubitId(0)).unwrap();
        circuit.swap(QubitId(0), QubitId(2)).unwrap();
        circuit.cx(QubitId(2), QubitId(1)).unwrap();

        let mut bits = FxHashMap::default();
        simulate_dag(circuit.dag(), &mut bits).unwrap();
        assert_eq!(bits.get(&QubitId(0)).copied(), Some(false));
        assert_eq!(bits.get(&QubitId(1)).copied(), Some(true));
        assert_eq!(bits.get(&QubitId(2)).copied(), Some(true));

        let seq: CxSequence<QubitId> = [CxGate::new(QubitId(2), QubitId(1))].into_iter().collect();
        let mut bits: FxHashMap<_, _> = [(QubitId(2), true)].into_iter().collect();
        simulate_xor(seq.gates(), &mut bits);
        assert_eq!(bits.get(&QubitId(1)).copied(), Some(true));
    }

    #[test]
    fn test_malformed_instruction_is_reported() {
        let mut bits = FxHashMap::default();
        for inst in [
            Instruction::gate(StandardGate::X, [QubitId(0), QubitId(1)]),
            Instruction::gate(StandardGate::CX, [QubitId(0)]),
            Instruction::gate(StandardGate::Swap, [QubitId(0), QubitId(1), QubitId(2)]),
        ] {
            let err = apply_basis_gate(&inst, &mut bits).unwrap_err();
            assert!(
                matches!(
                    &err,
                    SynthError::Ir(IrError::QubitCountMismatch { gate_name, .. })
                        if gate_name == inst.name()
                ),
                "unexpected error for {inst}: {err:?}"
            );
        }
        assert!(bits.is_empty());
    }

    #[test]
    fn test_cx_uses_control_and_target_order() {
        let mut bits: FxHashMap<_, _> = [(QubitId(1), true)].into_iter().collect();
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1));
        apply_basis_gate(&inst, &mut bits).unwrap();
        assert_eq!(bits.get(&QubitId(0)).copied(), None);

        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(1), QubitId(0));
        apply_basis_gate(&inst, &mut bits).unwrap();
        assert_eq!(bits.get(&QubitId(0)).copied(), Some(true));
    }
}
