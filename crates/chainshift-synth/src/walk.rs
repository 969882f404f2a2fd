//! Elementary building blocks: the directional CNOT walk and the 3-CNOT swap.
//!
//! Every other pattern in this crate is a composition of these two.

use tracing::{debug, instrument};

use crate::error::SynthResult;
use crate::sequence::CxSequence;
use crate::sink::CxSink;

/// Append a walk along `path` to `seq`.
///
/// With `up == false` gate `i` is `cx path[i], path[i + 1]`; with `up == true`
/// it is `cx path[i + 1], path[i]`. Gates are appended in increasing `i`.
pub(crate) fn push_walk<Q: Clone>(seq: &mut CxSequence<Q>, path: &[Q], up: bool) {
    for pair in path.windows(2) {
        let (control, target) = if up {
            (&pair[1], &pair[0])
        } else {
            (&pair[0], &pair[1])
        };
        seq.push(control.clone(), target.clone());
    }
}

/// Append a walk along `path` traversed back to front.
pub(crate) fn push_reverse_walk<Q: Clone>(seq: &mut CxSequence<Q>, path: &[Q], up: bool) {
    let reversed: Vec<Q> = path.iter().rev().cloned().collect();
    push_walk(seq, &reversed, up);
}

/// Append `cx a, b; cx b, a; cx a, b`.
pub(crate) fn push_swap<Q: Clone>(seq: &mut CxSequence<Q>, a: &Q, b: &Q) {
    seq.push(a.clone(), b.clone());
    seq.push(b.clone(), a.clone());
    seq.push(a.clone(), b.clone());
}

/// Emit a CNOT walk along `path`.
///
/// Emits `max(len - 1, 0)` CNOTs, one per neighbouring pair, in path order.
/// With `up == false` each pair is controlled from its lower index, with
/// `up == true` from its higher index.
///
/// # Example
///
/// ```rust
/// use chainshift_synth::{CxGate, walk};
///
/// let mut gates: Vec<CxGate<u32>> = vec![];
/// walk(&mut gates, &[0, 1, 2, 3], true).unwrap();
///
/// let pairs: Vec<_> = gates.into_iter().map(CxGate::into_pair).collect();
/// assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
/// ```
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn walk<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let mut seq = CxSequence::with_capacity(path.len().saturating_sub(1));
    push_walk(&mut seq, path, up);
    seq.emit(sink)?;
    debug!(gates = seq.len(), "walk emitted");
    Ok(())
}

/// Emit a 3-CNOT exchange of `a` and `b`.
///
/// The order is fixed at `(a, b), (b, a), (a, b)`; callers choose which
/// neighbour plays `a`.
#[instrument(level = "debug", skip(sink, a, b))]
pub fn swap<Q, S>(sink: &mut S, a: &Q, b: &Q) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let mut seq = CxSequence::with_capacity(3);
    push_swap(&mut seq, a, b);
    seq.emit(sink)?;
    debug!(gates = seq.len(), "swap emitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_pairs(path: &[u32], up: bool) -> Vec<(u32, u32)> {
        let mut seq = CxSequence::new();
        push_walk(&mut seq, path, up);
        seq.pairs()
    }

    #[test]
    fn test_walk_down() {
        assert_eq!(walk_pairs(&[0, 1, 2, 3], false), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_walk_up() {
        assert_eq!(walk_pairs(&[0, 1, 2, 3], true), vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_degenerate_paths_emit_nothing() {
        assert!(walk_pairs(&[], false).is_empty());
        assert!(walk_pairs(&[7], true).is_empty());
    }

    #[test]
    fn test_reverse_walk() {
        let mut seq = CxSequence::new();
        push_reverse_walk(&mut seq, &[2u32, 3], false);
        assert_eq!(seq.pairs(), vec![(3, 2)]);
    }

    #[test]
    fn test_swap_order_is_fixed() {
        let mut sink: Vec<crate::sink::CxGate<u32>> = vec![];
        swap(&mut sink, &4u32, &5u32).unwrap();
        let pairs: Vec<_> = sink.iter().map(|g| (g.control, g.target)).collect();
        assert_eq!(pairs, vec![(4, 5), (5, 4), (4, 5)]);
    }

    #[test]
    fn test_swap_into_circuit() {
        use chainshift_ir::{Circuit, QubitId};

        let mut circuit = Circuit::with_size("swap", 2);
        swap(&mut circuit, &QubitId(1), &QubitId(0)).unwrap();
        assert_eq!(circuit.dag().count_ops("cx"), 3);
        assert_eq!(circuit.depth(), 3);

        assert!(swap(&mut circuit, &QubitId(1), &QubitId(2)).is_err());
        assert_eq!(circuit.num_ops(), 3);
    }
}
