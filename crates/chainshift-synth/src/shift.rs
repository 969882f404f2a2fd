//! Swap-based circular shift.

use tracing::{debug, instrument};

use crate::error::SynthResult;
use crate::sequence::CxSequence;
use crate::sink::CxSink;
use crate::walk::push_swap;

pub(crate) fn build_s_shift<Q: Clone>(seq: &mut CxSequence<Q>, path: &[Q], up: bool) {
    for pair in path.windows(2) {
        let (a, b) = if up {
            (&pair[1], &pair[0])
        } else {
            (&pair[0], &pair[1])
        };
        push_swap(seq, a, b);
    }
}

/// Emit an S-Shift along `path`: a chain of 3-CNOT swaps over each
/// neighbouring pair, in path order.
///
/// `up` selects which neighbour leads each swap, the same way it selects the
/// control of a walk. 3n CNOTs, depth 3n.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn s_shift<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let mut seq = CxSequence::with_capacity(3 * path.len().saturating_sub(1));
    build_s_shift(&mut seq, path, up);
    seq.emit(sink)?;
    debug!(gates = seq.len(), "s-shift emitted");
    Ok(())
}
