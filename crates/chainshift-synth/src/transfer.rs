//! Transfer patterns: move the value at the start of a path to its end.
//!
//! n below is the connection count, `path.len() - 1`.

use tracing::{debug, instrument, warn};

use crate::error::{SynthError, SynthResult};
use crate::sequence::CxSequence;
use crate::sink::CxSink;
use crate::walk::push_walk;

pub(crate) fn build_z_transfer<Q: Clone>(
    seq: &mut CxSequence<Q>,
    path: &[Q],
    up: bool,
) -> SynthResult<()> {
    if up {
        return Err(SynthError::InvalidPattern {
            pattern: "z-transfer",
            reason: "there is no upward Z-Transfer",
        });
    }
    push_walk(seq, path, false);
    push_walk(seq, path, true);
    Ok(())
}

pub(crate) fn build_g_transfer<Q: Clone>(seq: &mut CxSequence<Q>, path: &[Q], up: bool) {
    push_walk(seq, path, up);
    push_walk(seq, path, !up);
    push_walk(seq, path, up);
}

/// Emit a Z-Transfer along `path`.
///
/// Moves the value of `path[0]` to the end of the path across zeroed
/// qubits: with every other position at zero, the value ends in the last
/// qubit and the rest of the path is zero again. 2n CNOTs, depth n + 2.
///
/// # Errors
///
/// [`SynthError::InvalidPattern`] when `up` is true; nothing is emitted.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn z_transfer<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let seq = CxSequence::build(|seq| build_z_transfer(seq, path, up)).inspect_err(|e| {
        warn!("z-transfer rejected: {e}");
    })?;
    seq.emit(sink)?;
    debug!(gates = seq.len(), "z-transfer emitted");
    Ok(())
}

/// Emit a G-Transfer along `path`.
///
/// Moves the value of `path[0]` into a zeroed last qubit regardless of the
/// garbage held by the qubits in between. Three full walks: `up`, `!up`,
/// `up`. 3n CNOTs, depth n + 4.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn g_transfer<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let mut seq = CxSequence::with_capacity(3 * path.len().saturating_sub(1));
    build_g_transfer(&mut seq, path, up);
    seq.emit(sink)?;
    debug!(gates = seq.len(), "g-transfer emitted");
    Ok(())
}
