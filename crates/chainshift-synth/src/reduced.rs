//! The reduced circular-shift family.
//!
//! T-Reduced splits the path at a transition qubit `t`. The lower part
//! `path[..=t]` runs a C-Reduced style transfer, the upper part `path[t..]`
//! an S-Reduced style one, and both are fused around two full-path walks:
//!
//! ```text
//! setup       walk(rev(path[t+1..]),  up)
//! C-Reduced   walk(path[..=t],        up)
//! integrated  walk(path,             !up)
//!             walk(path,              up)
//! S-Reduced   walk(path[t..],        !up)
//! cleanup     walk(rev(path[..t]),   !up)
//! ```
//!
//! Pinning `t` to the last qubit gives C-Reduced, pinning it to the first
//! (with the direction flipped) gives S-Reduced.

use tracing::{debug, instrument, warn};

use crate::error::{SynthError, SynthResult};
use crate::sequence::CxSequence;
use crate::sink::CxSink;
use crate::walk::{push_reverse_walk, push_walk};

/// Default transition qubit for a path of `len` qubits: `floor((len - 1) / 2)`.
pub fn default_transition(len: usize) -> usize {
    len.saturating_sub(1) / 2
}

/// Exact CNOT count of T-Reduced over `n` connections split at `transition`.
///
/// `4n - 2` for an interior split, `4n - 1` when the split sits on either
/// end. Returns `None` when `transition > n`.
pub fn t_reduced_gate_count(n: usize, transition: usize) -> Option<usize> {
    match (n, transition) {
        (_, t) if t > n => None,
        (0, _) => Some(0),
        (n, t) if t == 0 || t == n => Some(4 * n - 1),
        (n, _) => Some(4 * n - 2),
    }
}

fn check_transition(len: usize, transition: usize) -> SynthResult<()> {
    if transition >= len {
        return Err(SynthError::InvalidParameter { transition, len });
    }
    Ok(())
}

pub(crate) fn build_t_reduced<Q: Clone>(
    seq: &mut CxSequence<Q>,
    path: &[Q],
    up: bool,
    transition: Option<usize>,
) -> SynthResult<()> {
    if let Some(t) = transition {
        check_transition(path.len(), t)?;
    }
    if path.is_empty() {
        return Ok(());
    }
    let t = transition.unwrap_or_else(|| default_transition(path.len()));

    push_reverse_walk(seq, &path[t + 1..], up);
    push_walk(seq, &path[..=t], up);
    push_walk(seq, path, !up);
    push_walk(seq, path, up);
    push_walk(seq, &path[t..], !up);
    push_reverse_walk(seq, &path[..t], !up);
    Ok(())
}

pub(crate) fn build_c_reduced<Q: Clone>(
    seq: &mut CxSequence<Q>,
    path: &[Q],
    up: bool,
) -> SynthResult<()> {
    build_t_reduced(seq, path, up, path.len().checked_sub(1))
}

pub(crate) fn build_s_reduced<Q: Clone>(
    seq: &mut CxSequence<Q>,
    path: &[Q],
    up: bool,
) -> SynthResult<()> {
    let transition = if path.is_empty() { None } else { Some(0) };
    build_t_reduced(seq, path, !up, transition)
}

/// Emit a T-Reduced circular shift along `path`.
///
/// `transition` defaults to [`default_transition`]. With the default split
/// and n > 2 the pattern has 4n - 2 CNOTs and depth n + 6.
///
/// # Errors
///
/// [`SynthError::InvalidParameter`] if `transition` is not an index into
/// `path`. The check runs before anything is emitted.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn t_reduced<Q, S>(
    sink: &mut S,
    path: &[Q],
    up: bool,
    transition: Option<usize>,
) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let seq = CxSequence::build(|seq| build_t_reduced(seq, path, up, transition))
        .inspect_err(|e| warn!("t-reduced rejected: {e}"))?;
    seq.emit(sink)?;
    debug!(gates = seq.len(), "t-reduced emitted");
    Ok(())
}

/// Emit a C-Reduced circular shift: T-Reduced split at the last qubit.
///
/// 4n - 1 CNOTs and depth 2n + 3 for n > 1.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn c_reduced<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let seq = CxSequence::build(|seq| build_c_reduced(seq, path, up))?;
    seq.emit(sink)?;
    debug!(gates = seq.len(), "c-reduced emitted");
    Ok(())
}

/// Emit an S-Reduced circular shift: T-Reduced split at the first qubit,
/// run in the opposite direction to `up`.
///
/// 4n - 1 CNOTs and depth 2n + 3 for n > 1.
#[instrument(level = "debug", skip(sink, path), fields(len = path.len()))]
pub fn s_reduced<Q, S>(sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
where
    Q: Clone,
    S: CxSink<Q> + ?Sized,
{
    let seq = CxSequence::build(|seq| build_s_reduced(seq, path, up))?;
    seq.emit(sink)?;
    debug!(gates = seq.len(), "s-reduced emitted");
    Ok(())
}
