//! Pattern catalogue and serializable pattern specifications.
//!
//! [`Pattern`] names every generator in the crate so a pattern can be picked
//! at runtime, loaded from configuration, or costed before synthesis.
//!
//! ```
//! use chainshift_synth::{Pattern, PatternSpec};
//!
//! let spec = PatternSpec::from_json(
//!     r#"{ "pattern": { "kind": "t-reduced", "transition": 1 }, "up": true }"#,
//! )
//! .unwrap();
//! assert_eq!(spec.pattern, Pattern::TReduced { transition: Some(1) });
//!
//! let seq = spec.synthesize(&[0u32, 1, 2, 3]).unwrap();
//! assert_eq!(seq.len(), 10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::reduced::{
    build_c_reduced, build_s_reduced, build_t_reduced, default_transition, t_reduced_gate_count,
};
use crate::sequence::CxSequence;
use crate::shift::build_s_shift;
use crate::sink::CxSink;
use crate::transfer::{build_g_transfer, build_z_transfer};
use crate::walk::push_walk;

/// A nearest-neighbour CNOT pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Pattern {
    /// A single CNOT walk.
    Walk,
    /// Transfer across zeroed qubits.
    ZTransfer,
    /// Transfer across xor garbage.
    GTransfer,
    /// Circular shift built from swaps.
    SShift,
    /// Circular shift split at a transition qubit.
    TReduced {
        /// Split index; `None` picks the middle of the path.
        #[serde(default)]
        transition: Option<usize>,
    },
    /// T-Reduced split at the last qubit.
    CReduced,
    /// T-Reduced split at the first qubit.
    SReduced,
}

impl Pattern {
    /// Every pattern, with T-Reduced at its default split.
    pub const ALL: [Pattern; 7] = [
        Pattern::Walk,
        Pattern::ZTransfer,
        Pattern::GTransfer,
        Pattern::SShift,
        Pattern::TReduced { transition: None },
        Pattern::CReduced,
        Pattern::SReduced,
    ];

    /// Get the name of this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Walk => "walk",
            Pattern::ZTransfer => "z-transfer",
            Pattern::GTransfer => "g-transfer",
            Pattern::SShift => "s-shift",
            Pattern::TReduced { .. } => "t-reduced",
            Pattern::CReduced => "c-reduced",
            Pattern::SReduced => "s-reduced",
        }
    }

    /// Whether the pattern realizes a circular shift of the whole path.
    pub fn is_circular_shift(&self) -> bool {
        matches!(
            self,
            Pattern::SShift | Pattern::TReduced { .. } | Pattern::CReduced | Pattern::SReduced
        )
    }

    /// Plan the pattern over `path` without emitting it.
    pub fn synthesize<Q: Clone>(&self, path: &[Q], up: bool) -> SynthResult<CxSequence<Q>> {
        CxSequence::build(|seq| {
            match *self {
                Pattern::Walk => push_walk(seq, path, up),
                Pattern::ZTransfer => build_z_transfer(seq, path, up)?,
                Pattern::GTransfer => build_g_transfer(seq, path, up),
                Pattern::SShift => build_s_shift(seq, path, up),
                Pattern::TReduced { transition } => build_t_reduced(seq, path, up, transition)?,
                Pattern::CReduced => build_c_reduced(seq, path, up)?,
                Pattern::SReduced => build_s_reduced(seq, path, up)?,
            }
            Ok(())
        })
    }

    /// Plan the pattern over `path` and emit it into `sink` as one batch.
    pub fn apply<Q, S>(&self, sink: &mut S, path: &[Q], up: bool) -> SynthResult<()>
    where
        Q: Clone,
        S: CxSink<Q> + ?Sized,
    {
        let seq = self.synthesize(path, up)?;
        seq.emit(sink)?;
        debug!(pattern = self.name(), gates = seq.len(), "pattern emitted");
        Ok(())
    }

    /// CNOT count over a path with `n` connections.
    ///
    /// Exact for every `n`. `None` only for a T-Reduced split beyond the path.
    pub fn gate_count(&self, n: usize) -> Option<usize> {
        match *self {
            Pattern::Walk => Some(n),
            Pattern::ZTransfer => Some(2 * n),
            Pattern::GTransfer | Pattern::SShift => Some(3 * n),
            Pattern::TReduced { transition } => {
                t_reduced_gate_count(n, transition.unwrap_or_else(|| default_transition(n + 1)))
            }
            Pattern::CReduced => t_reduced_gate_count(n, n),
            Pattern::SReduced => t_reduced_gate_count(n, 0),
        }
    }

    /// Documented depth over a path with `n` connections.
    ///
    /// The figures are met exactly by [`CxSequence::depth`] for `n >= 2`.
    /// T-Reduced needs `n >= 4`; shorter paths come in under its figure.
    /// `None` for T-Reduced with a non-default split, which has no
    /// documented depth.
    pub fn documented_depth(&self, n: usize) -> Option<usize> {
        match *self {
            Pattern::Walk => Some(n),
            Pattern::ZTransfer => Some(n + 2),
            Pattern::GTransfer => Some(n + 4),
            Pattern::SShift => Some(3 * n),
            Pattern::TReduced { transition } => match transition {
                Some(t) if t != default_transition(n + 1) => None,
                _ => Some(n + 6),
            },
            Pattern::CReduced | Pattern::SReduced => Some(2 * n + 3),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::TReduced {
                transition: Some(t),
            } => write!(f, "{}@{t}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Pattern {
    type Err = SynthError;

    /// Parse a pattern name. Case and `-`/`_` are ignored; T-Reduced accepts
    /// an explicit split as `t-reduced@2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (name, split) = match normalized.split_once('@') {
            Some((name, split)) => (name, Some(split)),
            None => (normalized.as_str(), None),
        };

        let unknown = || SynthError::UnknownPattern(s.to_string());
        let pattern = match name {
            "walk" => Pattern::Walk,
            "z-transfer" => Pattern::ZTransfer,
            "g-transfer" => Pattern::GTransfer,
            "s-shift" => Pattern::SShift,
            "t-reduced" => {
                let transition = split
                    .map(|t| t.parse::<usize>().map_err(|_| unknown()))
                    .transpose()?;
                return Ok(Pattern::TReduced { transition });
            }
            "c-reduced" => Pattern::CReduced,
            "s-reduced" => Pattern::SReduced,
            _ => return Err(unknown()),
        };

        if split.is_some() {
            return Err(unknown());
        }
        Ok(pattern)
    }
}

/// A pattern together with its direction flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// The pattern to synthesize.
    pub pattern: Pattern,
    /// Direction flag.
    #[serde(default)]
    pub up: bool,
}

impl PatternSpec {
    /// Run `pattern` downward.
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern, up: false }
    }

    /// Set the direction flag.
    #[must_use]
    pub fn with_up(mut self, up: bool) -> Self {
        self.up = up;
        self
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> SynthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Plan the configured pattern over `path`.
    pub fn synthesize<Q: Clone>(&self, path: &[Q]) -> SynthResult<CxSequence<Q>> {
        self.pattern.synthesize(path, self.up)
    }

    /// Plan the configured pattern over `path` and emit it into `sink`.
    pub fn apply<Q, S>(&self, sink: &mut S, path: &[Q]) -> SynthResult<()>
    where
        Q: Clone,
        S: CxSink<Q> + ?Sized,
    {
        self.pattern.apply(sink, path, self.up)
    }
}

impl From<Pattern> for PatternSpec {
    fn from(pattern: Pattern) -> Self {
        Self::new(pattern)
    }
}
