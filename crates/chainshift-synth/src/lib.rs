//! Chainshift: nearest-neighbour CNOT synthesis
//!
//! This crate generates CNOT sequences that implement circular shifts and
//! value transfers along a linear chain of qubits. Given a path of qubit
//! handles, every generator emits only CNOTs between neighbouring path
//! positions, so the output runs unchanged on linear-nearest-neighbour
//! hardware.
//!
//! # Patterns
//!
//! n is the number of connections in the path (`path.len() - 1`).
//!
//! | Pattern | Effect | CNOTs | Depth |
//! |---------|--------|-------|-------|
//! | [`walk`] | one CNOT per neighbouring pair | n | n |
//! | [`z_transfer`] | move `path[0]` to the end across zeroed qubits | 2n | n + 2 |
//! | [`g_transfer`] | move `path[0]` to the end across xor garbage | 3n | n + 4 |
//! | [`s_shift`] | circular shift from swaps | 3n | 3n |
//! | [`t_reduced`] | circular shift split at a transition qubit | 4n - 2 | n + 6 |
//! | [`c_reduced`] | T-Reduced split at the last qubit | 4n - 1 | 2n + 3 |
//! | [`s_reduced`] | T-Reduced split at the first qubit | 4n - 1 | 2n + 3 |
//!
//! Every circular shift moves the value held by `path[k]` to `path[k - 1]`
//! and the value of `path[0]` to the end of the path. The `up` flag selects
//! between the two mirrored gate variants of each pattern.
//!
//! # Sinks
//!
//! Generators write into any [`CxSink`]. A pattern is always planned in
//! full before the sink sees it, and invalid arguments are rejected before
//! planning starts, so a failed call never leaves half a pattern behind.
//! Sinks are provided for [`chainshift_ir::Circuit`], [`CxSequence`] and
//! `Vec<CxGate<Q>>`.
//!
//! # Example
//!
//! ```rust
//! use chainshift_ir::Circuit;
//! use chainshift_synth::t_reduced;
//!
//! let mut circuit = Circuit::new("shift");
//! let chain = circuit.add_qreg("q", 6);
//!
//! t_reduced(&mut circuit, &chain, false, None).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 4 * 5 - 2);
//! assert_eq!(circuit.depth(), 5 + 6);
//! ```
//!
//! Patterns can also be planned without a sink and checked classically:
//!
//! ```rust
//! use chainshift_synth::{Pattern, verify};
//!
//! let path = [10u32, 11, 12, 13];
//! let seq = Pattern::CReduced.synthesize(&path, true).unwrap();
//!
//! verify::check_adjacency(&path, seq.gates()).unwrap();
//! assert!(verify::is_cyclic_shift(&path, seq.gates()));
//! ```

pub mod error;
pub mod pattern;
pub mod reduced;
pub mod sequence;
pub mod shift;
pub mod sink;
pub mod transfer;
pub mod verify;
pub mod walk;

pub use error::{SynthError, SynthResult};
pub use pattern::{Pattern, PatternSpec};
pub use reduced::{c_reduced, default_transition, s_reduced, t_reduced, t_reduced_gate_count};
pub use sequence::CxSequence;
pub use shift::s_shift;
pub use sink::{CxGate, CxSink};
pub use transfer::{g_transfer, z_transfer};
pub use walk::{swap, walk};
