//! Chainshift circuit representation
//!
//! This crate provides the circuit that synthesized CNOT chains are written
//! into. Circuits are stored as a DAG, which gives the depth of a pattern
//! directly from its dependency structure.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] handles and [`Qubit`] register membership
//! - **Gates**: [`StandardGate`] (`X`, `CX`, `Swap`)
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **DAG**: [`CircuitDag`] for the internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example
//!
//! ```rust
//! use chainshift_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("chain");
//! let chain = circuit.add_qreg("q", 3);
//!
//! circuit.cx(chain[0], chain[1]).unwrap();
//! circuit.cx(chain[1], chain[2]).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 2);
//! assert_eq!(circuit.depth(), 2);
//! assert!(circuit.contains_qubit(QubitId(2)));
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use qubit::{Qubit, QubitId};
