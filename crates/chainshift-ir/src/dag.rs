//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DagNode {
    /// Input node for a qubit wire.
    In(QubitId),
    /// Output node for a qubit wire.
    Out(QubitId),
    /// Operation node containing an instruction.
    Op(Instruction),
}

impl DagNode {
    /// Check if this is an operation node.
    #[inline]
    pub fn is_op(&self) -> bool {
        matches!(self, DagNode::Op(_))
    }

    /// Get the instruction if this is an operation node.
    #[inline]
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            DagNode::Op(inst) => Some(inst),
            _ => None,
        }
    }
}

/// An edge in the circuit DAG representing a qubit wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagEdge {
    /// The qubit whose wire this edge is a segment of.
    pub qubit: QubitId,
}

/// DAG-based circuit representation.
///
/// - Every qubit has one input and one output node joined by its wire
/// - Operations are spliced into the wires of the qubits they touch
/// - Two operations are ordered only when they share a qubit
///
/// The DAG keeps a `wire_front` index mapping each qubit to the node just
/// before its output node, so appending an operation is O(1) per qubit.
#[derive(Debug, Clone)]
pub struct CircuitDag {
    graph: DiGraph<DagNode, DagEdge, u32>,
    qubit_inputs: FxHashMap<QubitId, NodeIndex>,
    qubit_outputs: FxHashMap<QubitId, NodeIndex>,
    wire_front: FxHashMap<QubitId, NodeIndex>,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::default(),
            qubit_inputs: FxHashMap::default(),
            qubit_outputs: FxHashMap::default(),
            wire_front: FxHashMap::default(),
        }
    }

    /// Add a qubit to the circuit. Adding a known qubit is a no-op.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.qubit_inputs.contains_key(&qubit) {
            return;
        }
        let in_node = self.graph.add_node(DagNode::In(qubit));
        let out_node = self.graph.add_node(DagNode::Out(qubit));
        self.graph.add_edge(in_node, out_node, DagEdge { qubit });
        self.qubit_inputs.insert(qubit, in_node);
        self.qubit_outputs.insert(qubit, out_node);
        self.wire_front.insert(qubit, in_node);
    }

    /// Check whether a qubit has a wire in this DAG.
    #[inline]
    pub fn contains_qubit(&self, qubit: QubitId) -> bool {
        self.qubit_inputs.contains_key(&qubit)
    }

    /// Validate an instruction against this DAG without applying it.
    ///
    /// Checks gate arity, that every operand exists and that no operand is
    /// repeated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn check(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = Some(instruction.name().to_string());

        let expected = instruction.gate.num_qubits() as usize;
        let got = instruction.qubits.len();
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: instruction.name().to_string(),
                expected: expected as u32,
                got: got as u32,
            });
        }

        for &qubit in &instruction.qubits {
            if !self.contains_qubit(qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Apply an instruction to the end of the circuit.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<NodeIndex> {
        self.check(&instruction)?;

        let qubits = instruction.qubits.clone();
        let op_node = self.graph.add_node(DagNode::Op(instruction));

        for qubit in qubits {
            let out_node = self.qubit_outputs[&qubit];
            let prev_node = self.wire_front[&qubit];

            let eid = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().qubit == qubit && e.target() == out_node)
                .map(|e| e.id())
                .ok_or_else(|| {
                    IrError::InvalidDag(format!(
                        "Missing edge from predecessor to output for qubit wire {qubit}"
                    ))
                })?;
            self.graph.remove_edge(eid);
            self.graph.add_edge(prev_node, op_node, DagEdge { qubit });
            self.graph.add_edge(op_node, out_node, DagEdge { qubit });
            self.wire_front.insert(qubit, op_node);
        }

        Ok(op_node)
    }

    /// Iterate over operations in topological order.
    pub fn topological_ops(&self) -> impl Iterator<Item = (NodeIndex, &Instruction)> {
        petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic: cycle detected in circuit graph")
            .into_iter()
            .filter_map(|idx| self.graph[idx].instruction().map(|inst| (idx, inst)))
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubit_inputs.len()
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.graph.node_weights().filter(|n| n.is_op()).count()
    }

    /// Count operations with the given gate name.
    pub fn count_ops(&self, name: &str) -> usize {
        self.graph
            .node_weights()
            .filter_map(DagNode::instruction)
            .filter(|inst| inst.name() == name)
            .count()
    }

    /// Get the circuit depth: the number of operations on the longest
    /// dependency chain.
    pub fn depth(&self) -> usize {
        let mut depths: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(self.graph.node_count(), Default::default());
        let mut max_depth = 0usize;

        for node in petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic: cycle detected in circuit graph")
        {
            let max_pred_depth = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);

            let node_depth = if self.graph[node].is_op() {
                max_pred_depth + 1
            } else {
                max_pred_depth
            };

            max_depth = max_depth.max(node_depth);
            depths.insert(node, node_depth);
        }

        max_depth
    }
}

impl Default for CircuitDag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::StandardGate;

    fn chain_dag(n: u32) -> CircuitDag {
        let mut dag = CircuitDag::new();
        for i in 0..n {
            dag.add_qubit(QubitId(i));
        }
        dag
    }

    #[test]
    fn test_empty_dag() {
        let dag = CircuitDag::new();
        assert_eq!(dag.num_qubits(), 0);
        assert_eq!(dag.num_ops(), 0);
        assert_eq!(dag.depth(), 0);
    }

    #[test]
    fn test_add_qubit_is_idempotent() {
        let mut dag = chain_dag(2);
        dag.add_qubit(QubitId(1));
        assert_eq!(dag.num_qubits(), 2);
        assert!(dag.contains_qubit(QubitId(0)));
        assert!(!dag.contains_qubit(QubitId(2)));
    }

    #[test]
    fn test_cx_chain_depth() {
        let mut dag = chain_dag(4);
        for i in 0..3 {
            dag.apply(Instruction::two_qubit_gate(
                StandardGate::CX,
                QubitId(i),
                QubitId(i + 1),
            ))
            .unwrap();
        }
        assert_eq!(dag.num_ops(), 3);
        assert_eq!(dag.depth(), 3);
        assert_eq!(dag.count_ops("cx"), 3);
    }

    #[test]
    fn test_disjoint_pairs_share_a_layer() {
        let mut dag = chain_dag(4);
        dag.apply(Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1)))
            .unwrap();
        dag.apply(Instruction::two_qubit_gate(StandardGate::CX, QubitId(3), QubitId(2)))
            .unwrap();
        assert_eq!(dag.depth(), 1);
    }

    #[test]
    fn test_gate_arity_mismatch() {
        let mut dag = chain_dag(2);
        let result = dag.apply(Instruction::gate(StandardGate::CX, [QubitId(0)]));

        match result {
            Err(IrError::QubitCountMismatch {
                gate_name,
                expected,
                got,
            }) => {
                assert_eq!(gate_name, "cx");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            _ => panic!("Expected QubitCountMismatch error"),
        }
    }

    #[test]
    fn test_qubit_not_found_with_context() {
        let mut dag = chain_dag(1);
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(99));

        match dag.apply(inst) {
            Err(IrError::QubitNotFound { qubit, gate_name }) => {
                assert_eq!(qubit, QubitId(99));
                assert_eq!(gate_name, Some("cx".to_string()));
            }
            _ => panic!("Expected QubitNotFound error"),
        }
        assert_eq!(dag.num_ops(), 0);
    }

    #[test]
    fn test_duplicate_operand_rejected() {
        let mut dag = chain_dag(2);
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(1), QubitId(1));
        assert!(matches!(
            dag.apply(inst),
            Err(IrError::DuplicateQubit { qubit: QubitId(1), .. })
        ));
    }
}
