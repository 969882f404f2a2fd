//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// A gate applied to concrete qubits.
///
/// For controlled gates the control comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: StandardGate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Control and target of a CNOT, `None` for any other gate.
    pub fn cx_operands(&self) -> Option<(QubitId, QubitId)> {
        match (self.gate, self.qubits.as_slice()) {
            (StandardGate::CX, &[control, target]) => Some((control, target)),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate)?;
        for (i, q) in self.qubits.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{q}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cx_instruction() {
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1));
        assert_eq!(inst.name(), "cx");
        assert_eq!(inst.cx_operands(), Some((QubitId(0), QubitId(1))));
        assert_eq!(inst.to_string(), "cx q0, q1");
    }

    #[test]
    fn test_non_cx_has_no_operands() {
        let inst = Instruction::single_qubit_gate(StandardGate::X, QubitId(3));
        assert_eq!(inst.cx_operands(), None);
        assert_eq!(inst.to_string(), "x q3");
    }
}
