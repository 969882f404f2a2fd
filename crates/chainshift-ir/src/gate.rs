//! Gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gates a chain circuit can hold.
///
/// Synthesized patterns only ever contain [`StandardGate::CX`]; `X` is used to
/// prepare basis states and `Swap` to express reference permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Controlled-X (CNOT) gate.
    CX,
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::CX => "cx",
            StandardGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X => 1,
            StandardGate::CX | StandardGate::Swap => 2,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_arity() {
        assert_eq!(StandardGate::X.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::Swap.num_qubits(), 2);
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::CX.to_string(), "cx");
        assert_eq!(StandardGate::Swap.name(), "swap");
    }
}
