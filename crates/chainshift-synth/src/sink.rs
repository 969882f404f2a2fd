//! Destinations for synthesized CNOTs.

use serde::{Deserialize, Serialize};
use std::fmt;

use chainshift_ir::{Circuit, Instruction, IrResult, QubitId, StandardGate};

/// A single CNOT: `target ^= control` on basis states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CxGate<Q> {
    /// Control handle.
    pub control: Q,
    /// Target handle.
    pub target: Q,
}

impl<Q> CxGate<Q> {
    /// Create a CNOT from control to target.
    pub fn new(control: Q, target: Q) -> Self {
        Self { control, target }
    }

    /// The `(control, target)` pair.
    pub fn into_pair(self) -> (Q, Q) {
        (self.control, self.target)
    }
}

impl<Q: fmt::Display> fmt::Display for CxGate<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cx {}, {}", self.control, self.target)
    }
}

/// Anything that can receive CNOTs.
///
/// `apply_cx` is the only required primitive. Generators always hand over a
/// fully planned batch through [`CxSink::apply_all`]; sinks that can fail
/// part-way should override it to validate the batch first so a rejected
/// batch leaves them untouched.
pub trait CxSink<Q: Clone> {
    /// Append one CNOT.
    fn apply_cx(&mut self, control: Q, target: Q) -> IrResult<()>;

    /// Append a batch of CNOTs in order.
    fn apply_all(&mut self, gates: &[CxGate<Q>]) -> IrResult<()> {
        for gate in gates {
            self.apply_cx(gate.control.clone(), gate.target.clone())?;
        }
        Ok(())
    }
}

impl<Q: Clone> CxSink<Q> for Vec<CxGate<Q>> {
    fn apply_cx(&mut self, control: Q, target: Q) -> IrResult<()> {
        self.push(CxGate::new(control, target));
        Ok(())
    }

    fn apply_all(&mut self, gates: &[CxGate<Q>]) -> IrResult<()> {
        self.extend_from_slice(gates);
        Ok(())
    }
}

impl CxSink<QubitId> for Circuit {
    fn apply_cx(&mut self, control: QubitId, target: QubitId) -> IrResult<()> {
        self.cx(control, target)?;
        Ok(())
    }

    fn apply_all(&mut self, gates: &[CxGate<QubitId>]) -> IrResult<()> {
        let batch: Vec<_> = gates
            .iter()
            .map(|g| Instruction::two_qubit_gate(StandardGate::CX, g.control, g.target))
            .collect();
        self.check_all(&batch)?;

        for gate in gates {
            self.cx(gate.control, gate.target)?;
        }
        Ok(())
    }
}
