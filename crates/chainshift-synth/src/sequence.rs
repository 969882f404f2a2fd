//! Planned CNOT sequences.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use chainshift_ir::IrResult;

use crate::error::SynthResult;
use crate::sink::{CxGate, CxSink};

/// An ordered, fully planned list of CNOTs.
///
/// Every generator builds its whole pattern into a `CxSequence` before
/// anything reaches the caller's sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CxSequence<Q> {
    gates: Vec<CxGate<Q>>,
}

impl<Q> CxSequence<Q> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { gates: vec![] }
    }

    /// Create an empty sequence with room for `capacity` gates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            gates: Vec::with_capacity(capacity),
        }
    }

    /// Run `build` against a fresh sequence and return it if it succeeds.
    pub(crate) fn build(
        build: impl FnOnce(&mut Self) -> SynthResult<()>,
    ) -> SynthResult<Self> {
        let mut seq = Self::new();
        build(&mut seq)?;
        Ok(seq)
    }

    /// Append a CNOT.
    pub fn push(&mut self, control: Q, target: Q) {
        self.gates.push(CxGate::new(control, target));
    }

    /// The planned gates.
    pub fn gates(&self) -> &[CxGate<Q>] {
        &self.gates
    }

    /// Number of CNOTs.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Iterate over the gates.
    pub fn iter(&self) -> std::slice::Iter<'_, CxGate<Q>> {
        self.gates.iter()
    }

    /// Consume the sequence and return its gates.
    pub fn into_gates(self) -> Vec<CxGate<Q>> {
        self.gates
    }
}

impl<Q: Clone> CxSequence<Q> {
    /// `(control, target)` pairs in emission order.
    pub fn pairs(&self) -> Vec<(Q, Q)> {
        self.gates.iter().cloned().map(CxGate::into_pair).collect()
    }

    /// Hand the whole sequence to a sink in one batch.
    pub fn emit<S>(&self, sink: &mut S) -> IrResult<()>
    where
        S: CxSink<Q> + ?Sized,
    {
        sink.apply_all(&self.gates)
    }
}

impl<Q: Eq + Hash> CxSequence<Q> {
    /// Depth under as-soon-as-possible layering: each CNOT is placed one
    /// layer after the latest gate on either of its qubits.
    pub fn depth(&self) -> usize {
        let mut layer: FxHashMap<&Q, usize> = FxHashMap::default();
        let mut depth = 0;
        for gate in &self.gates {
            let l = layer
                .get(&gate.control)
                .copied()
                .unwrap_or(0)
                .max(layer.get(&gate.target).copied().unwrap_or(0))
                + 1;
            layer.insert(&gate.control, l);
            layer.insert(&gate.target, l);
            depth = depth.max(l);
        }
        depth
    }
}

impl<Q> Default for CxSequence<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Clone> CxSink<Q> for CxSequence<Q> {
    fn apply_cx(&mut self, control: Q, target: Q) -> IrResult<()> {
        self.push(control, target);
        Ok(())
    }
}

impl<Q> FromIterator<CxGate<Q>> for CxSequence<Q> {
    fn from_iter<I: IntoIterator<Item = CxGate<Q>>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl<Q> IntoIterator for CxSequence<Q> {
    type Item = CxGate<Q>;
    type IntoIter = std::vec::IntoIter<CxGate<Q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a, Q> IntoIterator for &'a CxSequence<Q> {
    type Item = &'a CxGate<Q>;
    type IntoIter = std::slice::Iter<'a, CxGate<Q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let seq: CxSequence<u32> = CxSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.depth(), 0);
    }

    #[test]
    fn test_depth_of_chain_and_parallel_pairs() {
        let chain: CxSequence<u32> = [(0, 1), (1, 2), (2, 3)]
            .into_iter()
            .map(|(c, t)| CxGate::new(c, t))
            .collect();
        assert_eq!(chain.depth(), 3);

        let parallel: CxSequence<u32> = [(0, 1), (3, 2), (1, 2)]
            .into_iter()
            .map(|(c, t)| CxGate::new(c, t))
            .collect();
        assert_eq!(parallel.depth(), 2);
    }

    #[test]
    fn test_emit_into_vec() {
        let mut seq = CxSequence::new();
        seq.push(1u32, 0);
        seq.push(2, 1);

        let mut sink: Vec<CxGate<u32>> = vec![];
        seq.emit(&mut sink).unwrap();
        assert_eq!(sink, seq.into_gates());
    }

    #[test]
    fn test_serializes_as_gate_list() {
        let mut seq = CxSequence::new();
        seq.push(0u32, 1);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"[{"control":0,"target":1}]"#);
    }
}
