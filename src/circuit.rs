use std::fmt::Display;

use anyhow::Result;
use nalgebra::Matrix2;

use crate::device::Device;
use crate::gates::Gate;
use crate::qstate::QState;
use crate::Qbit;

pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(device: &Device) -> Result<Self> {
        if device.wires() != 1 {
            return Err(anyhow::anyhow!(
                "Circuit acts on a single qubit, but the device has {} wires",
                device.wires()
            ));
        }

        Ok(Self { gates: Vec::new() })
    }

    pub fn with_gates(device: &Device, gates: Vec<Gate>) -> Result<Self> {
        let mut circuit = Self::new(device)?;
        circuit.gates = gates;
        Ok(circuit)
    }

    /// Applies one X gate per '1' digit of the decimal representation.
    /// Any other digit applies no gate.
    pub fn from_bitstring(device: &Device, bitstring: u64) -> Result<Self> {
        let mut circuit = Self::new(device)?;
        for digit in bitstring.to_string().chars() {
            if digit == '1' {
                circuit.push(Gate::X);
            }
        }
        Ok(circuit)
    }

    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn gate(mut self, gate: Gate) -> Self {
        self.push(gate);
        self
    }

    #[allow(non_snake_case)]
    pub fn H(self) -> Self {
        self.gate(Gate::H)
    }

    #[allow(non_snake_case)]
    pub fn X(self) -> Self {
        self.gate(Gate::X)
    }

    #[allow(non_snake_case)]
    pub fn Y(self) -> Self {
        self.gate(Gate::Y)
    }

    #[allow(non_snake_case)]
    pub fn Z(self) -> Self {
        self.gate(Gate::Z)
    }

    #[allow(non_snake_case)]
    pub fn S(self) -> Self {
        self.gate(Gate::S)
    }

    #[allow(non_snake_case)]
    pub fn T(self) -> Self {
        self.gate(Gate::T)
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn apply(&self, state: &QState) -> QState {
        let mut result = state.state;
        for gate in &self.gates {
            result = gate.matrix() * result;
        }
        QState { state: result }
    }

    /// Composes the gate list into one unitary.
    /// Gates apply left-to-right in time, so U = gn * ... * g2 * g1.
    pub fn compile(&self) -> Matrix2<Qbit> {
        let mut unitary = Matrix2::identity();
        for gate in &self.gates {
            unitary = gate.matrix() * unitary;
        }
        unitary
    }

    /// Replaces the gate list with its single compiled unitary.
    pub fn compiled(self) -> Circuit {
        let unitary = self.compile();
        Circuit {
            gates: vec![Gate::Unitary(unitary)],
        }
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .gates
            .iter()
            .map(|gate| gate.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}
