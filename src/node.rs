use crate::circuit::Circuit;
use crate::qstate::QState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    State,
    Probabilities,
}

pub enum MeasurementResult {
    State(QState),
    Probabilities([f64; 2]),
}

impl MeasurementResult {
    pub fn state(&self) -> Option<&QState> {
        match self {
            MeasurementResult::State(state) => Some(state),
            MeasurementResult::Probabilities(_) => None,
        }
    }

    pub fn probabilities(&self) -> Option<[f64; 2]> {
        match self {
            MeasurementResult::State(_) => None,
            MeasurementResult::Probabilities(probs) => Some(*probs),
        }
    }
}

/// A circuit bound to the measurement it returns when run.
pub struct Node {
    circuit: Circuit,
    measurement: Measurement,
}

impl Node {
    pub fn new(circuit: Circuit, measurement: Measurement) -> Self {
        Self {
            circuit,
            measurement,
        }
    }

    /// Composes the gate list into a single unitary at construction time.
    pub fn compiled(circuit: Circuit, measurement: Measurement) -> Self {
        Self {
            circuit: circuit.compiled(),
            measurement,
        }
    }

    pub fn run(&self) -> MeasurementResult {
        let state = self.circuit.apply(&QState::zero());
        match self.measurement {
            Measurement::State => MeasurementResult::State(state),
            Measurement::Probabilities => MeasurementResult::Probabilities(state.probabilities()),
        }
    }
}
