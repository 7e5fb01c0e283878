use nalgebra::Matrix2;

use crate::gates::{i_matrix, x_matrix, y_matrix, z_matrix};
use crate::qstate::QState;
use crate::Qbit;

#[derive(Clone, Copy, Debug)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    fn matrix(&self) -> Matrix2<Qbit> {
        match self {
            Pauli::I => i_matrix(),
            Pauli::X => x_matrix(),
            Pauli::Y => y_matrix(),
            Pauli::Z => z_matrix(),
        }
    }
}

pub struct Observable {
    terms: Vec<(f64, Pauli)>,
}

impl Observable {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn add_term(&mut self, coefficient: f64, pauli: Pauli) {
        self.terms.push((coefficient, pauli));
    }

    pub fn expectation_value(&self, qstate: &QState) -> f64 {
        let mut expectation = 0.0;

        for (coefficient, pauli) in &self.terms {
            let bra = qstate.state.adjoint();
            let value = (bra * pauli.matrix() * qstate.state)[0].re;
            expectation += coefficient * value;
        }

        expectation
    }
}

impl Default for Observable {
    fn default() -> Self {
        Self::new()
    }
}
