use std::fmt::Display;

use anyhow::Result;
use nalgebra::{Matrix2, Vector2};
use num_complex::Complex;
use rand::Rng;

use crate::Qbit;

const NORM_TOLERANCE: f64 = 1e-5;

pub struct QState {
    pub(crate) state: Vector2<Qbit>,
}

impl QState {
    pub fn new(alpha: Qbit, beta: Qbit) -> Result<Self> {
        let state = Vector2::new(alpha, beta);
        let norm = state.norm();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(anyhow::anyhow!(
                "State vector must be normalized, got norm {}",
                norm
            ));
        }
        Ok(Self { state })
    }

    pub fn zero() -> Self {
        Self {
            state: Vector2::new(Complex::new(1.0, 0.0), Complex::ZERO),
        }
    }

    pub fn one() -> Self {
        Self {
            state: Vector2::new(Complex::ZERO, Complex::new(1.0, 0.0)),
        }
    }

    pub fn evolve(&self, unitary: &Matrix2<Qbit>) -> QState {
        QState {
            state: unitary * self.state,
        }
    }

    pub fn amplitudes(&self) -> [Qbit; 2] {
        [self.state[0], self.state[1]]
    }

    pub fn probabilities(&self) -> [f64; 2] {
        [self.state[0].norm_sqr(), self.state[1].norm_sqr()]
    }

    /// Draws basis-state outcomes and returns the |0> and |1> counts.
    pub fn sample<R: Rng>(&self, rng: &mut R, shots: usize) -> [usize; 2] {
        let [p0, _] = self.probabilities();

        let mut counts = [0, 0];
        for _ in 0..shots {
            if rng.random::<f64>() < p0 {
                counts[0] += 1;
            } else {
                counts[1] += 1;
            }
        }
        counts
    }
}

impl Display for QState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.state.iter().enumerate() {
            writeln!(f, "|{}>: {}", i, value)?;
        }

        Ok(())
    }
}

impl From<QState> for Vector2<Qbit> {
    fn from(qstate: QState) -> Self {
        qstate.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Gate;
    use crate::{assert_approx_complex_eq, assert_approx_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_and_one_states() {
        let zero = QState::zero();
        assert_approx_complex_eq!(1.0, 0.0, zero.state[0]);
        assert_approx_complex_eq!(0.0, 0.0, zero.state[1]);

        let one = QState::one();
        assert_approx_complex_eq!(0.0, 0.0, one.state[0]);
        assert_approx_complex_eq!(1.0, 0.0, one.state[1]);
    }

    #[test]
    fn test_new_accepts_normalized_amplitudes() -> Result<()> {
        let qstate = QState::new(
            Complex::new(1.0 / 2f64.sqrt(), 0.0),
            Complex::new(0.0, 1.0 / 2f64.sqrt()),
        )?;

        let [p0, p1] = qstate.probabilities();
        assert_approx_eq!(0.5, p0);
        assert_approx_eq!(0.5, p1);

        Ok(())
    }

    #[test]
    fn test_new_rejects_unnormalized_amplitudes() {
        let result = QState::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_evolve_preserves_normalization() {
        for gate in [Gate::I, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::T, Gate::H] {
            let evolved = QState::zero()
                .evolve(&Gate::H.matrix())
                .evolve(&gate.matrix());

            let [p0, p1] = evolved.probabilities();
            assert_approx_eq!(1.0, p0 + p1);
        }
    }

    #[test]
    fn test_amplitudes_of_superposition() {
        let plus = QState::zero().evolve(&Gate::H.matrix());
        let [alpha, beta] = plus.amplitudes();

        assert_approx_complex_eq!(1.0 / 2f64.sqrt(), 0.0, alpha);
        assert_approx_complex_eq!(1.0 / 2f64.sqrt(), 0.0, beta);
    }

    #[test]
    fn test_into_underlying_vector() {
        let vector: Vector2<Qbit> = QState::one().into();
        assert_approx_complex_eq!(0.0, 0.0, vector[0]);
        assert_approx_complex_eq!(1.0, 0.0, vector[1]);
    }

    #[test]
    fn test_sample_basis_state_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);

        let counts = QState::zero().sample(&mut rng, 100);
        assert_eq!([100, 0], counts);

        let counts = QState::one().sample(&mut rng, 100);
        assert_eq!([0, 100], counts);
    }

    #[test]
    fn test_sample_superposition_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let plus = QState::zero().evolve(&Gate::H.matrix());

        let counts = plus.sample(&mut rng, 1000);
        assert_eq!(1000, counts[0] + counts[1]);
        assert!(counts[0] > 400 && counts[0] < 600);
        assert!(counts[1] > 400 && counts[1] < 600);
    }
}
