use std::fmt::Display;

use nalgebra::Matrix2;
use num_complex::Complex;

use crate::Qbit;

pub fn i_matrix() -> Matrix2<Qbit> {
    Matrix2::identity()
}

pub fn x_matrix() -> Matrix2<Qbit> {
    let one = Complex::new(1.0, 0.0);
    Matrix2::from_row_slice(&[Complex::ZERO, one, one, Complex::ZERO])
}

pub fn y_matrix() -> Matrix2<Qbit> {
    let i = Complex::new(0.0, 1.0);
    Matrix2::from_row_slice(&[Complex::ZERO, -i, i, Complex::ZERO])
}

pub fn z_matrix() -> Matrix2<Qbit> {
    let one = Complex::new(1.0, 0.0);
    Matrix2::from_row_slice(&[one, Complex::ZERO, Complex::ZERO, -one])
}

pub fn s_matrix() -> Matrix2<Qbit> {
    Matrix2::from_row_slice(&[
        Complex::new(1.0, 0.0),
        Complex::ZERO,
        Complex::ZERO,
        Complex::new(0.0, 1.0),
    ])
}

pub fn t_matrix() -> Matrix2<Qbit> {
    Matrix2::from_row_slice(&[
        Complex::new(1.0, 0.0),
        Complex::ZERO,
        Complex::ZERO,
        Complex::from_polar(1.0, std::f64::consts::FRAC_PI_4),
    ])
}

pub fn h_matrix() -> Matrix2<Qbit> {
    let root2 = 2.0_f64.sqrt();
    let one = Complex::new(1.0, 0.0);
    Matrix2::from_row_slice(&[one / root2, one / root2, one / root2, -one / root2])
}

#[derive(Clone, Debug)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    S,
    T,
    H,
    Unitary(Matrix2<Qbit>),
}

impl Gate {
    pub fn matrix(&self) -> Matrix2<Qbit> {
        match self {
            Gate::I => i_matrix(),
            Gate::X => x_matrix(),
            Gate::Y => y_matrix(),
            Gate::Z => z_matrix(),
            Gate::S => s_matrix(),
            Gate::T => t_matrix(),
            Gate::H => h_matrix(),
            Gate::Unitary(matrix) => *matrix,
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Gate::I => "I",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::T => "T",
            Gate::H => "H",
            Gate::Unitary(_) => "U",
        };
        write!(f, "{}", label)
    }
}
