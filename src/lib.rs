pub mod circuit;
pub mod device;
pub mod gates;
pub mod node;
pub mod observable;
pub mod qstate;
mod test_util;

use num_complex::Complex;

pub type Qbit = Complex<f64>;

pub use circuit::Circuit;
pub use device::{Device, DeviceKind};
pub use gates::Gate;
pub use node::{Measurement, MeasurementResult, Node};
pub use observable::{Observable, Pauli};
pub use qstate::QState;
