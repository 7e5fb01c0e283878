use anyhow::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceKind {
    #[default]
    StateVector,
}

/// Backend configuration passed explicitly to circuit construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Device {
    kind: DeviceKind,
    wires: usize,
}

impl Device {
    pub fn new(kind: DeviceKind, wires: usize) -> Result<Self> {
        if wires == 0 {
            return Err(anyhow::anyhow!("Device must have at least one wire"));
        }
        Ok(Self { kind, wires })
    }

    pub fn single_qubit() -> Self {
        Self {
            kind: DeviceKind::StateVector,
            wires: 1,
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn wires(&self) -> usize {
        self.wires
    }
}
