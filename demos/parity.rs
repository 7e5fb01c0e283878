use anyhow::Result;
use single_qubit_sim::{Circuit, Device, Measurement, MeasurementResult, Node};

fn main() -> Result<()> {
    let device = Device::single_qubit();

    for bitstring in [1010_u64, 1101, 111000111] {
        let circuit = Circuit::from_bitstring(&device, bitstring)?;
        let node = Node::new(circuit, Measurement::State);

        if let MeasurementResult::State(state) = node.run() {
            println!("bitstring {}:\n{}", bitstring, state);
        }
    }

    Ok(())
}
