use anyhow::Result;
use single_qubit_sim::{Circuit, Device, Gate, Measurement, Node, QState};

fn main() -> Result<()> {
    let device = Device::single_qubit();

    let circuit = Circuit::with_gates(&device, vec![Gate::H])?;
    println!("Circuit: {}", circuit);

    let node = Node::new(circuit, Measurement::Probabilities);
    if let Some([p0, p1]) = node.run().probabilities() {
        println!("P(|0>) = {}", p0);
        println!("P(|1>) = {}", p1);
    }

    let plus = Circuit::with_gates(&device, vec![Gate::H])?.apply(&QState::zero());
    let mut rng = rand::rng();
    let counts = plus.sample(&mut rng, 1000);
    println!("1000 shots: {} times |0>, {} times |1>", counts[0], counts[1]);

    Ok(())
}
