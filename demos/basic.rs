//! Basic usage of the quantum layers
//!
//! This example demonstrates the quantum dense layer and the quantum LSTM
//! cell on the CPU backend.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use qlayers::cells::QLSTMCell;
use qlayers::circuit::Rotation;
use qlayers::dense::QuantumDenseLayer;

fn main() {
    println!("=== qlayers Basic Example ===\n");

    // Use the NdArray backend (CPU)
    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: Quantum dense layer over 4 wires
    println!("Example 1: Quantum dense layer");
    let layer = QuantumDenseLayer::<Backend>::new(4, &device);

    println!("Created quantum dense layer:");
    println!("  Wires: 4");
    println!("  Weight shape: [1, 4, 3]");
    println!();

    // A unit-norm basis vector; shorter inputs are zero-padded
    let input = Tensor::<Backend, 2>::from_floats([[1.0, 0.0, 0.0, 0.0]], &device);
    let output = layer.forward(input);

    println!("  Input shape:  [1, 4]");
    println!("  Output shape: {:?}", output.dims());
    let values: Vec<f32> = output.into_data().to_vec().unwrap();
    println!("  Z expectations: {values:?}");
    println!();

    // Example 2: Quantum LSTM cell
    println!("Example 2: Quantum LSTM cell");
    let cell = QLSTMCell::<Backend>::new(8, 4, 4, 1, &device);

    println!("Created QLSTM cell:");
    println!("  Input size: 8");
    println!("  Qubits per gate: 4");
    println!("  Entangler depth: 1");
    println!();

    let input = Tensor::<Backend, 2>::random(
        [2, 8],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let output = cell.forward(input);

    println!("  Input shape:  [2, 8]");
    println!("  Output shape: {:?}", output.dims());
    println!();

    // Example 3: Choosing the entangler rotation basis
    println!("Example 3: RY entanglers");
    let cell_y = QLSTMCell::<Backend>::new(8, 4, 4, 1, &device).with_rotation(Rotation::Y);

    let input = Tensor::<Backend, 2>::random(
        [1, 8],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let output = cell_y.forward(input);
    println!("  Output shape: {:?}", output.dims());
    println!();

    println!("=== Basic example completed! ===");
}
