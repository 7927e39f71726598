//! Sequence processing with the QLSTM layer
//!
//! This example runs the quantum LSTM over batched sequences and sketches
//! the training setup. For real training, switch to an autodiff backend:
//! `type Backend = Autodiff<NdArray<f32>>;`

use burn::backend::NdArray;
use burn::tensor::Tensor;
use qlayers::rnn::QLSTM;

fn main() {
    println!("=== qlayers Sequence Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: batch-first sequences (the default)
    println!("Example 1: Batch-first sequence");
    let qlstm = QLSTM::<Backend>::new(16, 4, 4, 1, &device);

    // Input shape: [batch=4, seq=10, features=16]
    let input = Tensor::<Backend, 3>::random(
        [4, 10, 16],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let output = qlstm.forward(input);

    println!("  Input shape:  [4, 10, 16]");
    println!("  Output shape: {:?}", output.dims());
    println!();

    // Example 2: keep only the last timestep (sequence classification)
    println!("Example 2: Last timestep only");
    let qlstm_last = QLSTM::<Backend>::new(16, 4, 4, 1, &device).with_return_sequences(false);

    let input = Tensor::<Backend, 3>::random(
        [4, 10, 16],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let output = qlstm_last.forward(input);

    println!("  Output shape: {:?}", output.dims());
    println!();

    // Example 3: sequence-first layout
    println!("Example 3: Sequence-first processing");
    let qlstm_seq = QLSTM::<Backend>::new(16, 4, 4, 1, &device).with_batch_first(false);

    // Input shape: [seq=10, batch=2, features=16]
    let input = Tensor::<Backend, 3>::random(
        [10, 2, 16],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let output = qlstm_seq.forward(input);

    println!("  Input shape:  [10, 2, 16]");
    println!("  Output shape: {:?}", output.dims());
    println!();

    println!("Training loop structure:");
    println!("  1. Forward:  predictions = qlstm.forward(input)");
    println!("  2. Loss:     loss = mse(predictions, target)");
    println!("  3. Backward: grads = loss.backward()");
    println!("  4. Update:   model = optimizer.step(lr, model, grads)");
    println!();

    println!("=== Sequence example completed! ===");
}
