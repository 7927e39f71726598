//! Sequence-level wrapper around the quantum LSTM cell.

use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::cells::QLSTMCell;
use crate::circuit::Rotation;

/// Applies a [`QLSTMCell`] across a sequence.
///
/// The cell derives its state from each step's projection (its gating
/// recurrence runs inside the step), so the wrapper distributes the cell
/// over time and optionally keeps only the last step.
#[derive(Module, Debug)]
pub struct QLSTM<B: Backend> {
    /// The cell for processing individual timesteps
    cell: QLSTMCell<B>,
    /// Whether input is batch-first
    #[module(skip)]
    batch_first: bool,
    /// Whether to return the full sequence or just the last timestep
    #[module(skip)]
    return_sequences: bool,
}

impl<B: Backend> QLSTM<B> {
    /// Create a new QLSTM layer.
    ///
    /// # Arguments
    /// * `input_size` - Number of input features per timestep
    /// * `hidden_size` - Hidden width carried by the cell
    /// * `n_qubits` - Wire count of each gate circuit (also the output width)
    /// * `n_qlayers` - Entangler depth and gating iteration count
    /// * `device` - Device to create the module on
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        n_qubits: usize,
        n_qlayers: usize,
        device: &B::Device,
    ) -> Self {
        let cell = QLSTMCell::new(input_size, hidden_size, n_qubits, n_qlayers, device);

        Self {
            cell,
            batch_first: true,
            return_sequences: true,
        }
    }

    /// Set whether input is batch-first (default: true)
    pub fn with_batch_first(mut self, batch_first: bool) -> Self {
        self.batch_first = batch_first;
        self
    }

    /// Set whether to return full sequences (default: true)
    pub fn with_return_sequences(mut self, return_sequences: bool) -> Self {
        self.return_sequences = return_sequences;
        self
    }

    /// Set the rotation basis of the cell's gate entanglers.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.cell = self.cell.with_rotation(rotation);
        self
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.cell.input_size()
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    /// Width of each output step.
    pub fn output_size(&self) -> usize {
        self.cell.n_qubits()
    }

    /// Forward pass over a sequence.
    ///
    /// # Arguments
    /// * `input` - Tensor of shape `[batch, seq, features]` if batch-first,
    ///   `[seq, batch, features]` otherwise
    ///
    /// # Returns
    /// `[batch, seq, n_qubits]`, or `[batch, 1, n_qubits]` when only the
    /// last timestep is kept
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        let dims = input.dims();
        let seq_len = if self.batch_first { dims[1] } else { dims[0] };

        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            let step_input = if self.batch_first {
                input.clone().narrow(1, t, 1).squeeze(1)
            } else {
                input.clone().narrow(0, t, 1).squeeze(0)
            };

            let output = self.cell.forward(step_input);

            if self.return_sequences || t == seq_len - 1 {
                outputs.push(output);
            }
        }

        Tensor::stack(outputs, 1)
    }
}
