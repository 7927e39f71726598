//! # Cell Implementations
//!
//! Single-timestep cells. These process one timestep at a time and are
//! wrapped by the higher-level layers in [`crate::rnn`] for sequence
//! processing.
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features |
//! | `output` | `[batch, n_qubits]` | Gated expectation values |
//!
//! ## Example: Using QLSTMCell Directly
//!
//! ```ignore
//! use qlayers::cells::QLSTMCell;
//! use burn::tensor::Tensor;
//!
//! let device = Default::default();
//! let cell = QLSTMCell::<Backend>::new(16, 4, 4, 1, &device);
//!
//! // Process single timestep
//! let input: Tensor<Backend, 2> = /* [batch, 16] */;
//! let output = cell.forward(input);
//! // output: [batch, 4]
//! ```

pub mod qlstm_cell;

pub use qlstm_cell::QLSTMCell;
