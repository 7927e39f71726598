//! # Sequence-Level Layers
//!
//! Layers that distribute a cell over a full sequence and handle batching.
//!
//! ## Tensor Shapes
//!
//! ### Input Tensor (3D)
//!
//! | Format | Shape | Default |
//! |--------|-------|---------|
//! | Batch-first | `[batch, seq_len, features]` | ✓ Yes |
//! | Sequence-first | `[seq_len, batch, features]` | No |
//!
//! Use `.with_batch_first(false)` to switch to sequence-first format.
//!
//! ### Output Tensor
//!
//! | Setting | Shape |
//! |---------|-------|
//! | `return_sequences=true` (default) | `[batch, seq_len, n_qubits]` |
//! | `return_sequences=false` | `[batch, 1, n_qubits]` |
//!
//! ## Quick Start
//!
//! ```ignore
//! use qlayers::rnn::QLSTM;
//! use burn::tensor::Tensor;
//!
//! let qlstm = QLSTM::<Backend>::new(16, 4, 4, 1, &device);
//!
//! // Process sequence: [batch=4, seq_len=10, features=16]
//! let input: Tensor<Backend, 3> = Tensor::zeros([4, 10, 16], &device);
//! let output = qlstm.forward(input);
//! // output: [4, 10, 4]
//! ```

pub mod qlstm;

pub use qlstm::QLSTM;
