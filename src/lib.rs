//! # qlayers - Quantum Circuit Layers for Burn
//!
//! Variational-quantum-circuit layers as drop-in building blocks for the
//! Burn deep learning framework.
//!
//! ## Features
//!
//! - **QuantumDenseLayer**: amplitude embedding + strongly entangling
//!   template + per-wire Z-expectation readout
//! - **QLSTMCell**: an LSTM-style cell whose forget/input/update/output
//!   gates are independent quantum circuits
//! - **QLSTM**: sequence-level wrapper distributing the cell over time
//! - **Circuit building blocks**: batched statevector evolution, angle and
//!   amplitude embeddings, entangling-layer templates
//!
//! All circuit math is expressed as Burn tensor operations, so gradients
//! flow through embeddings, entanglers, and measurements on any autodiff
//! backend with no custom backward functions.
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use qlayers::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! // A 4-wire quantum dense layer
//! let layer = QuantumDenseLayer::<Backend>::new(4, &device);
//! let input = Tensor::<Backend, 2>::from_floats([[1.0, 0.0, 0.0, 0.0]], &device);
//! let output = layer.forward(input);
//! assert_eq!(output.dims(), [1, 4]);
//! ```
//!
//! ## Cell-level Usage
//!
//! For direct cell access (single timestep processing):
//!
//! ```ignore
//! use qlayers::cells::QLSTMCell;
//!
//! let cell = QLSTMCell::<Backend>::new(16, 4, 4, 1, &device)
//!     .with_rotation(Rotation::Y);
//! let output = cell.forward(input); // [batch, 4]
//! ```

pub mod cells;
pub mod circuit;
pub mod dense;
pub mod rnn;

pub mod prelude {
    pub use crate::cells::QLSTMCell;
    pub use crate::circuit::{Rotation, StateVector};
    pub use crate::dense::QuantumDenseLayer;
    pub use crate::rnn::QLSTM;
}
