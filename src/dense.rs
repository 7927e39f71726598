//! Quantum dense layer: amplitude embedding, strongly entangling template,
//! per-wire Z-expectation readout.

use burn::module::{Module, Param};
use burn::tensor::backend::Backend;
use burn::tensor::{Distribution, Tensor};
use rand::prelude::*;
use std::f64::consts::TAU;

use crate::circuit::{amplitude_embedding, strongly_entangling_layers};

/// A dense layer whose transfer function is a variational quantum circuit.
///
/// The forward pass amplitude-embeds the input vector onto `n_wires` qubits
/// (zero-padding and normalizing as needed), applies one strongly entangling
/// layer with trainable weights of shape `[1, n_wires, 3]`, and returns the
/// per-wire Z expectation values. Input width may be anything up to
/// `2^n_wires`; output width is always `n_wires`.
#[derive(Module, Debug)]
pub struct QuantumDenseLayer<B: Backend> {
    /// Euler angles of the entangling template, shape `[1, n_wires, 3]`
    weights: Param<Tensor<B, 3>>,
    #[module(skip)]
    n_wires: usize,
}

impl<B: Backend> QuantumDenseLayer<B> {
    /// Create a new quantum dense layer over `n_wires` qubits.
    ///
    /// Weights are initialized uniformly in `[0, 2π)`.
    ///
    /// # Panics
    /// Panics if `n_wires` is zero.
    pub fn new(n_wires: usize, device: &B::Device) -> Self {
        assert!(n_wires > 0, "a quantum dense layer needs at least one wire");

        let weights = Tensor::random([1, n_wires, 3], Distribution::Uniform(0.0, TAU), device);

        Self {
            weights: Param::from_tensor(weights),
            n_wires,
        }
    }

    /// Replace the template weights with an explicit tensor of shape
    /// `[1, n_wires, 3]`.
    ///
    /// # Panics
    /// Panics on a shape mismatch.
    pub fn with_weights(mut self, weights: Tensor<B, 3>) -> Self {
        assert_eq!(
            weights.dims(),
            [1, self.n_wires, 3],
            "dense layer weights must have shape [1, {}, 3]",
            self.n_wires
        );
        self.weights = Param::from_tensor(weights);
        self
    }

    /// Reinitialize the template weights from a seeded RNG, uniformly in
    /// `[0, 2π)`. Two layers built from the same seed evaluate identically.
    pub fn with_seeded_weights(mut self, seed: u64) -> Self {
        let device = self.weights.device();
        let mut rng = StdRng::seed_from_u64(seed);
        let data: Vec<f32> = (0..self.n_wires * 3)
            .map(|_| rng.gen_range(0.0..std::f32::consts::TAU))
            .collect();
        let weights =
            Tensor::<B, 1>::from_floats(data.as_slice(), &device).reshape([1, self.n_wires, 3]);
        self.weights = Param::from_tensor(weights);
        self
    }

    /// Number of wires in the circuit.
    pub fn n_wires(&self) -> usize {
        self.n_wires
    }

    /// Width of the output vector (always equal to the wire count).
    pub fn output_size(&self) -> usize {
        self.n_wires
    }

    /// Evaluate the circuit on a batch of inputs.
    ///
    /// # Arguments
    /// * `input` - Tensor of shape `[batch_size, features]` with
    ///   `features <= 2^n_wires`
    ///
    /// # Returns
    /// Z expectation values of shape `[batch_size, n_wires]`, each in
    /// `[-1, 1]`
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut state = amplitude_embedding(input, self.n_wires);
        strongly_entangling_layers(&mut state, self.weights.val());
        state.z_expectations()
    }
}
