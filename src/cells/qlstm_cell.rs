//! Quantum LSTM cell: the four LSTM gates are variational quantum circuits
//! instead of classical affine transforms.

use burn::module::{Module, Param};
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::{Distribution, Tensor};
use rand::prelude::*;
use std::f64::consts::TAU;

use crate::circuit::{angle_embedding, basic_entangler_layers, Rotation, StateVector};

/// An LSTM-style cell whose forget, input, update, and output gates are
/// independent quantum circuits.
///
/// A single classical projection maps the raw input to `n_qubits` features.
/// Each gate circuit angle-embeds the projected vector onto its own fresh
/// register, applies a basic entangler with trainable weights of shape
/// `[n_qlayers, n_qubits]`, and reads per-wire Z expectations. The gate
/// outputs drive the usual LSTM combination:
///
/// - f = sigmoid(forget circuit), i = sigmoid(input circuit)
/// - g = tanh(update circuit), o = sigmoid(output circuit)
/// - x' = x * f + i * g
/// - x'' = o * tanh(x')
///
/// repeated for `n_qlayers` iterations, starting from the projected input.
#[derive(Module, Debug)]
pub struct QLSTMCell<B: Backend> {
    /// Classical projection `input_size -> n_qubits` (Xavier weights, zero bias)
    projection: Linear<B>,
    forget_weights: Param<Tensor<B, 2>>,
    input_weights: Param<Tensor<B, 2>>,
    update_weights: Param<Tensor<B, 2>>,
    output_weights: Param<Tensor<B, 2>>,
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    #[module(skip)]
    n_qubits: usize,
    #[module(skip)]
    n_qlayers: usize,
    /// Rotation basis: 0=X, 1=Y, 2=Z
    #[module(skip)]
    rotation: u8,
}

impl<B: Backend> QLSTMCell<B> {
    /// Create a new quantum LSTM cell.
    ///
    /// # Arguments
    /// * `input_size` - Size of the input features
    /// * `hidden_size` - Hidden width carried by the cell (the gate circuits
    ///   operate on `n_qubits` features)
    /// * `n_qubits` - Wire count of each gate circuit
    /// * `n_qlayers` - Entangler depth per gate and number of gating
    ///   iterations; 0 reduces the cell to its linear projection
    /// * `device` - Device to create the module on
    ///
    /// # Panics
    /// Panics if `input_size` or `n_qubits` is zero.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        n_qubits: usize,
        n_qlayers: usize,
        device: &B::Device,
    ) -> Self {
        assert!(input_size > 0, "input_size must be non-zero");
        assert!(n_qubits > 0, "a gate circuit needs at least one qubit");

        let mut projection = LinearConfig::new(input_size, n_qubits)
            .with_bias(true)
            .with_initializer(Initializer::XavierUniform { gain: 1.0 })
            .init(device);
        projection.bias = projection
            .bias
            .map(|bias| Param::from_tensor(bias.val().zeros_like()));

        // Weight rows double as circuit depth and iteration count; a
        // depth-zero cell keeps one inert row so its tensors stay non-empty.
        let rows = n_qlayers.max(1);

        Self {
            projection,
            forget_weights: Self::init_gate_weights(rows, n_qubits, device),
            input_weights: Self::init_gate_weights(rows, n_qubits, device),
            update_weights: Self::init_gate_weights(rows, n_qubits, device),
            output_weights: Self::init_gate_weights(rows, n_qubits, device),
            input_size,
            hidden_size,
            n_qubits,
            n_qlayers,
            rotation: 0, // Rotation::X
        }
    }

    fn init_gate_weights(rows: usize, n_qubits: usize, device: &B::Device) -> Param<Tensor<B, 2>> {
        let tensor = Tensor::random([rows, n_qubits], Distribution::Uniform(0.0, TAU), device);
        Param::from_tensor(tensor)
    }

    /// Set the rotation basis used by all four gate entanglers (default: X).
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = match rotation {
            Rotation::X => 0,
            Rotation::Y => 1,
            Rotation::Z => 2,
        };
        self
    }

    /// Reinitialize the four gate weight tensors from a seeded RNG,
    /// uniformly in `[0, 2π)`.
    pub fn with_seeded_weights(mut self, seed: u64) -> Self {
        let device = self.forget_weights.device();
        let rows = self.n_qlayers.max(1);
        let n_qubits = self.n_qubits;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut draw = || -> Param<Tensor<B, 2>> {
            let data: Vec<f32> = (0..rows * n_qubits)
                .map(|_| rng.gen_range(0.0..std::f32::consts::TAU))
                .collect();
            Param::from_tensor(
                Tensor::<B, 1>::from_floats(data.as_slice(), &device).reshape([rows, n_qubits]),
            )
        };
        self.forget_weights = draw();
        self.input_weights = draw();
        self.update_weights = draw();
        self.output_weights = draw();
        self
    }

    /// Replace the four gate weight tensors, each of shape
    /// `[max(n_qlayers, 1), n_qubits]`.
    ///
    /// # Panics
    /// Panics on any shape mismatch.
    pub fn with_gate_weights(
        mut self,
        forget: Tensor<B, 2>,
        input: Tensor<B, 2>,
        update: Tensor<B, 2>,
        output: Tensor<B, 2>,
    ) -> Self {
        let expected = [self.n_qlayers.max(1), self.n_qubits];
        for (name, weights) in [
            ("forget", &forget),
            ("input", &input),
            ("update", &update),
            ("output", &output),
        ] {
            assert_eq!(
                weights.dims(),
                expected,
                "{name} gate weights must have shape {expected:?}"
            );
        }
        self.forget_weights = Param::from_tensor(forget);
        self.input_weights = Param::from_tensor(input);
        self.update_weights = Param::from_tensor(update);
        self.output_weights = Param::from_tensor(output);
        self
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Wire count of each gate circuit (also the output width).
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Entangler depth and gating iteration count.
    pub fn n_qlayers(&self) -> usize {
        self.n_qlayers
    }

    /// Rotation basis of the gate entanglers.
    pub fn rotation(&self) -> Rotation {
        match self.rotation {
            1 => Rotation::Y,
            2 => Rotation::Z,
            _ => Rotation::X,
        }
    }

    /// Run one gate circuit on the current feature vector.
    fn evaluate_gate(&self, weights: &Param<Tensor<B, 2>>, features: &Tensor<B, 2>) -> Tensor<B, 2> {
        let batch_size = features.dims()[0];
        let device = features.device();

        let mut state = StateVector::zero(batch_size, self.n_qubits, &device);
        angle_embedding(&mut state, features.clone(), Rotation::X);
        basic_entangler_layers(&mut state, weights.val(), self.rotation());
        state.z_expectations()
    }

    /// Perform a forward pass through the cell.
    ///
    /// # Arguments
    /// * `input` - Tensor of shape `[batch_size, input_size]`
    ///
    /// # Returns
    /// Tensor of shape `[batch_size, n_qubits]`; for `n_qlayers >= 1` every
    /// component lies in `(-1, 1)`
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = self.projection.forward(input);

        for _ in 0..self.n_qlayers {
            let forget_gate = activation::sigmoid(self.evaluate_gate(&self.forget_weights, &x));
            let input_gate = activation::sigmoid(self.evaluate_gate(&self.input_weights, &x));
            let update_gate = self.evaluate_gate(&self.update_weights, &x).tanh();
            let output_gate = activation::sigmoid(self.evaluate_gate(&self.output_weights, &x));

            x = x * forget_gate + input_gate * update_gate;
            x = output_gate * x.tanh();
        }

        x
    }
}
