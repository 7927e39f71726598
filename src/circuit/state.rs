//! Batched statevector evolution expressed as Burn tensor operations.
//!
//! Amplitudes are held as a pair of real tensors (`re`, `im`) of shape
//! `[batch, 2^n_wires]`, so every gate is ordinary tensor algebra
//! (select/cat/elementwise) and stays differentiable under an autodiff
//! backend without any custom backward functions.

use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor};
use ndarray::Array2;

/// A batch of pure quantum states over `n_wires` simulated qubits.
///
/// Wire 0 is the most significant bit of the basis-state index, so for two
/// wires the amplitude order is |00⟩, |01⟩, |10⟩, |11⟩.
#[derive(Debug, Clone)]
pub struct StateVector<B: Backend> {
    re: Tensor<B, 2>,
    im: Tensor<B, 2>,
    n_wires: usize,
}

/// Bit mask of a wire within a basis-state index.
fn wire_mask(n_wires: usize, wire: usize) -> usize {
    1 << (n_wires - 1 - wire)
}

/// Basis indices with the given wire cleared, paired with the indices where
/// it is set. Both halves share the same ordering, so position `k` of the
/// lower half and position `k` of the upper half form one gate pair.
fn pair_indices(n_wires: usize, wire: usize) -> (Vec<i32>, Vec<i32>) {
    let dim = 1usize << n_wires;
    let mask = wire_mask(n_wires, wire);
    let mut lower = Vec::with_capacity(dim / 2);
    let mut upper = Vec::with_capacity(dim / 2);
    for i in 0..dim {
        if i & mask == 0 {
            lower.push(i as i32);
            upper.push((i | mask) as i32);
        }
    }
    (lower, upper)
}

/// Maps each basis index back to its position in `cat([lower, upper])`.
fn inverse_pair_order(n_wires: usize, wire: usize) -> Vec<i32> {
    let dim = 1usize << n_wires;
    let mask = wire_mask(n_wires, wire);
    let mut inverse = vec![0i32; dim];
    let mut position = 0i32;
    for i in 0..dim {
        if i & mask == 0 {
            inverse[i] = position;
            inverse[i | mask] = position + (dim / 2) as i32;
            position += 1;
        }
    }
    inverse
}

impl<B: Backend> StateVector<B> {
    /// Create a batch of states initialized to |0…0⟩.
    ///
    /// # Panics
    /// Panics if `n_wires` or `batch_size` is zero.
    pub fn zero(batch_size: usize, n_wires: usize, device: &B::Device) -> Self {
        assert!(n_wires > 0, "a state vector needs at least one wire");
        assert!(batch_size > 0, "batch size must be non-zero");

        let dim = 1usize << n_wires;
        let mut amplitudes = vec![0.0f32; dim];
        amplitudes[0] = 1.0;

        let re = Tensor::<B, 1>::from_floats(amplitudes.as_slice(), device)
            .unsqueeze::<2>()
            .repeat_dim(0, batch_size);
        let im = Tensor::zeros([batch_size, dim], device);

        Self { re, im, n_wires }
    }

    /// Create a batch of states from real amplitudes of shape
    /// `[batch, 2^n_wires]`. The caller guarantees each row has unit norm.
    ///
    /// # Panics
    /// Panics if the amplitude count does not match `2^n_wires`.
    pub fn from_amplitudes(re: Tensor<B, 2>, n_wires: usize) -> Self {
        assert!(n_wires > 0, "a state vector needs at least one wire");
        let dim = 1usize << n_wires;
        let [_, amplitudes] = re.dims();
        assert_eq!(
            amplitudes, dim,
            "expected {dim} amplitudes for {n_wires} wires, got {amplitudes}"
        );
        let im = re.zeros_like();
        Self { re, im, n_wires }
    }

    /// Number of wires in the register.
    pub fn n_wires(&self) -> usize {
        self.n_wires
    }

    /// Number of basis states (`2^n_wires`).
    pub fn dim(&self) -> usize {
        1 << self.n_wires
    }

    /// Number of states in the batch.
    pub fn batch_size(&self) -> usize {
        self.re.dims()[0]
    }

    /// Split the amplitudes into the halves where `wire` is 0 and 1.
    #[allow(clippy::type_complexity)]
    fn halves(
        &self,
        wire: usize,
    ) -> (Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>) {
        let device = self.re.device();
        let (lower, upper) = pair_indices(self.n_wires, wire);
        let lower = Tensor::<B, 1, Int>::from_ints(lower.as_slice(), &device);
        let upper = Tensor::<B, 1, Int>::from_ints(upper.as_slice(), &device);
        (
            self.re.clone().select(1, lower.clone()),
            self.im.clone().select(1, lower),
            self.re.clone().select(1, upper.clone()),
            self.im.clone().select(1, upper),
        )
    }

    /// Reassemble the state from transformed halves.
    fn recombine(
        &mut self,
        wire: usize,
        re0: Tensor<B, 2>,
        im0: Tensor<B, 2>,
        re1: Tensor<B, 2>,
        im1: Tensor<B, 2>,
    ) {
        let device = self.re.device();
        let inverse = inverse_pair_order(self.n_wires, wire);
        let inverse = Tensor::<B, 1, Int>::from_ints(inverse.as_slice(), &device);
        self.re = Tensor::cat(vec![re0, re1], 1).select(1, inverse.clone());
        self.im = Tensor::cat(vec![im0, im1], 1).select(1, inverse);
    }

    fn check_wire(&self, wire: usize) {
        assert!(
            wire < self.n_wires,
            "wire {wire} out of range for a {}-wire register",
            self.n_wires
        );
    }

    /// Rotate `wire` around the X axis.
    ///
    /// `theta` is a rank-2 tensor broadcastable against the amplitude halves:
    /// `[batch, 1]` for per-sample angles or `[1, 1]` for shared trainable
    /// angles. Gradients flow through the angle tensor.
    pub fn apply_rx(&mut self, wire: usize, theta: Tensor<B, 2>) {
        self.check_wire(wire);
        let half = theta.div_scalar(2.0);
        let c = half.clone().cos();
        let s = half.sin();

        let (re0, im0, re1, im1) = self.halves(wire);
        let new_re0 = re0.clone() * c.clone() + im1.clone() * s.clone();
        let new_im0 = im0.clone() * c.clone() - re1.clone() * s.clone();
        let new_re1 = im0 * s.clone() + re1 * c.clone();
        let new_im1 = im1 * c - re0 * s;
        self.recombine(wire, new_re0, new_im0, new_re1, new_im1);
    }

    /// Rotate `wire` around the Y axis.
    pub fn apply_ry(&mut self, wire: usize, theta: Tensor<B, 2>) {
        self.check_wire(wire);
        let half = theta.div_scalar(2.0);
        let c = half.clone().cos();
        let s = half.sin();

        let (re0, im0, re1, im1) = self.halves(wire);
        let new_re0 = re0.clone() * c.clone() - re1.clone() * s.clone();
        let new_im0 = im0.clone() * c.clone() - im1.clone() * s.clone();
        let new_re1 = re0 * s.clone() + re1 * c.clone();
        let new_im1 = im0 * s + im1 * c;
        self.recombine(wire, new_re0, new_im0, new_re1, new_im1);
    }

    /// Rotate `wire` around the Z axis.
    pub fn apply_rz(&mut self, wire: usize, theta: Tensor<B, 2>) {
        self.check_wire(wire);
        let half = theta.div_scalar(2.0);
        let c = half.clone().cos();
        let s = half.sin();

        let (re0, im0, re1, im1) = self.halves(wire);
        // Phase e^{-iθ/2} on the |0⟩ half, e^{+iθ/2} on the |1⟩ half.
        let new_re0 = re0.clone() * c.clone() + im0.clone() * s.clone();
        let new_im0 = im0 * c.clone() - re0 * s.clone();
        let new_re1 = re1.clone() * c.clone() - im1.clone() * s.clone();
        let new_im1 = im1 * c + re1 * s;
        self.recombine(wire, new_re0, new_im0, new_re1, new_im1);
    }

    /// General single-wire rotation RZ(φ) → RY(θ) → RZ(ω).
    pub fn apply_rot(
        &mut self,
        wire: usize,
        phi: Tensor<B, 2>,
        theta: Tensor<B, 2>,
        omega: Tensor<B, 2>,
    ) {
        self.apply_rz(wire, phi);
        self.apply_ry(wire, theta);
        self.apply_rz(wire, omega);
    }

    /// Apply a CNOT with the given control and target wires.
    ///
    /// A CNOT permutes basis states, so it reduces to an index gather.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        self.check_wire(control);
        self.check_wire(target);
        assert_ne!(control, target, "CNOT control and target must differ");

        let dim = self.dim();
        let control_mask = wire_mask(self.n_wires, control);
        let target_mask = wire_mask(self.n_wires, target);
        let permutation: Vec<i32> = (0..dim)
            .map(|i| {
                if i & control_mask != 0 {
                    (i ^ target_mask) as i32
                } else {
                    i as i32
                }
            })
            .collect();

        let device = self.re.device();
        let permutation = Tensor::<B, 1, Int>::from_ints(permutation.as_slice(), &device);
        self.re = self.re.clone().select(1, permutation.clone());
        self.im = self.im.clone().select(1, permutation);
    }

    /// Measurement probabilities `|amplitude|²`, shape `[batch, 2^n_wires]`.
    pub fn probabilities(&self) -> Tensor<B, 2> {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// Pauli-Z expectation value of every wire, shape `[batch, n_wires]`.
    pub fn z_expectations(&self) -> Tensor<B, 2> {
        let device = self.re.device();
        let n_wires = self.n_wires;
        let dim = self.dim();

        // +1 where the wire reads 0, -1 where it reads 1.
        let mut signs = Array2::<f32>::zeros((n_wires, dim));
        for wire in 0..n_wires {
            let mask = wire_mask(n_wires, wire);
            for i in 0..dim {
                signs[[wire, i]] = if i & mask == 0 { 1.0 } else { -1.0 };
            }
        }
        let data: Vec<f32> = signs.iter().copied().collect();
        let signs = Tensor::<B, 1>::from_floats(data.as_slice(), &device).reshape([n_wires, dim]);

        self.probabilities().matmul(signs.transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use std::f32::consts::PI;

    type TestBackend = NdArray<f32>;

    fn scalar_angle(value: f32) -> Tensor<TestBackend, 2> {
        let device = Default::default();
        Tensor::<TestBackend, 1>::from_floats([value], &device).unsqueeze::<2>()
    }

    #[test]
    fn test_zero_state() {
        let device = Default::default();
        let state = StateVector::<TestBackend>::zero(2, 2, &device);

        assert_eq!(state.n_wires(), 2);
        assert_eq!(state.dim(), 4);
        assert_eq!(state.batch_size(), 2);

        let probs = state.probabilities();
        let p0: f32 = probs.clone().slice([0..1, 0..1]).into_scalar();
        let total: f32 = probs.sum().into_scalar();
        assert!((p0 - 1.0).abs() < 1e-6);
        assert!((total - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_rx_expectation_is_cosine() {
        let device = Default::default();

        for theta in [0.0f32, 0.3, PI / 2.0, 2.1, PI] {
            let mut state = StateVector::<TestBackend>::zero(1, 1, &device);
            state.apply_rx(0, scalar_angle(theta));

            let expval: f32 = state.z_expectations().into_scalar();
            assert!(
                (expval - theta.cos()).abs() < 1e-5,
                "⟨Z⟩ after RX({theta}) should be cos: got {expval}"
            );
        }
    }

    #[test]
    fn test_ry_expectation_is_cosine() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(1, 1, &device);
        state.apply_ry(0, scalar_angle(1.2));

        let expval: f32 = state.z_expectations().into_scalar();
        assert!((expval - 1.2f32.cos()).abs() < 1e-5);
    }

    #[test]
    fn test_rz_leaves_basis_state_untouched() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(1, 1, &device);
        state.apply_rz(0, scalar_angle(0.7));

        let expval: f32 = state.z_expectations().into_scalar();
        assert!((expval - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(1, 2, &device);

        // RX(π) flips wire 0 (up to phase), then the CNOT flips wire 1.
        state.apply_rx(0, scalar_angle(PI));
        state.apply_cnot(0, 1);

        let expvals = state.z_expectations();
        let z0: f32 = expvals.clone().slice([0..1, 0..1]).into_scalar();
        let z1: f32 = expvals.slice([0..1, 1..2]).into_scalar();
        assert!((z0 + 1.0).abs() < 1e-5);
        assert!((z1 + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cnot_is_identity_on_cleared_control() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(1, 2, &device);
        state.apply_cnot(0, 1);

        let p0: f32 = state.probabilities().slice([0..1, 0..1]).into_scalar();
        assert!((p0 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotations_preserve_norm() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(3, 3, &device);

        state.apply_rx(0, scalar_angle(0.4));
        state.apply_ry(1, scalar_angle(-1.1));
        state.apply_rz(2, scalar_angle(2.6));
        state.apply_cnot(0, 2);
        state.apply_rot(1, scalar_angle(0.1), scalar_angle(0.2), scalar_angle(0.3));

        let total: f32 = state.probabilities().sum().into_scalar();
        assert!((total - 3.0).abs() < 1e-4, "norm drifted: {total}");
    }

    #[test]
    #[should_panic(expected = "wire 2 out of range")]
    fn test_wire_out_of_range() {
        let device = Default::default();
        let mut state = StateVector::<TestBackend>::zero(1, 2, &device);
        state.apply_rx(2, scalar_angle(0.5));
    }
}
