//! Embeddings mapping classical feature vectors onto quantum states.

use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor};

use super::state::StateVector;
use super::templates::Rotation;

/// Encode features as one rotation angle per wire.
///
/// `features` must have shape `[batch, n_wires]`; each column drives a
/// rotation of the matching wire in the given basis.
///
/// # Panics
/// Panics if the feature count does not match the register's wire count.
pub fn angle_embedding<B: Backend>(
    state: &mut StateVector<B>,
    features: Tensor<B, 2>,
    rotation: Rotation,
) {
    let [batch_size, n_features] = features.dims();
    assert_eq!(
        n_features,
        state.n_wires(),
        "angle embedding expects one feature per wire: got {n_features} features for {} wires",
        state.n_wires()
    );

    for wire in 0..n_features {
        let angle = features.clone().slice([0..batch_size, wire..wire + 1]);
        match rotation {
            Rotation::X => state.apply_rx(wire, angle),
            Rotation::Y => state.apply_ry(wire, angle),
            Rotation::Z => state.apply_rz(wire, angle),
        }
    }
}

/// Encode features directly as state amplitudes.
///
/// Inputs shorter than `2^n_wires` are zero-padded, so non-power-of-two
/// lengths are accepted. Each row is normalized to unit norm.
///
/// # Panics
/// Panics if the feature count exceeds `2^n_wires`, or if any row is a zero
/// vector (a zero vector cannot be normalized to a quantum state).
pub fn amplitude_embedding<B: Backend>(features: Tensor<B, 2>, n_wires: usize) -> StateVector<B> {
    assert!(n_wires > 0, "amplitude embedding needs at least one wire");

    let device = features.device();
    let [batch_size, n_features] = features.dims();
    let dim = 1usize << n_wires;
    assert!(
        n_features <= dim,
        "amplitude embedding over {n_wires} wires holds at most {dim} amplitudes, got {n_features} features"
    );

    let amplitudes = if n_features < dim {
        let padding = Tensor::zeros([batch_size, dim - n_features], &device);
        Tensor::cat(vec![features, padding], 1)
    } else {
        features
    };

    let squared_norm = (amplitudes.clone() * amplitudes.clone()).sum_dim(1);
    let smallest: f32 = squared_norm.clone().min().into_scalar().elem();
    assert!(
        smallest > 0.0,
        "amplitude embedding received a zero vector, which cannot be normalized to a quantum state"
    );

    let amplitudes = amplitudes / squared_norm.sqrt();
    StateVector::from_amplitudes(amplitudes, n_wires)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use std::f32::consts::PI;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_angle_embedding_matches_direct_rotation() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::from_floats([[0.4, -1.3]], &device);

        let mut embedded = StateVector::<TestBackend>::zero(1, 2, &device);
        angle_embedding(&mut embedded, features.clone(), Rotation::X);

        let mut manual = StateVector::<TestBackend>::zero(1, 2, &device);
        manual.apply_rx(0, features.clone().slice([0..1, 0..1]));
        manual.apply_rx(1, features.slice([0..1, 1..2]));

        let diff = (embedded.z_expectations() - manual.z_expectations())
            .abs()
            .max()
            .into_scalar();
        assert!(diff < 1e-6);
    }

    #[test]
    fn test_angle_embedding_expectations() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::from_floats([[PI, 0.0]], &device);

        let mut state = StateVector::<TestBackend>::zero(1, 2, &device);
        angle_embedding(&mut state, features, Rotation::X);

        let expvals = state.z_expectations();
        let z0: f32 = expvals.clone().slice([0..1, 0..1]).into_scalar();
        let z1: f32 = expvals.slice([0..1, 1..2]).into_scalar();
        assert!((z0 + 1.0).abs() < 1e-5);
        assert!((z1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_amplitude_embedding_normalizes() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::from_floats([[3.0, 4.0, 0.0, 0.0]], &device);

        let state = amplitude_embedding(features, 2);
        let probs = state.probabilities();

        let total: f32 = probs.clone().sum().into_scalar();
        let p0: f32 = probs.slice([0..1, 0..1]).into_scalar();
        assert!((total - 1.0).abs() < 1e-5);
        assert!((p0 - 0.36).abs() < 1e-5); // (3/5)^2
    }

    #[test]
    fn test_amplitude_embedding_pads_short_input() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::from_floats([[1.0, 0.0, 0.0]], &device);

        let state = amplitude_embedding(features, 2);
        assert_eq!(state.dim(), 4);

        let expvals = state.z_expectations();
        let z0: f32 = expvals.slice([0..1, 0..1]).into_scalar();
        assert!((z0 - 1.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "zero vector")]
    fn test_amplitude_embedding_rejects_zero_vector() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::zeros([1, 4], &device);
        let _ = amplitude_embedding::<TestBackend>(features, 2);
    }

    #[test]
    #[should_panic(expected = "at most")]
    fn test_amplitude_embedding_rejects_oversized_input() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::ones([1, 5], &device);
        let _ = amplitude_embedding::<TestBackend>(features, 2);
    }

    #[test]
    #[should_panic(expected = "one feature per wire")]
    fn test_angle_embedding_rejects_width_mismatch() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 2>::ones([1, 3], &device);
        let mut state = StateVector::<TestBackend>::zero(1, 2, &device);
        angle_embedding(&mut state, features, Rotation::X);
    }
}
