//! Trainable entangling-layer templates.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::state::StateVector;

/// Rotation basis used by the basic entangler and the angle embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    /// Rotation around the X axis
    #[default]
    X,
    /// Rotation around the Y axis
    Y,
    /// Rotation around the Z axis
    Z,
}

/// Apply layers of single-parameter rotations followed by a closed CNOT ring.
///
/// `weights` has shape `[n_layers, n_wires]`: one rotation angle per wire and
/// layer. The ring degenerates to a single CNOT for two wires and to nothing
/// for one wire.
///
/// # Panics
/// Panics if the weight width does not match the register's wire count.
pub fn basic_entangler_layers<B: Backend>(
    state: &mut StateVector<B>,
    weights: Tensor<B, 2>,
    rotation: Rotation,
) {
    let [n_layers, n_wires] = weights.dims();
    assert_eq!(
        n_wires,
        state.n_wires(),
        "entangler weights cover {n_wires} wires but the register has {}",
        state.n_wires()
    );

    for layer in 0..n_layers {
        for wire in 0..n_wires {
            let angle = weights.clone().slice([layer..layer + 1, wire..wire + 1]);
            match rotation {
                Rotation::X => state.apply_rx(wire, angle),
                Rotation::Y => state.apply_ry(wire, angle),
                Rotation::Z => state.apply_rz(wire, angle),
            }
        }
        match n_wires {
            0 | 1 => {}
            2 => state.apply_cnot(0, 1),
            _ => {
                for wire in 0..n_wires {
                    state.apply_cnot(wire, (wire + 1) % n_wires);
                }
            }
        }
    }
}

/// Apply layers of general `Rot` rotations followed by a CNOT ring whose
/// range grows with the layer index.
///
/// `weights` has shape `[n_layers, n_wires, 3]`: the three Euler angles of
/// the per-wire rotation. Layer `l` entangles wire `i` with wire
/// `(i + r) mod n_wires` where `r = (l mod (n_wires - 1)) + 1`.
///
/// # Panics
/// Panics if the weight shape does not match the register.
pub fn strongly_entangling_layers<B: Backend>(state: &mut StateVector<B>, weights: Tensor<B, 3>) {
    let [n_layers, n_wires, n_angles] = weights.dims();
    assert_eq!(
        n_wires,
        state.n_wires(),
        "entangler weights cover {n_wires} wires but the register has {}",
        state.n_wires()
    );
    assert_eq!(n_angles, 3, "each rotation takes 3 angles, got {n_angles}");

    for layer in 0..n_layers {
        for wire in 0..n_wires {
            let phi = weights
                .clone()
                .slice([layer..layer + 1, wire..wire + 1, 0..1])
                .reshape([1, 1]);
            let theta = weights
                .clone()
                .slice([layer..layer + 1, wire..wire + 1, 1..2])
                .reshape([1, 1]);
            let omega = weights
                .clone()
                .slice([layer..layer + 1, wire..wire + 1, 2..3])
                .reshape([1, 1]);
            state.apply_rot(wire, phi, theta, omega);
        }
        if n_wires >= 2 {
            let range = (layer % (n_wires - 1)) + 1;
            for wire in 0..n_wires {
                state.apply_cnot(wire, (wire + range) % n_wires);
            }
        }
    }
}
