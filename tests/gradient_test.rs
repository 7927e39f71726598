#[cfg(test)]
mod tests {
    use burn::backend::{Autodiff, NdArray};
    use burn::tensor::{Distribution, Tensor};
    use qlayers::cells::QLSTMCell;
    use qlayers::dense::QuantumDenseLayer;
    use qlayers::rnn::QLSTM;

    type Backend = Autodiff<NdArray<f32>>;

    #[test]
    fn test_dense_layer_input_gradients() {
        let device = Default::default();
        let layer = QuantumDenseLayer::<Backend>::new(2, &device).with_seeded_weights(1);

        let input = Tensor::<Backend, 2>::from_floats([[0.6, 0.8, 0.0, 0.0]], &device)
            .require_grad();
        let output = layer.forward(input.clone());
        let grads = output.sum().backward();

        let grad = input.grad(&grads).expect("input gradient missing");
        assert_eq!(grad.dims(), [1, 4]);
        let magnitude: f32 = grad.abs().sum().into_scalar();
        assert!(magnitude.is_finite());
    }

    #[test]
    fn test_qlstm_cell_input_gradients() {
        let device = Default::default();
        let cell = QLSTMCell::<Backend>::new(6, 4, 4, 1, &device).with_seeded_weights(2);

        let input = Tensor::<Backend, 2>::random(
            [2, 6],
            Distribution::Uniform(-1.0, 1.0),
            &device,
        )
        .require_grad();
        let output = cell.forward(input.clone());
        let grads = output.sum().backward();

        let grad = input.grad(&grads).expect("input gradient missing");
        assert_eq!(grad.dims(), [2, 6]);
        let magnitude: f32 = grad.abs().sum().into_scalar();
        assert!(magnitude.is_finite());
        assert!(magnitude > 0.0, "gradient vanished entirely");
    }

    #[test]
    fn test_qlstm_sequence_gradients() {
        let device = Default::default();
        let layer = QLSTM::<Backend>::new(5, 3, 3, 1, &device).with_return_sequences(false);

        let input = Tensor::<Backend, 3>::random(
            [1, 4, 5],
            Distribution::Uniform(-1.0, 1.0),
            &device,
        )
        .require_grad();
        let output = layer.forward(input.clone());
        let grads = output.sum().backward();

        assert!(input.grad(&grads).is_some());
    }
}
