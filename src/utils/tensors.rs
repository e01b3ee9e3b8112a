use burn::tensor::{backend::Backend, Data, ElementConversion, Int, Shape, Tensor};

/// Stack fixed-length token id sequences into a [batch_size, seq_length] tensor
pub fn stack_ids<B: Backend>(
    ids_list: Vec<Vec<usize>>,
    seq_length: usize,
    device: &B::Device,
) -> Tensor<B, 2, Int> {
    let batch_size = ids_list.len();

    let values: Vec<B::IntElem> = ids_list
        .into_iter()
        .flat_map(|ids| {
            debug_assert_eq!(ids.len(), seq_length, "sequences must be encoded to a fixed length");
            ids.into_iter()
        })
        .map(|id| (id as i64).elem())
        .collect();

    Tensor::from_data(
        Data::new(values, Shape::new([batch_size, seq_length])),
        device,
    )
}

/// Build a 1D tensor of class ids
pub fn class_ids<B: Backend>(ids: Vec<usize>, device: &B::Device) -> Tensor<B, 1, Int> {
    let len = ids.len();
    let values: Vec<B::IntElem> = ids.into_iter().map(|id| (id as i64).elem()).collect();

    Tensor::from_data(Data::new(values, Shape::new([len])), device)
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use pretty_assertions::assert_eq;

    use super::*;

    type TestBackend = NdArray;

    #[test]
    fn stacks_sequences_row_by_row() {
        let device = Default::default();

        let tensor = stack_ids::<TestBackend>(vec![vec![2, 3, 0], vec![1, 0, 0]], 3, &device);

        assert_eq!(tensor.dims(), [2, 3]);
        assert_eq!(
            tensor.into_data().convert::<i64>().value,
            vec![2, 3, 0, 1, 0, 0]
        );
    }

    #[test]
    fn builds_class_ids() {
        let device = Default::default();

        let tensor = class_ids::<TestBackend>(vec![1, 0, 1], &device);

        assert_eq!(tensor.dims(), [3]);
        assert_eq!(tensor.into_data().convert::<i64>().value, vec![1, 0, 1]);
    }
}
