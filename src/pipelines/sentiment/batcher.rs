use burn::{
    data::dataloader,
    tensor::{backend::Backend, Int, Tensor},
};
use derive_new::new;

use crate::utils::tensors::{class_ids, stack_ids};

use super::Encoded;

/// A training batch for sentiment classification
#[derive(Clone, Debug, new)]
pub struct Train<B: Backend> {
    /// Encoded reviews as 2D tensor: [batch_size, max_seq_length]
    pub tokens: Tensor<B, 2, Int>,

    /// Class ids for the batch, 1 for positive: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

/// Struct for batching encoded reviews
#[derive(Clone, new)]
pub struct Batcher<B: Backend> {
    /// Length every encoded review has been padded or truncated to
    pub max_seq_length: usize,

    /// Device on which to perform computation (e.g., CPU or CUDA device)
    pub device: B::Device,
}

/// Implement Batcher trait for Batcher struct for training
impl<B: Backend> dataloader::batcher::Batcher<Encoded, Train<B>> for Batcher<B> {
    /// Collects a vector of encoded reviews into a training batch
    fn batch(&self, items: Vec<Encoded>) -> Train<B> {
        let batch_size = items.len();

        let mut ids_list = Vec::with_capacity(batch_size);
        let mut class_id_list = Vec::with_capacity(batch_size);

        for item in items {
            class_id_list.push(item.sentiment.class_id());
            ids_list.push(item.ids);
        }

        Train {
            tokens: stack_ids(ids_list, self.max_seq_length, &self.device),
            targets: class_ids(class_id_list, &self.device),
        }
    }
}
