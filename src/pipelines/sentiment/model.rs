use burn::{
    nn::loss::BinaryCrossEntropyLossConfig,
    tensor::{activation::sigmoid, backend::Backend, Int, Tensor},
};
use derive_new::new;

use super::batcher::Train;

/// The output of a forward pass with targets
#[derive(Debug, new)]
pub struct BinaryClassificationOutput<B: Backend> {
    /// The mean logistic loss over the batch
    pub loss: Tensor<B, 1>,

    /// One logit per item: [batch_size]
    pub logits: Tensor<B, 1>,

    /// Class ids for the batch: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

/// A trait for models that score reviews with a single positive-class logit
pub trait Classifier<B: Backend> {
    /// Defines forward pass from token ids [batch_size, seq_length] to logits [batch_size]
    fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 1>;

    /// Forward pass with the sigmoid cross-entropy loss against the batch targets
    fn forward_classification(&self, item: Train<B>) -> BinaryClassificationOutput<B> {
        let logits = self.forward(item.tokens);

        let loss = BinaryCrossEntropyLossConfig::new()
            .with_logits(true)
            .init(&logits.device())
            .forward(logits.clone(), item.targets.clone());

        BinaryClassificationOutput {
            loss,
            logits,
            targets: item.targets,
        }
    }

    /// Defines forward pass for inference, returning positive-class probabilities
    fn infer(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 1> {
        sigmoid(self.forward(tokens))
    }
}
