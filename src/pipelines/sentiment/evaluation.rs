use std::fmt::Display;

use burn::{
    data::{dataloader::DataLoaderBuilder, dataset::Dataset},
    tensor::{backend::Backend, ElementConversion, Int, Tensor},
};
use derive_new::new;

use super::{Batcher, Classifier, Encoded, Training};

/// Probability at or above which a review is predicted positive
pub const THRESHOLD: f64 = 0.5;

/// The share of correctly classified reviews
#[derive(Debug, Clone, Copy, Eq, PartialEq, new)]
pub struct Accuracy {
    /// Number of correct predictions
    pub correct: usize,

    /// Number of predictions
    pub total: usize,
}

impl Accuracy {
    /// Accuracy as a percentage
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.correct as f64 / self.total as f64 * 100.0
    }
}

impl Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} %", self.percent())
    }
}

/// Run the model over the dataset without gradient tracking and measure its accuracy
pub fn evaluate<B, M, D>(
    model: &M,
    dataset: D,
    config: &Training,
    device: &B::Device,
) -> Result<Accuracy, EvaluationError>
where
    B: Backend,
    M: Classifier<B>,
    D: Dataset<Encoded> + 'static,
{
    if dataset.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let batcher = Batcher::<B>::new(config.max_seq_length, device.clone());

    let dataloader = DataLoaderBuilder::new(batcher)
        .batch_size(config.batch_size)
        .build(dataset);

    let mut accuracy = Accuracy::new(0, 0);

    for batch in dataloader.iter() {
        let [batch_size] = batch.targets.dims();
        let probabilities = model.infer(batch.tokens);

        accuracy.correct += count_correct(probabilities, batch.targets);
        accuracy.total += batch_size;
    }

    Ok(accuracy)
}

/// Count the predictions that match their targets after thresholding the probabilities
pub fn count_correct<B: Backend>(
    probabilities: Tensor<B, 1>,
    targets: Tensor<B, 1, Int>,
) -> usize {
    let correct = probabilities
        .greater_equal_elem(THRESHOLD)
        .int()
        .equal(targets)
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>();

    correct as usize
}

/// Evaluation Error
#[derive(thiserror::Error, Debug)]
pub enum EvaluationError {
    /// There is nothing to evaluate
    #[error("the evaluation dataset is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use burn::{backend::NdArray, data::dataset::InMemDataset};
    use pretty_assertions::assert_eq;

    use crate::{
        pipelines::sentiment::Sentiment,
        utils::tensors::class_ids,
    };

    use super::*;

    type TestBackend = NdArray;

    /// Always predicts the positive class
    struct AlwaysPositive;

    impl Classifier<TestBackend> for AlwaysPositive {
        fn forward(&self, tokens: Tensor<TestBackend, 2, Int>) -> Tensor<TestBackend, 1> {
            let [batch_size, _] = tokens.dims();

            Tensor::ones([batch_size], &tokens.device())
        }
    }

    fn encoded(sentiments: &[Sentiment]) -> InMemDataset<Encoded> {
        InMemDataset::new(
            sentiments
                .iter()
                .map(|sentiment| Encoded::new(vec![2, 3, 0], *sentiment))
                .collect(),
        )
    }

    #[test]
    fn all_positive_split_scores_full_marks() {
        let config = Training::new().with_max_seq_length(3).with_batch_size(4);
        let dataset = encoded(&[Sentiment::Positive; 10]);

        let accuracy =
            evaluate::<TestBackend, _, _>(&AlwaysPositive, dataset, &config, &Default::default())
                .unwrap();

        assert_eq!(accuracy, Accuracy::new(10, 10));
        assert_eq!(accuracy.percent(), 100.0);
        assert_eq!(accuracy.to_string(), "100.00 %");
    }

    #[test]
    fn mixed_split_scores_the_positive_share() {
        let config = Training::new().with_max_seq_length(3).with_batch_size(3);
        let dataset = encoded(&[
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Negative,
        ]);

        let accuracy =
            evaluate::<TestBackend, _, _>(&AlwaysPositive, dataset, &config, &Default::default())
                .unwrap();

        assert_eq!(accuracy, Accuracy::new(2, 4));
        assert_eq!(accuracy.percent(), 50.0);
    }

    #[test]
    fn empty_split_is_an_error() {
        let config = Training::new();

        let result =
            evaluate::<TestBackend, _, _>(&AlwaysPositive, encoded(&[]), &config, &Default::default());

        assert!(matches!(result, Err(EvaluationError::Empty)));
    }

    #[test]
    fn thresholds_at_one_half() {
        let device = Default::default();
        let probabilities = Tensor::<TestBackend, 1>::from_floats([0.5, 0.49, 0.9, 0.1], &device);
        let targets = class_ids::<TestBackend>(vec![1, 0, 0, 1], &device);

        assert_eq!(count_correct(probabilities, targets), 2);
    }
}
