/// Sentiment Items
pub mod item;

/// Experiment configuration
pub mod config;

/// Seeded train/test partitioning
pub mod split;

/// Batcher
pub mod batcher;

/// Common model traits for sentiment classification
pub mod model;

/// Training
pub mod training;

/// Evaluation
pub mod evaluation;

/// End-to-end runner
pub mod run;

pub use batcher::Batcher;
pub use config::{ConfigError, Training};
pub use evaluation::{evaluate, Accuracy, EvaluationError};
pub use item::{Document, Encoded, Item, LabelError, Sentiment};
pub use model::{BinaryClassificationOutput, Classifier};
pub use run::{run, Report};
pub use split::train_test_split;
pub use training::train;
