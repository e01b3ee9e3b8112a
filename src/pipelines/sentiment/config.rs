use burn::LearningRate;

use crate::datasets::imdb;

/// Define configuration struct for the experiment
#[derive(burn::config::Config, Debug)]
pub struct Training {
    /// Maximum number of real tokens in the vocabulary, not counting padding and unknown
    #[config(default = 20_000)]
    pub vocab_size: usize,

    /// Length every review is truncated or padded to
    #[config(default = 300)]
    pub max_seq_length: usize,

    /// Width of the word embeddings
    #[config(default = 50)]
    pub embedding_size: usize,

    /// Size of the recurrent hidden state
    #[config(default = 256)]
    pub hidden_size: usize,

    /// Batch size
    #[config(default = 256)]
    pub batch_size: usize,

    /// Number of epochs
    #[config(default = 15)]
    pub num_epochs: usize,

    /// Learning rate, held constant for the whole run
    #[config(default = 5e-3)]
    pub learning_rate: LearningRate,

    /// AdamW epsilon
    #[config(default = 1e-8)]
    pub adam_epsilon: f32,

    /// AdamW weight decay
    #[config(default = 1e-2)]
    pub weight_decay: f32,

    /// Fraction of the records held out for evaluation
    #[config(default = 0.2)]
    pub test_fraction: f64,

    /// Seed for the train/test split and batch shuffling
    #[config(default = 42)]
    pub seed: u64,

    /// Number of data loader workers
    #[config(default = 1)]
    pub num_workers: usize,

    /// Build the vocabulary from every record rather than the training partition only
    #[config(default = false)]
    pub vocab_from_corpus: bool,

    /// The location of the reviews CSV file
    #[config(default = "imdb::DEFAULT_PATH.to_string()")]
    pub input: String,
}

impl Training {
    /// Reject settings the pipeline can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seq_length == 0 {
            return Err(ConfigError::Invalid("max_seq_length must be positive"));
        }

        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be positive"));
        }

        if self.num_epochs == 0 {
            return Err(ConfigError::Invalid("num_epochs must be positive"));
        }

        if self.embedding_size == 0 || self.hidden_size == 0 {
            return Err(ConfigError::Invalid("layer sizes must be positive"));
        }

        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ConfigError::Invalid("test_fraction must be between 0 and 1"));
        }

        Ok(())
    }
}

/// Config Error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A setting is out of range
    #[error("invalid training config: {0}")]
    Invalid(&'static str),
}
