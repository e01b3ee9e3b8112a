use burn::{
    nn::{lstm::LstmConfig, EmbeddingConfig, Initializer, LinearConfig},
    tensor::backend::Backend,
};

use super::Model;

/// The Model Configuration
#[derive(burn::config::Config, Debug)]
pub struct Config {
    /// Number of rows in the embedding table, including the reserved padding and unknown ids
    pub vocab_size: usize,

    /// Width of the word embeddings
    #[config(default = 50)]
    pub embedding_size: usize,

    /// Size of the LSTM hidden state
    #[config(default = 256)]
    pub hidden_size: usize,
}

impl Config {
    /// Initialize the model with a standard normal embedding table
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embedding_size)
            .with_initializer(Initializer::Normal {
                mean: 0.0,
                std: 1.0,
            })
            .init(device);

        let lstm = LstmConfig::new(self.embedding_size, self.hidden_size, true).init(device);

        let output = LinearConfig::new(self.hidden_size, 1).init(device);

        Model {
            embedding,
            lstm,
            output,
        }
    }
}
