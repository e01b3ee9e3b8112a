use burn::{
    module::Module,
    nn::{lstm::Lstm, Embedding, Linear},
    tensor::{backend::Backend, Int, Tensor},
};
use derive_new::new;

use crate::pipelines::sentiment::Classifier;

/// A single-direction LSTM over word embeddings with a linear head producing one logit
#[derive(Module, Debug, new)]
pub struct Model<B: Backend> {
    /// Trainable word embeddings
    pub embedding: Embedding<B>,

    /// The recurrent layer
    pub lstm: Lstm<B>,

    /// Projection from the final hidden state to a single logit
    pub output: Linear<B>,
}

impl<B: Backend> Model<B> {
    /// Run the embedded sequence through the LSTM and return the hidden state of the last step:
    /// [batch_size, hidden_size]
    pub fn last_hidden(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let embedded = self.embedding.forward(tokens);

        let (_cell_states, hidden_states) = self.lstm.forward(embedded, None);

        let [batch_size, seq_length, hidden_size] = hidden_states.dims();

        hidden_states
            .slice([0..batch_size, seq_length - 1..seq_length, 0..hidden_size])
            .reshape([batch_size, hidden_size])
    }
}

impl<B: Backend> Classifier<B> for Model<B> {
    fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 1> {
        let hidden = self.last_hidden(tokens);
        let [batch_size, _] = hidden.dims();

        self.output.forward(hidden).reshape([batch_size])
    }
}
