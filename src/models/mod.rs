/// Recurrent classifiers
pub mod rnn;
