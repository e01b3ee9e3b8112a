/// Recurrent classifier configuration
pub mod config;

/// Embedding, LSTM and linear head
pub mod model;

pub use config::Config;
pub use model::Model;
