/// Text cleanup and tokenization
pub mod normalize;

/// Frequency-ranked vocabulary
pub mod vocab;

/// Fixed-length sequence encoding
pub mod encode;

pub use encode::encode;
pub use normalize::{normalize, tokenize};
pub use vocab::{Vocabulary, PAD_ID, UNK_ID};
