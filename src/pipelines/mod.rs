/// Binary sentiment classification
pub mod sentiment;
