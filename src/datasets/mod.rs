/// The IMDB movie review dataset
pub mod imdb;
