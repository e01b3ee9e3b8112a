use std::path::Path;

use burn::data::dataset::{self, InMemDataset};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::pipelines::sentiment;

/// The default location of the IMDB reviews file
pub static DEFAULT_PATH: &str = "data/IMDB Dataset.csv";

/// A labeled IMDB movie review
#[derive(Clone, Debug, Serialize, Deserialize, new)]
pub struct Item {
    /// The raw review text
    pub review: String,

    /// The sentiment label (e.g. "positive" or "negative")
    pub sentiment: String,
}

impl sentiment::Item for Item {
    fn review(&self) -> &str {
        &self.review
    }

    fn label(&self) -> &str {
        &self.sentiment
    }
}

/// Struct for the IMDB dataset
pub struct Dataset {
    /// Underlying In-Memory dataset
    dataset: InMemDataset<Item>,
}

impl dataset::Dataset<Item> for Dataset {
    fn get(&self, index: usize) -> Option<Item> {
        self.dataset.get(index)
    }

    fn len(&self) -> usize {
        self.dataset.len()
    }
}

impl Dataset {
    /// Load the reviews from a CSV file with `review` and `sentiment` columns
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let reader = csv::ReaderBuilder::new();

        let dataset: InMemDataset<Item> = InMemDataset::from_csv(path, &reader)?;

        Ok(Self { dataset })
    }

    /// Build the dataset from items already in memory
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            dataset: InMemDataset::new(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use burn::data::dataset::Dataset as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loads_quoted_reviews_from_csv() {
        let path = env::temp_dir().join(format!("imdb-{}.csv", process::id()));

        fs::write(
            &path,
            "review,sentiment\n\
             \"Loved it, truly. A classic\",positive\n\
             \"Dull, \"\"boring\"\" and long\",negative\n",
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dataset.len(), 2);

        let first = dataset.get(0).unwrap();
        assert_eq!(first.review, "Loved it, truly. A classic");
        assert_eq!(first.sentiment, "positive");

        let second = dataset.get(1).unwrap();
        assert_eq!(second.review, "Dull, \"boring\" and long");
        assert_eq!(second.sentiment, "negative");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Dataset::load("does/not/exist.csv");

        assert!(result.is_err());
    }
}
