use std::{cmp::Reverse, collections::HashMap};

/// The id used to pad sequences to a fixed length
pub const PAD_ID: usize = 0;

/// The id used for tokens that didn't make it into the vocabulary
pub const UNK_ID: usize = 1;

/// The token reserved for padding
pub static PAD_TOKEN: &str = "<BLANK>";

/// The token reserved for unknown words
pub static UNK_TOKEN: &str = "<MISS>";

/// A frozen mapping from tokens to ids, ranked by corpus frequency
#[derive(Clone, Debug)]
pub struct Vocabulary {
    token2id: HashMap<String, usize>,
    id2token: Vec<String>,
}

impl Vocabulary {
    /// Count term frequencies across the documents and assign ids to the `cap` most frequent
    /// terms. Ties keep the order in which the terms were first seen.
    pub fn build<D, T>(documents: D, cap: usize) -> Self
    where
        D: IntoIterator,
        D::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        // token -> (count, first seen)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for token in documents.into_iter().flatten() {
            let token = token.as_ref();

            if let Some((count, _)) = counts.get_mut(token) {
                *count += 1;
            } else {
                let order = counts.len();
                counts.insert(token.to_string(), (1, order));
            }
        }

        let mut ranked: Vec<_> = counts
            .into_iter()
            .filter(|(token, _)| token != PAD_TOKEN && token != UNK_TOKEN)
            .collect();

        ranked.sort_by_key(|(_, (count, order))| (Reverse(*count), *order));

        let mut id2token = Vec::with_capacity(ranked.len().min(cap) + 2);
        id2token.push(PAD_TOKEN.to_string());
        id2token.push(UNK_TOKEN.to_string());
        id2token.extend(ranked.into_iter().take(cap).map(|(token, _)| token));

        let token2id = id2token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id))
            .collect();

        Self { token2id, id2token }
    }

    /// Look up the id for a token, if it is in the vocabulary
    pub fn get(&self, token: &str) -> Option<usize> {
        self.token2id.get(token).copied()
    }

    /// Look up the id for a token, falling back to the unknown id
    pub fn id(&self, token: &str) -> usize {
        self.get(token).unwrap_or(UNK_ID)
    }

    /// Look up the token for an id
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id2token.get(id).map(String::as_str)
    }

    /// The number of ids, including the reserved padding and unknown ids
    pub fn len(&self) -> usize {
        self.id2token.len()
    }

    /// A vocabulary always holds the reserved ids, so this is never true
    pub fn is_empty(&self) -> bool {
        self.id2token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn more_frequent_tokens_get_smaller_ids() {
        let corpus = vec![vec!["y", "x", "z"], vec!["x", "y", "x"], vec!["x"]];

        let vocab = Vocabulary::build(corpus, 10);

        assert_eq!(vocab.get("x"), Some(2));
        assert_eq!(vocab.get("y"), Some(3));
        assert_eq!(vocab.get("z"), Some(4));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let corpus = vec![vec!["b", "a", "c"], vec!["c", "a", "b"]];

        let vocab = Vocabulary::build(corpus, 10);

        assert_eq!(vocab.token(2), Some("b"));
        assert_eq!(vocab.token(3), Some("a"));
        assert_eq!(vocab.token(4), Some("c"));
    }

    #[test]
    fn caps_the_number_of_real_tokens() {
        let corpus = vec![vec!["a", "a", "a", "b", "b", "c", "d"]];

        let vocab = Vocabulary::build(corpus, 2);

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.get("a"), Some(2));
        assert_eq!(vocab.get("b"), Some(3));
        assert_eq!(vocab.get("c"), None);
        assert_eq!(vocab.id("d"), UNK_ID);
    }

    #[test]
    fn reserved_ids_survive_any_corpus() {
        let corpora = vec![
            vec![],
            vec![vec!["<BLANK>", "<BLANK>", "<MISS>"]],
            vec![vec!["plain", "words"]],
        ];

        for corpus in corpora {
            let vocab = Vocabulary::build(corpus, 5);

            assert_eq!(vocab.token(PAD_ID), Some(PAD_TOKEN));
            assert_eq!(vocab.token(UNK_ID), Some(UNK_TOKEN));
            assert_eq!(vocab.get(PAD_TOKEN), Some(PAD_ID));
            assert_eq!(vocab.get(UNK_TOKEN), Some(UNK_ID));
            assert!(vocab.len() <= 5 + 2);
        }
    }

    #[test]
    fn empty_corpus_holds_only_reserved_ids() {
        let vocab = Vocabulary::build(Vec::<Vec<String>>::new(), 20_000);

        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());
    }
}
