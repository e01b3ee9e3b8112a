use super::vocab::{Vocabulary, PAD_ID};

/// Map tokens to vocabulary ids, truncating or right-padding to exactly `max_seq_length` ids
pub fn encode<S: AsRef<str>>(
    tokens: &[S],
    vocab: &Vocabulary,
    max_seq_length: usize,
) -> Vec<usize> {
    let mut ids: Vec<usize> = tokens
        .iter()
        .take(max_seq_length)
        .map(|token| vocab.id(token.as_ref()))
        .collect();

    ids.resize(max_seq_length, PAD_ID);

    ids
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::text::vocab::UNK_ID;

    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::build(vec![vec!["good", "good", "bad"]], 10)
    }

    #[test]
    fn empty_input_is_all_padding() {
        let ids = encode::<&str>(&[], &vocab(), 300);

        assert_eq!(ids, vec![PAD_ID; 300]);
    }

    #[test]
    fn long_input_keeps_the_first_ids() {
        let tokens: Vec<&str> = ["good", "bad", "ugly"].repeat(150);
        let vocab = vocab();

        let ids = encode(&tokens, &vocab, 300);

        assert_eq!(ids.len(), 300);
        assert_eq!(ids[..3], [2, 3, UNK_ID]);
        assert_eq!(
            ids,
            tokens[..300]
                .iter()
                .map(|token| vocab.id(token))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn output_length_is_always_the_target() {
        let vocab = vocab();

        for len in [0, 1, 9, 10, 11, 50] {
            let tokens = vec!["good"; len];

            assert_eq!(encode(&tokens, &vocab, 10).len(), 10);
        }
    }

    #[test]
    fn short_input_is_right_padded() {
        let ids = encode(&["bad", "good"], &vocab(), 5);

        assert_eq!(ids, vec![3, 2, PAD_ID, PAD_ID, PAD_ID]);
    }

    #[test]
    fn unknown_tokens_map_to_unk() {
        let ids = encode(&["terrible", "good", "awful"], &vocab(), 3);

        assert_eq!(ids, vec![UNK_ID, 2, UNK_ID]);
    }
}
