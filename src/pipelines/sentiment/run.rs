use burn::{
    data::dataset::{Dataset, InMemDataset},
    module::{AutodiffModule, Module},
    tensor::backend::AutodiffBackend,
};

use crate::{
    models::rnn,
    text::{encode, normalize, tokenize, Vocabulary},
};

use super::{
    evaluate, train, train_test_split, Accuracy, Document, Encoded, Item, LabelError, Sentiment,
    Training,
};

/// The outcome of a full training and evaluation run
#[derive(Debug, Clone)]
pub struct Report {
    /// Mean batch loss for each epoch
    pub epoch_losses: Vec<f64>,

    /// Accuracy on the held-out partition
    pub accuracy: Accuracy,

    /// Number of vocabulary ids, including the reserved ones
    pub vocab_len: usize,

    /// Number of training reviews
    pub train_len: usize,

    /// Number of held-out reviews
    pub test_len: usize,
}

/// Clean, tokenize and label every record in the dataset
pub fn prepare<I: Item, D: Dataset<I>>(dataset: &D) -> Result<Vec<Document>, LabelError> {
    dataset
        .iter()
        .map(|item| {
            let sentiment = Sentiment::try_from(item.label())?;

            Ok(Document::new(tokenize(&normalize(item.review())), sentiment))
        })
        .collect()
}

/// Build a vocabulary from the tokens of the given documents
pub fn build_vocab(documents: &[Document], cap: usize) -> Vocabulary {
    Vocabulary::build(documents.iter().map(|doc| &doc.tokens), cap)
}

/// Encode documents to fixed-length id sequences
pub fn encode_all(
    documents: Vec<Document>,
    vocab: &Vocabulary,
    max_seq_length: usize,
) -> Vec<Encoded> {
    documents
        .into_iter()
        .map(|doc| Encoded::new(encode(&doc.tokens, vocab, max_seq_length), doc.sentiment))
        .collect()
}

/// Run the whole pipeline: prepare, split, build the vocabulary, encode, train and evaluate
pub fn run<B, I, D>(dataset: D, config: &Training, device: &B::Device) -> anyhow::Result<Report>
where
    B: AutodiffBackend,
    I: Item,
    D: Dataset<I>,
{
    config.validate()?;

    let documents = prepare(&dataset)?;
    log::info!("Prepared {} reviews", documents.len());

    let corpus_vocab = config
        .vocab_from_corpus
        .then(|| build_vocab(&documents, config.vocab_size));

    let (train_docs, test_docs) =
        train_test_split(documents, config.test_fraction, config.seed);

    if train_docs.is_empty() || test_docs.is_empty() {
        return Err(anyhow!(
            "Not enough reviews to split: {} train, {} test",
            train_docs.len(),
            test_docs.len()
        ));
    }

    let vocab = corpus_vocab.unwrap_or_else(|| build_vocab(&train_docs, config.vocab_size));
    log::info!(
        "Built a vocabulary of {} ids from the {}",
        vocab.len(),
        if config.vocab_from_corpus {
            "full corpus"
        } else {
            "training partition"
        }
    );

    let train_len = train_docs.len();
    let test_len = test_docs.len();

    let dataset_train = InMemDataset::new(encode_all(train_docs, &vocab, config.max_seq_length));
    let dataset_test = InMemDataset::new(encode_all(test_docs, &vocab, config.max_seq_length));
    log::info!("Split into {} train and {} test reviews", train_len, test_len);

    let model = rnn::Config::new(vocab.len())
        .with_embedding_size(config.embedding_size)
        .with_hidden_size(config.hidden_size)
        .init::<B>(device);
    log::info!("Initialized a model with {} parameters", model.num_params());

    let (model, epoch_losses) = train(model, dataset_train, config, device);

    let accuracy = evaluate(&model.valid(), dataset_test, config, device)?;

    println!("Final test accuracy: {}", accuracy);

    Ok(Report {
        epoch_losses,
        accuracy,
        vocab_len: vocab.len(),
        train_len,
        test_len,
    })
}
