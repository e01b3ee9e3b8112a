//! Command line tool to train and evaluate the sentiment classifier

use anyhow::anyhow;
use burn::LearningRate;
use burn_sentiment::{
    backend::TrainingBackend,
    cli::Device,
    datasets::imdb,
    pipelines::sentiment::{self, Training},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: train [OPTIONS]

Options:
  -h, --help               Print help
  -i, --input              The reviews CSV file (defaults to 'data/IMDB Dataset.csv')
  -n, --num-epochs         Number of epochs to train for
  -b, --batch-size         Batch size
  -l, --learning-rate      Learning rate
  -s, --seed               Seed for the train/test split and shuffling
  --device                 The device to use: 'cpu', 'cuda', 'cuda:N' or 'mps' (defaults to 'cpu')
  --vocab-from-corpus      Build the vocabulary from every review rather than the training split
";

#[derive(Debug)]
struct Args {
    input: Option<String>,
    num_epochs: Option<usize>,
    batch_size: Option<usize>,
    learning_rate: Option<LearningRate>,
    seed: Option<u64>,
    device: Device,
    vocab_from_corpus: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let device: Option<String> = pargs.opt_value_from_str("--device")?;

        let args = Args {
            input: pargs.opt_value_from_str(["-i", "--input"])?,
            num_epochs: pargs.opt_value_from_str(["-n", "--num-epochs"])?,
            batch_size: pargs.opt_value_from_str(["-b", "--batch-size"])?,
            learning_rate: pargs.opt_value_from_str(["-l", "--learning-rate"])?,
            seed: pargs.opt_value_from_str(["-s", "--seed"])?,
            device: match device {
                Some(device) => Device::try_from(device.as_str())?,
                None => Device::default(),
            },
            vocab_from_corpus: pargs.contains("--vocab-from-corpus"),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let mut config = Training::new().with_vocab_from_corpus(args.vocab_from_corpus);

    if let Some(input) = args.input {
        config.input = input;
    }

    if let Some(num_epochs) = args.num_epochs {
        config.num_epochs = num_epochs;
    }

    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }

    if let Some(learning_rate) = args.learning_rate {
        config.learning_rate = learning_rate;
    }

    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let device = args.device.to_backend()?;

    log::info!("Loading reviews from {}", config.input);

    let dataset = imdb::Dataset::load(&config.input)
        .map_err(|e| anyhow!("Unable to load {}: {}", config.input, e))?;

    log::info!("Training on {} with config {}", args.device, config);

    sentiment::run::<TrainingBackend, _, _>(dataset, &config, &device)?;

    Ok(())
}
