use burn::{
    data::{dataloader::DataLoaderBuilder, dataset::Dataset},
    module::AutodiffModule,
    optim::{AdamWConfig, GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion},
};

use super::{Batcher, Classifier, Encoded, Training};

/// Train the model for a fixed number of epochs over shuffled mini-batches, returning the
/// trained model along with the mean batch loss of each epoch
pub fn train<B, M, D>(model: M, dataset: D, config: &Training, device: &B::Device) -> (M, Vec<f64>)
where
    B: AutodiffBackend,
    M: AutodiffModule<B> + Classifier<B>,
    D: Dataset<Encoded> + 'static,
{
    let batcher = Batcher::<B>::new(config.max_seq_length, device.clone());

    let mut builder = DataLoaderBuilder::new(batcher)
        .batch_size(config.batch_size)
        .shuffle(config.seed);

    if config.num_workers > 1 {
        builder = builder.num_workers(config.num_workers);
    }

    let dataloader = builder.build(dataset);

    let mut optimizer = AdamWConfig::new()
        .with_epsilon(config.adam_epsilon)
        .with_weight_decay(config.weight_decay)
        .init::<B, M>();

    let mut model = model;
    let mut epoch_losses = Vec::with_capacity(config.num_epochs);

    for epoch in 1..=config.num_epochs {
        let mut total_loss = 0.0;
        let mut num_batches = 0usize;

        for batch in dataloader.iter() {
            let output = model.forward_classification(batch);
            let loss = output.loss.clone().into_scalar().elem::<f64>();

            let grads = GradientsParams::from_grads(output.loss.backward(), &model);
            model = optimizer.step(config.learning_rate, model, grads);

            total_loss += loss;
            num_batches += 1;

            log::debug!("epoch {epoch} batch {num_batches}: loss {loss:.4}");
        }

        let mean_loss = if num_batches == 0 {
            0.0
        } else {
            total_loss / num_batches as f64
        };

        println!("Epoch {}, Loss: {:.4}", epoch, mean_loss);

        epoch_losses.push(mean_loss);
    }

    (model, epoch_losses)
}
