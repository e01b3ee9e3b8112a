use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Randomly partition items into (train, test) with a seeded permutation. The test partition
/// gets `ceil(len * test_fraction)` items.
pub fn train_test_split<T>(items: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let n_test = test_size(items.len(), test_fraction);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(&mut rng);

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut take = |index: &usize| slots[*index].take();

    let test = indices[..n_test].iter().filter_map(&mut take).collect();
    let train = indices[n_test..].iter().filter_map(&mut take).collect();

    (train, test)
}

fn test_size(len: usize, test_fraction: f64) -> usize {
    ((len as f64) * test_fraction).ceil().min(len as f64) as usize
}
