//! The compute backend selected at build time

use burn::backend::Autodiff;

/// The backend used for inference-mode computation
#[cfg(not(feature = "tch"))]
pub type Backend = burn::backend::NdArray;

/// The backend used for inference-mode computation
#[cfg(feature = "tch")]
pub type Backend = burn::backend::LibTorch;

/// The backend used for training, with gradient tracking
pub type TrainingBackend = Autodiff<Backend>;

/// The device type of the selected backend
pub type Device = <Backend as burn::tensor::backend::Backend>::Device;
