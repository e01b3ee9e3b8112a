use std::fmt::Display;

use crate::backend;

/// The unique string token for the CPU device
pub static CPU: &str = "cpu";

/// The unique string token prefix for CUDA devices
pub static CUDA: &str = "cuda";

/// The unique string token for Apple's Metal Performance Shaders
pub static MPS: &str = "mps";

/// Available compute devices
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Device {
    /// The CPU
    #[default]
    Cpu,

    /// A CUDA device, with its index
    Cuda(usize),

    /// Apple Metal Performance Shaders
    Mps,
}

impl Device {
    /// Convert to a device of the backend selected at build time
    #[cfg(not(feature = "tch"))]
    pub fn to_backend(&self) -> Result<backend::Device, DeviceError> {
        use burn::backend::ndarray::NdArrayDevice;

        match self {
            Device::Cpu => Ok(NdArrayDevice::Cpu),
            other => Err(DeviceError::Unsupported(*other)),
        }
    }

    /// Convert to a device of the backend selected at build time
    #[cfg(feature = "tch")]
    pub fn to_backend(&self) -> Result<backend::Device, DeviceError> {
        use burn::backend::libtorch::LibTorchDevice;

        Ok(match self {
            Device::Cpu => LibTorchDevice::Cpu,
            Device::Cuda(index) => LibTorchDevice::Cuda(*index),
            Device::Mps => LibTorchDevice::Mps,
        })
    }
}

impl TryFrom<&str> for Device {
    type Error = DeviceError;

    /// Parse "cpu", "mps", "cuda" or "cuda:N"
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();

        if value == CPU {
            return Ok(Device::Cpu);
        }

        if value == MPS {
            return Ok(Device::Mps);
        }

        if value == CUDA {
            return Ok(Device::Cuda(0));
        }

        let cuda = value
            .strip_prefix(CUDA)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|index| index.parse().ok())
            .map(Device::Cuda);

        cuda.ok_or(DeviceError::Unknown(value))
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cpu => write!(f, "{}", CPU),
            Device::Cuda(index) => write!(f, "{}:{}", CUDA, index),
            Device::Mps => write!(f, "{}", MPS),
        }
    }
}

/// Device Error
#[derive(thiserror::Error, Debug)]
pub enum DeviceError {
    /// No device found for the given string
    #[error("no device found for {0}")]
    Unknown(String),

    /// The device needs a backend this build doesn't include
    #[error("device {0} requires the `tch` feature")]
    Unsupported(Device),
}
