/// CLI Indexes: Compute devices
pub mod devices;

pub use devices::Device;
