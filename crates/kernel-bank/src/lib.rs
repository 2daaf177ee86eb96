pub mod config;
pub mod error;
pub mod generator;
pub mod kernel;
pub mod writer;


pub use config::{KernelBankConfig, DEFAULT_FILENAME};
pub use error::{KernelBankError, Result};
pub use generator::{
    generate_bank, generate_kernel_bank, generate_kernel_bank_default,
    generate_kernel_bank_seeded, KernelBank,
};
pub use kernel::{l2_norm, Kernel};
pub use writer::{write_bank, write_bank_file, KernelBankHeader};
