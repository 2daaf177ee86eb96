use crate::config::KernelBankConfig;
use crate::error::Result;
use crate::kernel::Kernel;
use crate::writer::{write_bank, write_bank_file, KernelBankHeader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use tracing::debug;

/// Kernels sharing one shape, in the order they were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelBank {
    header: KernelBankHeader,
    kernels: Vec<Kernel>,
}

impl KernelBank {
    pub fn header(&self) -> KernelBankHeader {
        self.header
    }

    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: W) -> io::Result<()> {
        write_bank(out, self)
    }
}

/// Draws every kernel of the bank in memory. Nothing touches the
/// filesystem here, so a normalization failure leaves no output file.
pub fn generate_bank<R: Rng + ?Sized>(config: &KernelBankConfig, rng: &mut R) -> Result<KernelBank> {
    let dim = config.validate()?;
    let mut kernels = Vec::with_capacity(config.nkernels);
    for _ in 0..config.nkernels {
        kernels.push(Kernel::sample(dim, rng)?);
    }
    debug!(
        nkernels = kernels.len(),
        dim,
        nbands = config.nbands,
        "kernel bank generated"
    );
    Ok(KernelBank {
        header: config.header(),
        kernels,
    })
}

pub fn generate_kernel_bank<R: Rng + ?Sized>(config: &KernelBankConfig, rng: &mut R) -> Result<()> {
    let bank = generate_bank(config, rng)?;
    write_bank_file(&config.filename, &bank)
}

/// Same seed, same config, byte-identical file.
pub fn generate_kernel_bank_seeded(config: &KernelBankConfig, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_kernel_bank(config, &mut rng)
}

pub fn generate_kernel_bank_default() -> Result<()> {
    generate_kernel_bank(&KernelBankConfig::default(), &mut rand::thread_rng())
}
