//! Writes `rand-kernel-bank.txt` in the working directory using the
//! default bank shape: one band, eight 3x3 kernels.

mod logging;
#[cfg(test)]
mod tests;

use anyhow::Context;
use kernel_bank::{generate_kernel_bank_default, DEFAULT_FILENAME};

fn main() -> anyhow::Result<()> {
    logging::init()?;

    generate_kernel_bank_default()
        .with_context(|| format!("generating kernel bank {}", DEFAULT_FILENAME))?;

    tracing::info!(path = DEFAULT_FILENAME, "kernel bank ready");
    Ok(())
}
