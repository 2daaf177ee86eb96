use crate::error::{KernelBankError, Result};
use crate::generator::KernelBank;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// First line of a kernel bank file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelBankHeader {
    pub nbands: u32,
    pub kwidth: usize,
    pub kheight: usize,
    pub nkernels: usize,
}

impl KernelBankHeader {
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} {} {} {}",
            self.nbands, self.kwidth, self.kheight, self.nkernels
        )
    }
}

/// Header, then one line per kernel in generation order.
pub fn write_bank<W: Write>(mut out: W, bank: &KernelBank) -> io::Result<()> {
    bank.header().write_line(&mut out)?;
    for kernel in bank.kernels() {
        kernel.write_line(&mut out)?;
    }
    Ok(())
}

/// Truncates `path` and writes `bank` into it. A failed write leaves
/// whatever was already flushed on disk.
pub fn write_bank_file(path: &Path, bank: &KernelBank) -> Result<()> {
    let io_err = |source: io::Error| KernelBankError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_bank(&mut out, bank).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        nkernels = bank.len(),
        "kernel bank written"
    );
    Ok(())
}
