use crate::error::{KernelBankError, Result};
use crate::writer::KernelBankHeader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "rand-kernel-bank.txt";
pub const DEFAULT_NBANDS: u32 = 1;
pub const DEFAULT_KWIDTH: usize = 3;
pub const DEFAULT_KHEIGHT: usize = 3;
pub const DEFAULT_NKERNELS: usize = 8;

/// Parameters for one kernel bank generation run.
///
/// `nbands` is recorded in the header only. Zero dimensions are accepted
/// here and fail later, when the first kernel is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelBankConfig {
    pub filename: PathBuf,
    pub nbands: u32,
    pub kwidth: usize,
    pub kheight: usize,
    pub nkernels: usize,
}

impl Default for KernelBankConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from(DEFAULT_FILENAME),
            nbands: DEFAULT_NBANDS,
            kwidth: DEFAULT_KWIDTH,
            kheight: DEFAULT_KHEIGHT,
            nkernels: DEFAULT_NKERNELS,
        }
    }
}

impl KernelBankConfig {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn with_nbands(mut self, nbands: u32) -> Self {
        self.nbands = nbands;
        self
    }

    pub fn with_kernel_size(mut self, kwidth: usize, kheight: usize) -> Self {
        self.kwidth = kwidth;
        self.kheight = kheight;
        self
    }

    pub fn with_nkernels(mut self, nkernels: usize) -> Self {
        self.nkernels = nkernels;
        self
    }

    /// Number of weights per kernel, `kwidth * kheight`.
    pub fn dim(&self) -> Result<usize> {
        self.kwidth.checked_mul(self.kheight).ok_or_else(|| {
            KernelBankError::InvalidConfig(format!(
                "{}x{} kernel overflows usize",
                self.kwidth, self.kheight
            ))
        })
    }

    /// Checks the config before generation and returns the kernel `dim()`.
    /// Zero sizes pass; they fail at normalization.
    pub fn validate(&self) -> Result<usize> {
        self.dim()
    }

    pub fn header(&self) -> KernelBankHeader {
        KernelBankHeader {
            nbands: self.nbands,
            kwidth: self.kwidth,
            kheight: self.kheight,
            nkernels: self.nkernels,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| KernelBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
