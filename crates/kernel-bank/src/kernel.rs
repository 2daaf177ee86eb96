use crate::error::{KernelBankError, Result};
use rand::Rng;
use rand_distr::StandardNormal;
use std::io::{self, Write};

/// Euclidean norm of `values`.
pub fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// A flattened `kwidth * kheight` filter with unit-norm weights and a free bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f64>,
    bias: f64,
}

impl Kernel {
    /// Scales `weights` to unit L2 norm. The bias is kept as given.
    pub fn from_raw(mut weights: Vec<f64>, bias: f64) -> Result<Self> {
        let magnitude = l2_norm(&weights);
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(KernelBankError::NumericDomain { magnitude });
        }
        for w in weights.iter_mut() {
            *w /= magnitude;
        }
        Ok(Self { weights, bias })
    }

    /// Draws `dim` standard normal weights, then one standard normal bias.
    pub fn sample<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Result<Self> {
        let weights: Vec<f64> = (0..dim)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        let bias: f64 = rng.sample(StandardNormal);
        Self::from_raw(weights, bias)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Weights plus the bias slot.
    pub fn value_count(&self) -> usize {
        self.weights.len() + 1
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.weights
            .iter()
            .copied()
            .chain(std::iter::once(self.bias))
    }

    /// One line per kernel: every value followed by a single space.
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for value in self.values() {
            write!(out, "{} ", value)?;
        }
        writeln!(out)
    }
}
