use crate::error::{Error, Operand, Result};
use crate::matrix::Matrix;

/// Multiplies `a` (m by k) by `b` (k by n) and returns the m by n product.
///
/// Inputs are checked before anything is computed, in this order: both
/// non-empty, `a` rectangular, `b` rectangular, inner dimensions equal.
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    if a.is_empty() || b.is_empty() {
        tracing::debug!(a_rows = a.len(), b_rows = b.len(), "empty matrix");
        return Err(Error::invalid("Empty matrix"));
    }

    let a = Matrix::from_operand(a, Operand::A)?;
    let b = Matrix::from_operand(b, Operand::B)?;

    Ok(a.matmul(&b)?.to_rows())
}

/// Slides `kernel` over `input` without padding or kernel reversal.
///
/// Returns `input.len() - kernel.len() + 1` values, or an empty vector
/// when the kernel is longer than the input.
pub fn conv1d(input: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    if input.is_empty() || kernel.is_empty() {
        tracing::debug!(n = input.len(), k = kernel.len(), "empty input or kernel");
        return Err(Error::invalid("Empty input or kernel"));
    }

    let n = input.len();
    let k = kernel.len();
    tracing::trace!(n, k, "conv1d");

    // no valid positions
    if k > n {
        return Ok(Vec::new());
    }

    Ok(input
        .windows(k)
        .map(|window| {
            let mut sum = 0.0;
            for (x, w) in window.iter().zip(kernel) {
                sum += x * w;
            }
            sum
        })
        .collect())
}

#[cfg(feature = "bench")]
mod tests {
    use super::conv1d;

    #[bench]
    fn bench_conv1d(b: &mut test::Bencher) {
        let input = vec![1.0; 100000];
        let kernel = vec![0.5; 64];
        b.iter(|| conv1d(&input, &kernel));
    }
}
