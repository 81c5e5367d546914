use crate::error::SymNmfError;
use crate::Matrix;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

/// Seed used by the driver, matching the reference pipeline.
pub const DEFAULT_SEED: u64 = 1234;

/// Draws the initial factor matrix for the solver.
///
/// Produces an n x k matrix with entries sampled independently and
/// uniformly from [0, 2 * sqrt(mean(w) / k)). The generator is passed in
/// by the caller, so a fixed seed reproduces the same factor for the same
/// `w` and `k`.
pub fn initialize_factor<R: Rng>(
    w: &Matrix,
    k: usize,
    rng: &mut R,
) -> Result<Matrix, SymNmfError> {
    let n = w.nrows();
    if w.ncols() != n {
        return Err(SymNmfError::Format(format!(
            "normalized similarity matrix must be square, got {}x{}",
            n,
            w.ncols()
        )));
    }
    if k < 1 || k >= n {
        return Err(SymNmfError::Config(format!(
            "rank k={} must satisfy 1 <= k < n_samples={}",
            k, n
        )));
    }

    let mean = w.mean().unwrap_or(0.0);
    let upper_bound = 2.0 * (mean / k as f64).sqrt();
    if !upper_bound.is_finite() || upper_bound <= 0.0 {
        return Err(SymNmfError::Domain(format!(
            "mean similarity {} leaves no valid initialization range",
            mean
        )));
    }

    Ok(Matrix::random_using(
        (n, k),
        Uniform::new(0.0, upper_bound),
        rng,
    ))
}
