use crate::error::SymNmfError;
use crate::factorization::init::{DEFAULT_SEED, initialize_factor};
use crate::Matrix;
use log::{debug, trace};
use ndarray::Zip;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Added to the update denominator only when it would otherwise be zero-ish.
const EPS_GUARD: f64 = 1e-12;

/// Symmetric non-negative matrix factorization via multiplicative updates.
///
/// Refines a non-negative factor H so that H * H^T approximates the
/// normalized similarity matrix W, keeping every entry of H non-negative
/// across iterations.
#[derive(Clone, Debug)]
pub struct SymNmf {
    pub h: Option<Matrix>,
    pub n_iter: Option<usize>,
    pub reconstruction_err: Option<f64>,
    n_components: usize,
    max_iter: usize,
    tolerance: f64,
    random_state: u64,
}

impl SymNmf {
    pub fn new(n_components: usize) -> Self {
        Self {
            h: None,
            n_iter: None,
            reconstruction_err: None,
            n_components,
            max_iter: 300,
            tolerance: 1e-4,
            random_state: DEFAULT_SEED,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Draws a seeded initial factor and runs the solver on `w`.
    pub fn fit(&mut self, w: &Matrix) -> Result<(), SymNmfError> {
        let mut rng = StdRng::seed_from_u64(self.random_state);
        let h0 = initialize_factor(w, self.n_components, &mut rng)?;
        self.fit_from(w, h0)
    }

    /// Runs the solver on `w` starting from a caller-supplied factor.
    pub fn fit_from(&mut self, w: &Matrix, h0: Matrix) -> Result<(), SymNmfError> {
        let n = w.nrows();
        if w.ncols() != n {
            return Err(SymNmfError::Format(format!(
                "normalized similarity matrix must be square, got {}x{}",
                n,
                w.ncols()
            )));
        }
        if h0.nrows() != n || h0.ncols() != self.n_components {
            return Err(SymNmfError::Config(format!(
                "initial factor is {}x{} but expected {}x{}",
                h0.nrows(),
                h0.ncols(),
                n,
                self.n_components
            )));
        }
        if h0.iter().any(|&v| v < 0.0) {
            return Err(SymNmfError::Config(
                "initial factor must be entrywise non-negative".to_string(),
            ));
        }

        let mut h = h0;
        let mut n_iter = self.max_iter;

        for iteration in 0..self.max_iter {
            let h_new = update_step(w, &h)?;

            let delta = (&h_new - &h).mapv(|v| v * v).sum();
            h = h_new;

            trace!("iteration {}: delta = {:.6e}", iteration + 1, delta);
            if delta < self.tolerance {
                n_iter = iteration + 1;
                debug!(
                    "converged after {} iterations (delta = {:.6e})",
                    n_iter, delta
                );
                break;
            }
        }

        let err = reconstruction_error(w, &h);
        debug!(
            "factorization finished: {} iterations, reconstruction error {:.6e}",
            n_iter, err
        );

        self.h = Some(h);
        self.n_iter = Some(n_iter);
        self.reconstruction_err = Some(err);

        Ok(())
    }

    pub fn fit_transform(&mut self, w: &Matrix) -> Result<Matrix, SymNmfError> {
        self.fit(w)?;
        Ok(self.h.as_ref().unwrap().clone())
    }
}

/// One simultaneous multiplicative update of every entry of `h`.
///
/// H_new[i][r] = H[i][r] * (W*H)[i][r] / ((H*H^T*H)[i][r] + eps), reading
/// only the previous iteration's values. H * (H^T * H) is used for the
/// denominator, which equals (H * H^T) * H at a fraction of the cost.
fn update_step(w: &Matrix, h: &Matrix) -> Result<Matrix, SymNmfError> {
    let wh = w.dot(h);
    let hth = h.t().dot(h);
    let hhth = h.dot(&hth);

    let mut h_new = h.clone();
    Zip::from(&mut h_new)
        .and(&wh)
        .and(&hhth)
        .for_each(|entry, &numer, &denom| {
            *entry *= numer / (denom + EPS_GUARD);
        });

    if h_new.iter().any(|v| !v.is_finite()) {
        return Err(SymNmfError::NumericInstability(
            "non-finite entry in factor matrix after update".to_string(),
        ));
    }

    Ok(h_new)
}

/// Squared Frobenius norm of the residual, ||W - H * H^T||^2.
pub fn reconstruction_error(w: &Matrix, h: &Matrix) -> f64 {
    let approx = h.dot(&h.t());
    (w - &approx).mapv(|v| v * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{degree_matrix, normalized_similarity, similarity_matrix};
    use ndarray::array;

    fn sample_w() -> Matrix {
        let x = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [5.0, 5.0],
            [5.5, 4.5]
        ];

        let a = similarity_matrix(&x).unwrap();
        let d = degree_matrix(&a).unwrap();
        normalized_similarity(&a, &d).unwrap()
    }

    #[test]
    fn test_symnmf_basic() {
        let w = sample_w();

        let mut model = SymNmf::new(2);
        model.fit(&w).unwrap();

        let h = model.h.as_ref().unwrap();
        assert_eq!(h.shape(), &[5, 2]);
        assert!(h.iter().all(|&v| v >= 0.0 && v.is_finite()));
        assert!(model.n_iter.unwrap() <= 300);
        assert!(model.reconstruction_err.unwrap().is_finite());
    }

    #[test]
    fn test_symnmf_one_step_does_not_increase_error() {
        let w = sample_w();

        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let h0 = initialize_factor(&w, 2, &mut rng).unwrap();

        let before = reconstruction_error(&w, &h0);
        let h1 = update_step(&w, &h0).unwrap();
        let after = reconstruction_error(&w, &h1);

        assert!(after <= before + 1e-9);
    }

    #[test]
    fn test_symnmf_fit_improves_on_initial_factor() {
        let w = sample_w();

        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let h0 = initialize_factor(&w, 2, &mut rng).unwrap();
        let initial_err = reconstruction_error(&w, &h0);

        let mut model = SymNmf::new(2);
        model.fit_from(&w, h0).unwrap();

        assert!(model.reconstruction_err.unwrap() <= initial_err + 1e-9);
    }

    #[test]
    fn test_symnmf_nonnegative_across_iterations() {
        let w = sample_w();

        let mut rng = StdRng::seed_from_u64(99);
        let mut h = initialize_factor(&w, 3, &mut rng).unwrap();

        for _ in 0..50 {
            h = update_step(&w, &h).unwrap();
            assert!(h.iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn test_symnmf_deterministic() {
        let w = sample_w();

        let mut model_a = SymNmf::new(2).random_state(17);
        let mut model_b = SymNmf::new(2).random_state(17);

        let h_a = model_a.fit_transform(&w).unwrap();
        let h_b = model_b.fit_transform(&w).unwrap();

        assert_eq!(h_a, h_b);
    }

    #[test]
    fn test_symnmf_rank_one_terminates() {
        let x = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0]
        ];
        let a = similarity_matrix(&x).unwrap();
        let d = degree_matrix(&a).unwrap();
        let w = normalized_similarity(&a, &d).unwrap();

        let mut model = SymNmf::new(1);
        let h0 = {
            let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
            initialize_factor(&w, 1, &mut rng).unwrap()
        };
        let initial_err = reconstruction_error(&w, &h0);

        model.fit_from(&w, h0).unwrap();

        let h = model.h.as_ref().unwrap();
        assert!(model.n_iter.unwrap() <= 300);
        assert!(h.iter().all(|&v| v >= 0.0 && v.is_finite()));
        assert!(model.reconstruction_err.unwrap() <= initial_err + 1e-9);
    }

    #[test]
    fn test_symnmf_invalid_rank() {
        let w = sample_w();

        let mut model = SymNmf::new(0);
        assert!(matches!(model.fit(&w), Err(SymNmfError::Config(_))));

        let mut model = SymNmf::new(5);
        assert!(matches!(model.fit(&w), Err(SymNmfError::Config(_))));
    }

    #[test]
    fn test_symnmf_rejects_negative_initial_factor() {
        let w = sample_w();
        let h0 = array![
            [0.1, 0.2],
            [0.3, -0.4],
            [0.5, 0.6],
            [0.7, 0.8],
            [0.9, 1.0]
        ];

        let mut model = SymNmf::new(2);
        assert!(matches!(
            model.fit_from(&w, h0),
            Err(SymNmfError::Config(_))
        ));
    }

    #[test]
    fn test_symnmf_instability_surfaced() {
        let w = array![
            [0.0, f64::MAX, 0.1],
            [f64::MAX, 0.0, 0.1],
            [0.1, 0.1, 0.0]
        ];
        let h0 = array![[1e150], [1e150], [1e150]];

        let mut model = SymNmf::new(1);
        assert!(matches!(
            model.fit_from(&w, h0),
            Err(SymNmfError::NumericInstability(_))
        ));
    }

    #[test]
    fn test_reconstruction_error_zero_for_exact_factorization() {
        let h = array![[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]];
        let w = h.dot(&h.t());

        assert!(reconstruction_error(&w, &h) < 1e-12);
    }
}
