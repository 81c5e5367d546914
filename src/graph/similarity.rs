use crate::error::SymNmfError;
use crate::Matrix;

/// Computes the pairwise similarity matrix of a dataset.
///
/// Entry (i, j) for i != j is the Gaussian similarity
/// exp(-||x_i - x_j||^2 / 2); the diagonal is zero. The result is
/// symmetric and every off-diagonal entry lies in (0, 1].
pub fn similarity_matrix(x: &Matrix) -> Result<Matrix, SymNmfError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(SymNmfError::Format(
            "input matrix must have at least one sample and one feature".to_string(),
        ));
    }

    let n = x.nrows();
    let mut a = Matrix::zeros((n, n));

    // Each unordered pair is computed once; symmetry fills the mirror entry.
    for i in 0..n {
        for j in (i + 1)..n {
            let dist_sq = squared_distance(&x.row(i), &x.row(j));
            let sim = (-dist_sq / 2.0).exp();
            a[[i, j]] = sim;
            a[[j, i]] = sim;
        }
    }

    Ok(a)
}

fn squared_distance(a: &ndarray::ArrayView1<f64>, b: &ndarray::ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_similarity_basic() {
        let x = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0]
        ];

        let a = similarity_matrix(&x).unwrap();
        assert_eq!(a.shape(), &[3, 3]);

        // Points 0-1 and 0-2 are at distance 1, points 1-2 at distance sqrt(2)
        let expected_near = (-0.5f64).exp(); // 0.6065...
        let expected_far = (-1.0f64).exp(); // 0.3679...

        assert!((a[[0, 1]] - expected_near).abs() < 1e-12);
        assert!((a[[0, 2]] - expected_near).abs() < 1e-12);
        assert!((a[[1, 2]] - expected_far).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_symmetric_zero_diagonal() {
        let x = array![
            [1.0, 2.0, 3.0],
            [4.0, 0.5, 6.0],
            [-1.0, 2.5, 0.0],
            [0.0, 0.0, 1.0]
        ];

        let a = similarity_matrix(&x).unwrap();

        for i in 0..a.nrows() {
            assert_eq!(a[[i, i]], 0.0);
            for j in 0..a.ncols() {
                assert_eq!(a[[i, j]], a[[j, i]]);
            }
        }
    }

    #[test]
    fn test_similarity_off_diagonal_range() {
        let x = array![
            [0.0],
            [0.1],
            [5.0],
            [10.0]
        ];

        let a = similarity_matrix(&x).unwrap();

        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                if i != j {
                    assert!(a[[i, j]] > 0.0);
                    assert!(a[[i, j]] <= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_similarity_duplicate_points() {
        // Identical points are at distance zero, so their similarity is 1
        let x = array![[2.0, 2.0], [2.0, 2.0]];

        let a = similarity_matrix(&x).unwrap();
        assert!((a[[0, 1]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_single_point() {
        let x = array![[1.0, 2.0]];

        let a = similarity_matrix(&x).unwrap();
        assert_eq!(a.shape(), &[1, 1]);
        assert_eq!(a[[0, 0]], 0.0);
    }

    #[test]
    fn test_similarity_empty_input() {
        let x = Matrix::zeros((0, 0));
        assert!(matches!(
            similarity_matrix(&x),
            Err(SymNmfError::Format(_))
        ));
    }
}
