use crate::error::SymNmfError;
use crate::{Matrix, Vector};

/// Computes the symmetrically normalized similarity matrix
/// W = D^(-1/2) * A * D^(-1/2).
///
/// Entry (i, j) is A[i][j] / sqrt(D[i][i] * D[j][j]). A non-positive
/// diagonal degree cannot occur for a similarity matrix built from more
/// than one point, but is rejected rather than propagated as NaN or Inf.
pub fn normalized_similarity(a: &Matrix, d: &Matrix) -> Result<Matrix, SymNmfError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(SymNmfError::Format(format!(
            "similarity matrix must be square, got {}x{}",
            n,
            a.ncols()
        )));
    }
    if d.nrows() != n || d.ncols() != n {
        return Err(SymNmfError::Format(format!(
            "degree matrix is {}x{} but similarity matrix is {}x{}",
            d.nrows(),
            d.ncols(),
            n,
            n
        )));
    }

    let mut inv_sqrt = Vector::zeros(n);
    for i in 0..n {
        let degree = d[[i, i]];
        if degree <= 0.0 {
            return Err(SymNmfError::Domain(format!(
                "degree of point {} is {}, cannot normalize",
                i, degree
            )));
        }
        inv_sqrt[i] = 1.0 / degree.sqrt();
    }

    let mut w = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            w[[i, j]] = a[[i, j]] * inv_sqrt[i] * inv_sqrt[j];
        }
    }

    Ok(w)
}
