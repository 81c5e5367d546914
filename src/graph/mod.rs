//! Similarity-graph construction over a set of data points.
//!
//! This module provides the three matrices derived from a dataset:
//! - `similarity_matrix`: pairwise Gaussian similarities
//! - `degree_matrix`: diagonal matrix of per-point similarity mass
//! - `normalized_similarity`: the symmetrically normalized similarity matrix
//!
//! # Examples
//!
//! ```rust
//! use symnmf::{similarity_matrix, degree_matrix, normalized_similarity};
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [0.0, 1.0]
//! ];
//!
//! let a = similarity_matrix(&x).unwrap();
//! let d = degree_matrix(&a).unwrap();
//! let w = normalized_similarity(&a, &d).unwrap();
//!
//! assert_eq!(w.shape(), &[3, 3]);
//! assert_eq!(w[[0, 0]], 0.0);
//! ```

mod degree;
mod normalize;
mod similarity;

pub use degree::degree_matrix;
pub use normalize::normalized_similarity;
pub use similarity::similarity_matrix;
