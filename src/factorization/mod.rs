//! Symmetric non-negative matrix factorization.
//!
//! Approximates a normalized similarity matrix W by H * H^T with H
//! entrywise non-negative, using multiplicative updates:
//! - `initialize_factor`: draws the initial factor from a seeded generator
//! - `SymNmf`: the iterative solver with builder-style configuration
//! - `reconstruction_error`: squared Frobenius distance ||W - H*H^T||^2
//!
//! # Examples
//!
//! ```rust
//! use symnmf::{similarity_matrix, degree_matrix, normalized_similarity, SymNmf};
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0]
//! ];
//!
//! let a = similarity_matrix(&x).unwrap();
//! let d = degree_matrix(&a).unwrap();
//! let w = normalized_similarity(&a, &d).unwrap();
//!
//! let mut model = SymNmf::new(2).random_state(42);
//! let h = model.fit_transform(&w).unwrap();
//!
//! assert_eq!(h.shape(), &[4, 2]);
//! assert!(h.iter().all(|&v| v >= 0.0));
//! ```

mod init;
mod symnmf;

pub use init::{DEFAULT_SEED, initialize_factor};
pub use symnmf::{SymNmf, reconstruction_error};
