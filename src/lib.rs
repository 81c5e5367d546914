pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod factorization;
pub mod graph;
pub mod io;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use error::SymNmfError;
pub use factorization::{DEFAULT_SEED, SymNmf, initialize_factor, reconstruction_error};
pub use graph::{degree_matrix, normalized_similarity, similarity_matrix};
