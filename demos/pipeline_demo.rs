use ndarray::array;
use symnmf::io::format_matrix;
use symnmf::{degree_matrix, normalized_similarity, reconstruction_error, similarity_matrix, SymNmf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SymNMF Pipeline Walkthrough ===\n");

    // Two loose groups of points in the plane
    let x = array![
        [0.0, 0.0],
        [0.5, 0.2],
        [0.2, 0.4],
        [4.0, 4.0],
        [4.3, 3.8],
        [3.9, 4.4]
    ];

    println!("Dataset: {} samples, {} features\n", x.nrows(), x.ncols());

    println!("=== Similarity matrix (Gaussian kernel) ===");
    let a = similarity_matrix(&x)?;
    print!("{}", format_matrix(&a));

    println!("\n=== Diagonal degree matrix ===");
    let d = degree_matrix(&a)?;
    print!("{}", format_matrix(&d));

    println!("\n=== Normalized similarity matrix ===");
    let w = normalized_similarity(&a, &d)?;
    print!("{}", format_matrix(&w));

    println!("\n=== Factorization, k = 2 ===");
    let mut model = SymNmf::new(2).max_iter(300).tolerance(1e-4);
    let h = model.fit_transform(&w)?;
    print!("{}", format_matrix(&h));

    println!("\nIterations run: {}", model.n_iter.unwrap());
    println!(
        "Reconstruction error ||W - H*H^T||^2: {:.6}",
        reconstruction_error(&w, &h)
    );

    // Rows of H act as soft cluster affinities; points in the same group
    // should end up with their largest entry in the same column.
    println!("\nDominant column per point:");
    for (i, row) in h.outer_iter().enumerate() {
        let (best, _) = row
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (j, &v)| if v > acc.1 { (j, v) } else { acc });
        println!("  point {} -> column {}", i, best);
    }

    Ok(())
}
