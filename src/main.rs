use std::env;
use std::process;

use log::debug;

use symnmf::io::{format_matrix, read_matrix};
use symnmf::{
    degree_matrix, normalized_similarity, similarity_matrix, Matrix, SymNmf, SymNmfError,
};

/// The operation requested on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Goal {
    Sym,
    Ddg,
    Norm,
    SymNmf(usize),
}

impl Goal {
    fn parse(name: &str, k: i64) -> Result<Self, SymNmfError> {
        match name {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            "symnmf" => {
                let k = usize::try_from(k).map_err(|_| {
                    SymNmfError::Config(format!("rank must be positive, got {}", k))
                })?;
                Ok(Goal::SymNmf(k))
            }
            other => Err(SymNmfError::Config(format!("unknown goal '{}'", other))),
        }
    }
}

fn execute(goal: Goal, x: &Matrix) -> Result<Matrix, SymNmfError> {
    let a = similarity_matrix(x)?;
    match goal {
        Goal::Sym => Ok(a),
        Goal::Ddg => degree_matrix(&a),
        Goal::Norm => {
            let d = degree_matrix(&a)?;
            normalized_similarity(&a, &d)
        }
        Goal::SymNmf(k) => {
            let d = degree_matrix(&a)?;
            let w = normalized_similarity(&a, &d)?;
            SymNmf::new(k).fit_transform(&w)
        }
    }
}

fn run(args: &[String]) -> Result<String, SymNmfError> {
    if args.len() != 3 {
        return Err(SymNmfError::Config(format!(
            "expected 3 arguments (k, goal, file), got {}",
            args.len()
        )));
    }

    let k: i64 = args[0]
        .trim()
        .parse()
        .map_err(|_| SymNmfError::Config(format!("rank '{}' is not an integer", args[0])))?;
    let goal = Goal::parse(&args[1], k)?;
    let x = read_matrix(&args[2])?;

    let result = execute(goal, &x)?;
    Ok(format_matrix(&result))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            // Every failure collapses to the same user-facing line; the
            // kind is still visible to anyone running with a logger.
            debug!("pipeline failed: {}", err);
            println!("An Error Has Occurred");
            process::exit(1);
        }
    }
}
