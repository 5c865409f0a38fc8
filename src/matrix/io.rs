//! Plain-text matrix files.
//!
//! Input is whitespace-separated integers in row-major order. Only the first
//! N×N values are read; anything after them is ignored. Output is one
//! integer per line, row-major.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::Matrix;
use crate::error::{Error, Result};

/// Reads an N×N matrix from `path`.
pub fn load_matrix(path: impl AsRef<Path>, n: usize) -> Result<Matrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let matrix = parse_matrix(&text, n).map_err(|err| match err {
        ParseFailure::Token(token) => Error::Format {
            path: path.to_path_buf(),
            token,
        },
        ParseFailure::Short(found) => Error::ShortInput {
            path: path.to_path_buf(),
            expected: n.saturating_mul(n),
            found,
        },
    })?;
    info!(path = %path.display(), n, "loaded matrix");
    Ok(matrix)
}

/// Writes `matrix` to `path`, creating or truncating the file.
pub fn save_matrix(path: impl AsRef<Path>, matrix: &Matrix) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_matrix(&mut out, matrix)
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), n = matrix.n(), "saved matrix");
    Ok(())
}

/// Writes one value per line, row-major.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> std::io::Result<()> {
    for row in matrix.rows() {
        for value in row {
            writeln!(out, "{}", value)?;
        }
    }
    Ok(())
}

#[derive(Debug)]
enum ParseFailure {
    Token(String),
    Short(usize),
}

fn parse_matrix(text: &str, n: usize) -> std::result::Result<Matrix, ParseFailure> {
    // an N too large to square can never be satisfied by the file
    let expected = n.saturating_mul(n);
    let mut data = Vec::new();
    for token in text.split_whitespace().take(expected) {
        let value = token
            .parse::<i32>()
            .map_err(|_| ParseFailure::Token(token.to_string()))?;
        data.push(value);
    }
    if data.len() < expected {
        return Err(ParseFailure::Short(data.len()));
    }
    Ok(Matrix::from_vec(n, data))
}
