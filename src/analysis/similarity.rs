use rayon::prelude::*;

use crate::foundation::{core::VideoVolume, matrix::Matrix};

/// Pairwise frame-dissimilarity matrix for `volume`, mean-normalized.
///
/// Cell `(i, j)` holds the root sum of squared differences (RSSD) between
/// frames `i` and `j`, accumulated in `f64` so narrow pixel values cannot
/// wrap. The matrix is symmetric with an exactly-zero diagonal; each
/// unordered pair is computed once and written to both triangle cells.
///
/// After the pairwise fill the whole matrix is divided by the mean of all
/// `N * N` cells, which removes the dependence on frame resolution and makes
/// the selector's alpha weight portable across inputs. A mean of zero (all
/// frames identical, or a single frame) leaves the matrix all-zero.
pub fn similarity_matrix(volume: &VideoVolume) -> Matrix {
    let n = volume.num_frames();
    let frames = volume.frame_slices();

    let mut matrix = Matrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let v = rssd(frames[i], frames[j]);
            *matrix.at_mut(i, j) = v;
            *matrix.at_mut(j, i) = v;
        }
    }

    normalize_by_mean(&mut matrix);
    matrix
}

/// Bit-identical to [`similarity_matrix`], scoring pairs on the current
/// rayon thread pool.
///
/// Each unordered pair is an independent work item; per-pair accumulation
/// order matches the serial path, so the outputs agree exactly.
pub fn similarity_matrix_parallel(volume: &VideoVolume) -> Matrix {
    let n = volume.num_frames();
    let frames = volume.frame_slices();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();
    let values: Vec<f64> = pairs
        .par_iter()
        .map(|&(i, j)| rssd(frames[i], frames[j]))
        .collect();

    let mut matrix = Matrix::zeros(n, n);
    for (&(i, j), &v) in pairs.iter().zip(&values) {
        *matrix.at_mut(i, j) = v;
        *matrix.at_mut(j, i) = v;
    }

    normalize_by_mean(&mut matrix);
    matrix
}

fn rssd(a: &[u8], b: &[u8]) -> f64 {
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum();
    sum.sqrt()
}

fn normalize_by_mean(matrix: &mut Matrix) {
    let mean = matrix.mean();
    if mean > 0.0 {
        matrix.scale(1.0 / mean);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/similarity.rs"]
mod tests;
