use crate::foundation::{
    error::{LoopscanError, LoopscanResult},
    matrix::Matrix,
};

/// Fixed 5-tap binomial weights applied along the temporal diagonal.
///
/// These sum to 1 and are symmetric; most weight sits on the exact-match
/// offset. The table is a validated constant of the method and is not
/// runtime-configurable.
pub const BINOMIAL_5: [f64; 5] = [1.0 / 16.0, 1.0 / 4.0, 3.0 / 8.0, 1.0 / 4.0, 1.0 / 16.0];

/// Frames trimmed from each edge of each axis by the valid-mode convolution.
pub const TRIM_PER_EDGE: usize = 2;

/// Convert a trimmed-space (transition-cost) index to an original-volume index.
pub fn to_volume_index(trimmed: usize) -> usize {
    trimmed + TRIM_PER_EDGE
}

/// Convert an original-volume index to a trimmed-space index, if it has one.
pub fn to_trimmed_index(volume: usize) -> Option<usize> {
    volume.checked_sub(TRIM_PER_EDGE)
}

/// Transition-cost matrix for `similarity`, accounting for motion dynamics.
///
/// Each output cell `(p, q)` is the binomial-weighted sum of similarity
/// values along the diagonal band:
///
/// ```text
/// cost[p, q] = sum over k in 0..5 of BINOMIAL_5[k] * similarity[p + k, q + k]
/// ```
///
/// equivalently offsets -2..2 around `(p + 2, q + 2)`. This is a "valid"
/// 2-D convolution with a 5x5 kernel whose only non-zero entries are
/// `BINOMIAL_5` on the main diagonal, so only same-temporal-offset frame
/// pairs are mixed (the symmetric taps make correlation and convolution
/// coincide). The output is `(N - 4) x (N - 4)`: a transition scores well
/// only when the two frames AND their temporal neighbors on both sides
/// match.
///
/// Fails with [`LoopscanError::InsufficientFrames`] when `similarity` has
/// fewer than 5 rows, and with [`LoopscanError::Validation`] when it is not
/// square.
pub fn transition_costs(similarity: &Matrix) -> LoopscanResult<Matrix> {
    let n = similarity.rows();
    if similarity.cols() != n {
        return Err(LoopscanError::validation(format!(
            "similarity matrix must be square, got {n}x{}",
            similarity.cols(),
        )));
    }
    let taps = BINOMIAL_5.len();
    if n < taps {
        return Err(LoopscanError::insufficient_frames(format!(
            "dynamics smoothing needs at least {taps} frames, got {n}"
        )));
    }

    let m = n - (taps - 1);
    let mut costs = Matrix::zeros(m, m);
    for p in 0..m {
        for q in 0..m {
            let mut acc = 0.0;
            for (k, w) in BINOMIAL_5.iter().enumerate() {
                acc += w * similarity.at(p + k, q + k);
            }
            *costs.at_mut(p, q) = acc;
        }
    }
    Ok(costs)
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/dynamics.rs"]
mod tests;
