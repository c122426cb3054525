use crate::{
    analysis::dynamics::to_volume_index,
    foundation::{
        core::LoopSpec,
        error::{LoopscanError, LoopscanResult},
        matrix::Matrix,
    },
};

/// Outcome of the loop search.
///
/// "No usable loop" is a first-class result, not an error and not a
/// degenerate numeric pair: callers must be able to tell it apart from a
/// genuine short loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoopSelection {
    /// A loop whose score strictly beat the zero baseline.
    Found {
        /// Selected loop range, in original-volume indices.
        spec: LoopSpec,
        /// The winning `alpha * (end - start) - cost` score.
        score: f64,
    },
    /// No pair scored above zero; the clip has no usable loop.
    NoLoop,
}

impl LoopSelection {
    /// The selected loop range, if one was found.
    pub fn spec(&self) -> Option<LoopSpec> {
        match *self {
            Self::Found { spec, .. } => Some(spec),
            Self::NoLoop => None,
        }
    }
}

/// Search the transition-cost matrix for the best length-vs-smoothness loop.
///
/// Over every pair `(i, j)` in trimmed index space the objective is
/// `alpha * (j - i) - costs[j, i]`; the swapped read is intentional, since
/// the transition under test jumps from end frame `j` back to start frame
/// `i` while `(i, j)` is reported in forward playback order. The scan order
/// is fixed (`i` outer, `j` inner, strict improvement only) so equal-scoring
/// pairs resolve identically on every run. The running best starts at score
/// 0 with no pair, so only a strictly positive score is ever reported;
/// winners are corrected back to original-volume indices with
/// [`to_volume_index`].
///
/// A best-scoring pair with `j < i` would be a backward jump, never a usable
/// loop, and is reported as [`LoopSelection::NoLoop`]; with the pipeline's
/// non-negative costs such a pair cannot win in the first place.
///
/// Fails with [`LoopscanError::Validation`] when `alpha` is negative or
/// non-finite, or when `costs` is not square.
pub fn select_loop(costs: &Matrix, alpha: f64) -> LoopscanResult<LoopSelection> {
    validate_alpha(alpha)?;
    let m = costs.rows();
    if costs.cols() != m {
        return Err(LoopscanError::validation(format!(
            "transition-cost matrix must be square, got {m}x{}",
            costs.cols(),
        )));
    }

    let mut best_score = 0.0;
    let mut best: Option<(usize, usize)> = None;
    for i in 0..m {
        for j in 0..m {
            let score = alpha * (j as f64 - i as f64) - costs.at(j, i);
            if score > best_score {
                best_score = score;
                best = Some((i, j));
            }
        }
    }

    match best {
        Some((i, j)) if i <= j => Ok(LoopSelection::Found {
            spec: LoopSpec::new(to_volume_index(i), to_volume_index(j))?,
            score: best_score,
        }),
        _ => Ok(LoopSelection::NoLoop),
    }
}

/// Reject a negative or non-finite alpha.
///
/// Shared with the pipeline driver so a bad parameter fails before the
/// expensive similarity stage runs.
pub(crate) fn validate_alpha(alpha: f64) -> LoopscanResult<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(LoopscanError::validation(format!(
            "alpha must be a finite non-negative number, got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/select.rs"]
mod tests;
