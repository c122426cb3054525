use crate::{
    analysis::{
        dynamics::transition_costs,
        select::{LoopSelection, select_loop, validate_alpha},
        similarity::{similarity_matrix, similarity_matrix_parallel},
    },
    foundation::{
        core::VideoVolume,
        error::{LoopscanError, LoopscanResult},
    },
};

/// Threading policy for the pairwise similarity stage.
///
/// The default is fully serial; parallelism is an opt-in implementation
/// detail that does not change results (the parallel path is bit-identical
/// to the serial one).
#[derive(Clone, Debug)]
pub struct AnalysisThreading {
    /// Score frame pairs on a rayon thread pool.
    pub parallel: bool,
    /// Thread count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for AnalysisThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Work counters reported alongside a loop search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisStats {
    /// Frames in the input volume.
    pub frames_total: usize,
    /// Unordered frame pairs scored by the similarity stage.
    pub pairs_scored: usize,
    /// Candidate (start, end) pairs scanned by the selector.
    pub candidates: usize,
}

/// Run the full analysis pipeline: similarity, dynamics smoothing, selection.
///
/// This is the primary one-shot API for finding a loop in a [`VideoVolume`].
pub fn find_loop(volume: &VideoVolume, alpha: f64) -> LoopscanResult<LoopSelection> {
    find_loop_with_stats(volume, alpha, &AnalysisThreading::default()).map(|(sel, _)| sel)
}

/// [`find_loop`] with an explicit threading policy and work counters.
#[tracing::instrument(skip(volume), fields(frames = volume.num_frames()))]
pub fn find_loop_with_stats(
    volume: &VideoVolume,
    alpha: f64,
    threading: &AnalysisThreading,
) -> LoopscanResult<(LoopSelection, AnalysisStats)> {
    validate_alpha(alpha)?;
    let n = volume.num_frames();

    let similarity = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| similarity_matrix_parallel(volume))
    } else {
        similarity_matrix(volume)
    };

    let costs = transition_costs(&similarity)?;
    let selection = select_loop(&costs, alpha)?;
    tracing::debug!(?selection, "loop search finished");

    let stats = AnalysisStats {
        frames_total: n,
        pairs_scored: n * n.saturating_sub(1) / 2,
        candidates: costs.rows() * costs.cols(),
    };
    Ok((selection, stats))
}

fn build_thread_pool(threads: Option<usize>) -> LoopscanResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(t) = threads {
        builder = builder.num_threads(t);
    }
    builder
        .build()
        .map_err(|e| LoopscanError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
