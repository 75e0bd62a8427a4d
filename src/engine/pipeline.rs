use rayon::prelude::*;

use crate::{
    beta::resolver::BetaOverlapResolver,
    engine::context::EngineContext,
    foundation::config::EngineConfig,
    foundation::error::{PictographError, PictographResult},
    mirror::resolve_mirroring,
    model::{
        pictograph::{BeatData, PictographData},
        types::PropArrangement,
    },
    placement::calculator::{ArrowPlacementCalculator, place_props},
    validation::validator::MotionValidator,
};

/// Turns beats into fully positioned pictographs.
///
/// Phase 1 places each arrow on its own, sets the mirror flags and drops the props
/// on their hand points. Phase 2 needs both phase 1 results and pushes colliding
/// beta props apart.
#[derive(Debug)]
pub struct PictographEngine {
    ctx: EngineContext,
}

impl PictographEngine {
    pub fn new(ctx: EngineContext) -> Self {
        Self { ctx }
    }

    pub fn from_config(config: EngineConfig) -> PictographResult<Self> {
        Ok(Self::new(EngineContext::from_config(config)?))
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn validator(&self) -> &MotionValidator {
        self.ctx.validator()
    }

    pub fn placement_calculator(&self) -> ArrowPlacementCalculator<'_> {
        ArrowPlacementCalculator::new(self.ctx.adjustments())
    }

    pub fn beta_resolver(&self) -> BetaOverlapResolver<'_> {
        BetaOverlapResolver::new(self.ctx.letter_classifier(), self.ctx.swap_policy())
    }

    /// Independent per-arrow work: positions, mirror flags, prop hand points.
    pub fn place(&self, pictograph: &PictographData) -> PictographData {
        let placed = self
            .placement_calculator()
            .calculate_all_arrow_positions(pictograph);
        let mirrored = resolve_mirroring(&placed);
        place_props(&mirrored)
    }

    /// Pairwise work over an already placed pictograph.
    pub fn resolve_overlaps(&self, pictograph: &PictographData) -> PictographData {
        self.beta_resolver().resolve(pictograph)
    }

    pub fn compute_pictograph(&self, pictograph: &PictographData) -> PictographData {
        self.resolve_overlaps(&self.place(pictograph))
    }

    /// Build a pictograph from `beat` with the configured prop type and run both phases.
    pub fn compute(&self, beat: &BeatData) -> PictographData {
        let pictograph = PictographData::from_beat(beat, &self.ctx.config().prop_type);
        self.compute_pictograph(&pictograph)
    }

    /// Like [`compute`](Self::compute) with a caller-supplied arrangement instead of
    /// the one derived from the end locations.
    pub fn compute_with_arrangement(
        &self,
        beat: &BeatData,
        arrangement: PropArrangement,
    ) -> PictographData {
        let pictograph = PictographData::from_beat(beat, &self.ctx.config().prop_type)
            .with_arrangement(arrangement);
        self.compute_pictograph(&pictograph)
    }

    /// Whether `beat` under the given position tags is a row of the reference dataset.
    pub fn is_valid_beat(&self, beat: &BeatData, start_pos: &str, end_pos: &str) -> bool {
        self.ctx.validator().validate_motion_position_combination(
            &beat.letter,
            start_pos,
            end_pos,
            &beat.blue_motion.motion_type.to_string(),
            &beat.red_motion.motion_type.to_string(),
        )
    }

    /// Compute every beat in parallel; output order matches input order.
    #[tracing::instrument(skip(self, beats), fields(beats = beats.len()))]
    pub fn compute_batch(&self, beats: &[BeatData]) -> PictographResult<Vec<PictographData>> {
        if beats.is_empty() {
            return Ok(Vec::new());
        }
        let pool = build_thread_pool(self.ctx.config().threads)?;
        let out = pool.install(|| {
            beats
                .par_iter()
                .map(|beat| self.compute(beat))
                .collect::<Vec<_>>()
        });
        tracing::debug!(computed = out.len(), "batch complete");
        Ok(out)
    }
}

fn build_thread_pool(threads: Option<usize>) -> PictographResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PictographError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PictographError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pipeline.rs"]
mod tests;
