//! End-to-end pattern generation.
//!
//! Seeds are sampled, turned into boundary-closed Voronoi cells, and every
//! cell is pushed through clip, offset and fillet stages independently. A
//! cell that degenerates at any stage is skipped, never reported as an
//! error.

use super::config::PatternConfig;
use crate::bounds::Aabb2;
use crate::error::{PatternError, Result};
use crate::polygon::{
    clip_outside, clip_to_boundary, clip_to_rect, merge_short_edges, polygon_area, round_corners,
    PathSegment, Polygon,
};
use crate::primitives::{Circle2, Point2};
use crate::sampling::SeedSampler;
use crate::triangulation::compute_voronoi;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation is checked before the first cell and then every this many
/// cells.
const CANCEL_POLL_INTERVAL: usize = 4;

/// Exclusion circles are cut as regular polygons with this many sides.
const CIRCLE_SEGMENTS: usize = 32;

/// The plate area a pattern is generated in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternRegion {
    /// Outer outline, any winding.
    pub boundary: Vec<Point2<f64>>,
    /// Round holes to keep clear of; grown by the edge margin when cutting.
    pub exclusion_circles: Vec<Circle2<f64>>,
    /// Arbitrary keep-out outlines, already expanded by the caller.
    pub exclusion_polygons: Vec<Vec<Point2<f64>>>,
}

impl PatternRegion {
    pub fn new(boundary: Vec<Point2<f64>>) -> Self {
        Self {
            boundary,
            ..Self::default()
        }
    }

    pub fn with_circle(mut self, circle: Circle2<f64>) -> Self {
        self.exclusion_circles.push(circle);
        self
    }

    pub fn with_polygon(mut self, polygon: Vec<Point2<f64>>) -> Self {
        self.exclusion_polygons.push(polygon);
        self
    }
}

/// One finished hole.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCell {
    /// Index of the seed this cell grew from.
    pub seed_index: usize,
    pub seed: Point2<f64>,
    /// Final outline after clipping, offsetting and short-edge cleanup.
    pub polygon: Polygon<f64>,
    /// Outline as drawable segments: filleted when a corner radius is set,
    /// plain edges otherwise.
    pub segments: Vec<PathSegment<f64>>,
}

/// A generated set of holes, ordered by seed index.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub seeds: Vec<Point2<f64>>,
    pub cells: Vec<PatternCell>,
}

impl Pattern {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Material removed by all holes, ignoring fillets.
    pub fn removed_area(&self) -> f64 {
        self.cells.iter().map(|c| c.polygon.area()).sum()
    }
}

/// Result of a generation run that was not an error.
///
/// The empty outcomes are distinct so a caller can tell "nothing fit" apart
/// from "everything was filtered away".
#[derive(Debug, Clone, PartialEq)]
pub enum PatternOutcome {
    /// The sampler could not place a single seed.
    NoSeeds,
    /// Seeds were placed but every cell was skipped.
    NoCells { seeds: usize },
    Cells(Pattern),
}

impl PatternOutcome {
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            PatternOutcome::Cells(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_pattern(self) -> Option<Pattern> {
        match self {
            PatternOutcome::Cells(p) => Some(p),
            _ => None,
        }
    }
}

/// Receives per-cell progress and may stop the run.
pub trait Progress {
    /// Called after each cell with the number of cells handled so far.
    fn report(&mut self, processed: usize, total: usize);

    /// Polled between cells; returning `true` aborts with
    /// [`PatternError::Cancelled`].
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Progress for () {
    #[inline]
    fn report(&mut self, _processed: usize, _total: usize) {}
}

impl<T: FnMut(usize, usize)> Progress for T {
    #[inline]
    fn report(&mut self, processed: usize, total: usize) {
        self(processed, total)
    }
}

/// Shareable cancellation switch.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// and cancelled from there.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Progress for CancelFlag {
    #[inline]
    fn report(&mut self, _processed: usize, _total: usize) {}

    #[inline]
    fn is_cancelled(&self) -> bool {
        CancelFlag::is_cancelled(self)
    }
}

/// Why a cell was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    NoVoronoiCell,
    ClipRectEmpty,
    OutsideClipRect,
    OutsideBoundary,
    InsideExclusion,
    OffsetCollapsed,
    TooSmall,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NoVoronoiCell => "no voronoi cell",
            SkipReason::ClipRectEmpty => "margin leaves no clip rectangle",
            SkipReason::OutsideClipRect => "outside clip rectangle",
            SkipReason::OutsideBoundary => "outside boundary",
            SkipReason::InsideExclusion => "inside exclusion",
            SkipReason::OffsetCollapsed => "offset collapsed",
            SkipReason::TooSmall => "below minimum area",
        };
        f.write_str(s)
    }
}

/// Everything a cell needs, shared read-only across cells.
struct CellContext<'a> {
    config: &'a PatternConfig,
    boundary: &'a [Point2<f64>],
    clip_rect: Option<Aabb2<f64>>,
    holes: Vec<Vec<Point2<f64>>>,
}

/// Seeds and raw cells ready for the per-cell stages.
struct Prepared<'a> {
    seeds: Vec<Point2<f64>>,
    cells: Vec<Option<Polygon<f64>>>,
    context: CellContext<'a>,
}

/// Drives the whole pipeline for one configuration.
///
/// # Example
///
/// ```
/// use lightweb::pattern::{PatternConfigBuilder, PatternGenerator, PatternRegion};
/// use lightweb::Point2;
///
/// let region = PatternRegion::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(120.0, 0.0),
///     Point2::new(120.0, 80.0),
///     Point2::new(0.0, 80.0),
/// ]);
/// let config = PatternConfigBuilder::new()
///     .seed_count(25)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let outcome = PatternGenerator::new(config)
///     .generate(&region, &mut ())
///     .unwrap();
/// let pattern = outcome.pattern().unwrap();
/// assert!(!pattern.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PatternGenerator {
    config: PatternConfig,
}

impl PatternGenerator {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Generates a pattern, reporting progress after every cell.
    ///
    /// # Errors
    ///
    /// - `InvalidBoundary` if the boundary has fewer than 3 points.
    /// - `Cancelled` if `progress` asked to stop; nothing partial is returned.
    pub fn generate<P>(&self, region: &PatternRegion, progress: &mut P) -> Result<PatternOutcome>
    where
        P: Progress + ?Sized,
    {
        let prepared = match self.prepare(region)? {
            Ok(prepared) => prepared,
            Err(outcome) => return Ok(outcome),
        };
        let Prepared {
            seeds,
            cells,
            context,
        } = prepared;

        let total = cells.len();
        let mut survivors = Vec::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if index % CANCEL_POLL_INTERVAL == 0 && progress.is_cancelled() {
                tracing::debug!(processed = index, total, "pattern generation cancelled");
                return Err(PatternError::Cancelled {
                    processed: index,
                    total,
                });
            }

            if let Some(done) = context.finish_cell(index, seeds[index], cell) {
                survivors.push(done);
            }
            progress.report(index + 1, total);
        }

        Ok(collect_outcome(seeds, survivors))
    }

    /// Generates a pattern with cells processed on the rayon thread pool.
    ///
    /// Output order and content match [`PatternGenerator::generate`]. The
    /// flag is polled before each cell.
    ///
    /// # Errors
    ///
    /// Same as [`PatternGenerator::generate`].
    #[cfg(feature = "rayon")]
    pub fn generate_parallel(
        &self,
        region: &PatternRegion,
        cancel: &CancelFlag,
    ) -> Result<PatternOutcome> {
        use rayon::prelude::*;

        let prepared = match self.prepare(region)? {
            Ok(prepared) => prepared,
            Err(outcome) => return Ok(outcome),
        };
        let Prepared {
            seeds,
            cells,
            context,
        } = prepared;

        let total = cells.len();
        let results: Vec<Option<Option<PatternCell>>> = cells
            .into_par_iter()
            .enumerate()
            .map(|(index, cell)| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(context.finish_cell(index, seeds[index], cell))
            })
            .collect();

        if cancel.is_cancelled() {
            let processed = results.iter().filter(|r| r.is_some()).count();
            tracing::debug!(processed, total, "pattern generation cancelled");
            return Err(PatternError::Cancelled { processed, total });
        }

        let survivors = results.into_iter().flatten().flatten().collect();
        Ok(collect_outcome(seeds, survivors))
    }

    /// Validates the region, samples seeds and builds raw cells.
    ///
    /// The inner `Err` carries an early, non-error outcome.
    fn prepare<'a>(
        &'a self,
        region: &'a PatternRegion,
    ) -> Result<std::result::Result<Prepared<'a>, PatternOutcome>> {
        let boundary = region.boundary.as_slice();
        let invalid = PatternError::InvalidBoundary {
            vertices: boundary.len(),
        };
        if boundary.len() < 3 {
            return Err(invalid);
        }
        let bbox = Aabb2::from_points(boundary.iter().copied()).ok_or(invalid)?;

        let config = &self.config;
        let seeds = SeedSampler::new(boundary)
            .edge_margin(config.edge_margin)
            .exclusion_circles(&region.exclusion_circles)
            .exclusion_polygons(&region.exclusion_polygons)
            .density_gradient(config.density_gradient)
            .generate(config.seed_count, config.random_seed);

        tracing::debug!(
            requested = config.seed_count,
            placed = seeds.len(),
            "seeds generated"
        );
        if seeds.is_empty() {
            return Ok(Err(PatternOutcome::NoSeeds));
        }

        let cells = compute_voronoi(&seeds, bbox, Some(boundary));

        let clip_rect = bbox.inset(config.edge_margin);
        if clip_rect.is_none() {
            tracing::debug!(
                margin = config.edge_margin,
                "edge margin leaves no clip rectangle"
            );
        }

        let holes = region
            .exclusion_polygons
            .iter()
            .filter(|p| p.len() >= 3)
            .cloned()
            .chain(
                region
                    .exclusion_circles
                    .iter()
                    .map(|c| c.grown(config.edge_margin).to_polygon(CIRCLE_SEGMENTS)),
            )
            .collect();

        Ok(Ok(Prepared {
            seeds,
            cells,
            context: CellContext {
                config,
                boundary,
                clip_rect,
                holes,
            },
        }))
    }
}

impl CellContext<'_> {
    /// Runs one cell through every stage and logs why it was dropped.
    fn finish_cell(
        &self,
        seed_index: usize,
        seed: Point2<f64>,
        cell: Option<Polygon<f64>>,
    ) -> Option<PatternCell> {
        match self.process(seed_index, seed, cell) {
            Ok(done) => Some(done),
            Err(reason) => {
                tracing::trace!(seed_index, %reason, "cell skipped");
                None
            }
        }
    }

    fn process(
        &self,
        seed_index: usize,
        seed: Point2<f64>,
        cell: Option<Polygon<f64>>,
    ) -> std::result::Result<PatternCell, SkipReason> {
        let cell = cell.ok_or(SkipReason::NoVoronoiCell)?;
        let rect = self.clip_rect.ok_or(SkipReason::ClipRectEmpty)?;

        let ring = clip_to_rect(cell.as_slice(), rect);
        if ring.len() < 3 {
            return Err(SkipReason::OutsideClipRect);
        }

        let mut ring = clip_to_boundary(&ring, self.boundary);
        if ring.len() < 3 {
            return Err(SkipReason::OutsideBoundary);
        }

        for hole in &self.holes {
            ring = clip_outside(&ring, hole);
            if ring.len() < 3 {
                return Err(SkipReason::InsideExclusion);
            }
        }

        let config = self.config;
        let shrunk = config
            .offset_strategy
            .apply(&ring, config.half_rib())
            .ok_or(SkipReason::OffsetCollapsed)?;
        if polygon_area(&shrunk) < config.min_cell_area {
            return Err(SkipReason::TooSmall);
        }

        let radius = config.corner_radius;
        let outline = if radius > 0.0 {
            merge_short_edges(&shrunk, radius * 0.5)
        } else {
            shrunk
        };
        let segments = round_corners(&outline, radius);

        Ok(PatternCell {
            seed_index,
            seed,
            polygon: Polygon::new(outline),
            segments,
        })
    }
}

fn collect_outcome(seeds: Vec<Point2<f64>>, cells: Vec<PatternCell>) -> PatternOutcome {
    tracing::debug!(seeds = seeds.len(), cells = cells.len(), "pattern finished");
    if cells.is_empty() {
        PatternOutcome::NoCells { seeds: seeds.len() }
    } else {
        PatternOutcome::Cells(Pattern { seeds, cells })
    }
}
