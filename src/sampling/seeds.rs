//! Seed point sampling inside a boundary.
//!
//! Rejection sampling from the boundary's bounding box, driven by a
//! `ChaCha8Rng` so a given random seed reproduces bit-identical output on
//! every platform.

use crate::bounds::Aabb2;
use crate::polygon::{distance_to_ring, polygon_contains};
use crate::primitives::{Circle2, Point2};
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Candidate draws allowed per requested seed.
const ATTEMPTS_PER_SEED: usize = 100;

/// Bounding boxes narrower than this in either axis yield no seeds.
const MIN_EXTENT: f64 = 1e-6;

/// Density-gradient influence reaches this many times the largest radius.
const INFLUENCE_FACTOR: f64 = 3.0;

/// Acceptance probability far away from every exclusion circle.
const BASE_ACCEPTANCE: f64 = 0.5;

/// Generates up to `target_count` seeds inside `boundary`.
///
/// A candidate is accepted only if it lies inside the boundary, at least
/// `edge_margin` away from every boundary edge, outside every exclusion
/// circle and outside every exclusion polygon. With `density_gradient` and
/// at least one circle, candidates are further thinned by
/// [`density_acceptance`], packing seeds more densely around the circles.
///
/// Gives up after `100 * target_count` draws and returns what was accepted,
/// which may be empty. Degenerate boundaries yield an empty vector.
///
/// # Example
///
/// ```
/// use lightweb::sampling::generate_seeds;
/// use lightweb::Point2;
///
/// let plate = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(100.0, 0.0),
///     Point2::new(100.0, 60.0),
///     Point2::new(0.0, 60.0),
/// ];
///
/// let a = generate_seeds(&plate, 20, 5.0, &[], &[], false, 7);
/// let b = generate_seeds(&plate, 20, 5.0, &[], &[], false, 7);
/// assert_eq!(a.len(), 20);
/// assert_eq!(a, b);
/// ```
pub fn generate_seeds<F: Float>(
    boundary: &[Point2<F>],
    target_count: usize,
    edge_margin: F,
    exclusion_circles: &[Circle2<F>],
    exclusion_polygons: &[Vec<Point2<F>>],
    density_gradient: bool,
    seed: u64,
) -> Vec<Point2<F>> {
    SeedSampler::new(boundary)
        .edge_margin(edge_margin)
        .exclusion_circles(exclusion_circles)
        .exclusion_polygons(exclusion_polygons)
        .density_gradient(density_gradient)
        .generate(target_count, seed)
}

/// Probability of keeping a candidate under the density gradient.
///
/// 1.0 at or inside the rim of the nearest circle, falling linearly to 0.5
/// at three times the largest circle radius from the rim, and 0.5 beyond.
/// Without circles (or with only zero-size ones) every point is kept.
pub fn density_acceptance<F: Float>(point: Point2<F>, circles: &[Circle2<F>]) -> F {
    let max_radius = circles
        .iter()
        .map(|c| c.radius)
        .fold(F::zero(), |a, b| a.max(b));

    let influence = max_radius * F::from(INFLUENCE_FACTOR).unwrap();
    if influence < F::from(MIN_EXTENT).unwrap() {
        return F::one();
    }

    let nearest = circles
        .iter()
        .map(|c| c.distance_to_rim(point))
        .fold(F::infinity(), |a, b| a.min(b));

    let base = F::from(BASE_ACCEPTANCE).unwrap();
    if nearest <= F::zero() {
        F::one()
    } else if nearest >= influence {
        base
    } else {
        F::one() - (F::one() - base) * (nearest / influence)
    }
}

/// Configurable rejection sampler for seed points.
///
/// [`generate_seeds`] is a one-call wrapper around this type.
#[derive(Debug, Clone)]
pub struct SeedSampler<'a, F> {
    boundary: &'a [Point2<F>],
    edge_margin: F,
    exclusion_circles: &'a [Circle2<F>],
    exclusion_polygons: &'a [Vec<Point2<F>>],
    density_gradient: bool,
}

impl<'a, F: Float> SeedSampler<'a, F> {
    /// Creates a sampler with no margin, no exclusions and no gradient.
    pub fn new(boundary: &'a [Point2<F>]) -> Self {
        Self {
            boundary,
            edge_margin: F::zero(),
            exclusion_circles: &[],
            exclusion_polygons: &[],
            density_gradient: false,
        }
    }

    pub fn edge_margin(mut self, margin: F) -> Self {
        self.edge_margin = margin;
        self
    }

    pub fn exclusion_circles(mut self, circles: &'a [Circle2<F>]) -> Self {
        self.exclusion_circles = circles;
        self
    }

    pub fn exclusion_polygons(mut self, polygons: &'a [Vec<Point2<F>>]) -> Self {
        self.exclusion_polygons = polygons;
        self
    }

    pub fn density_gradient(mut self, enabled: bool) -> Self {
        self.density_gradient = enabled;
        self
    }

    /// Whether `p` satisfies every hard placement constraint.
    pub fn accepts(&self, p: Point2<F>) -> bool {
        polygon_contains(self.boundary, p)
            && distance_to_ring(self.boundary, p) >= self.edge_margin
            && !self.exclusion_circles.iter().any(|c| c.contains(p))
            && !self
                .exclusion_polygons
                .iter()
                .any(|poly| polygon_contains(poly, p))
    }

    /// Draws seeds with a PRNG keyed by `seed`.
    pub fn generate(&self, target_count: usize, seed: u64) -> Vec<Point2<F>> {
        if self.boundary.len() < 3 || target_count == 0 {
            return Vec::new();
        }

        let Some(bbox) = Aabb2::from_points(self.boundary.iter().copied()) else {
            return Vec::new();
        };
        let min_extent = F::from(MIN_EXTENT).unwrap();
        if bbox.width() < min_extent || bbox.height() < min_extent {
            return Vec::new();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let use_gradient = self.density_gradient && !self.exclusion_circles.is_empty();
        let max_attempts = target_count.saturating_mul(ATTEMPTS_PER_SEED);

        let mut seeds = Vec::with_capacity(target_count);
        let mut attempts = 0;
        while seeds.len() < target_count && attempts < max_attempts {
            attempts += 1;

            let p = random_point_in(&mut rng, bbox);
            if !self.accepts(p) {
                continue;
            }

            if use_gradient {
                let u = F::from(rng.gen::<f64>()).unwrap();
                if u > density_acceptance(p, self.exclusion_circles) {
                    continue;
                }
            }

            seeds.push(p);
        }

        tracing::debug!(
            accepted = seeds.len(),
            requested = target_count,
            attempts,
            "seed sampling finished"
        );
        seeds
    }
}

/// Uniform point in `bbox`; x is drawn before y.
fn random_point_in<F: Float, R: Rng>(rng: &mut R, bbox: Aabb2<F>) -> Point2<F> {
    let u = F::from(rng.gen::<f64>()).unwrap();
    let v = F::from(rng.gen::<f64>()).unwrap();
    Point2::new(
        bbox.min.x + u * bbox.width(),
        bbox.min.y + v * bbox.height(),
    )
}
