//! Short-edge cleanup for closed rings.
//!
//! Clipping against a boundary or hole often leaves a tiny edge that splits
//! one visual corner into two vertices. Filleting such a pair produces two
//! cramped arcs; merging the pair first restores a single corner.

use crate::primitives::Point2;
use num_traits::Float;

/// Removes the second vertex of every edge shorter than `min_edge_len`.
///
/// Repeats until no edge is shorter or only 3 vertices remain. The closing
/// edge is considered as well.
///
/// # Example
///
/// ```
/// use lightweb::polygon::merge_short_edges;
/// use lightweb::Point2;
///
/// let ring = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 0.05), // splits the corner at (10, 0)
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
///
/// let merged = merge_short_edges(&ring, 0.5);
/// assert_eq!(merged.len(), 4);
/// ```
pub fn merge_short_edges<F: Float>(vertices: &[Point2<F>], min_edge_len: F) -> Vec<Point2<F>> {
    let indices = merge_short_edges_indices(vertices, min_edge_len);
    indices.iter().map(|&i| vertices[i]).collect()
}

/// Returns indices of the vertices kept by [`merge_short_edges`].
pub fn merge_short_edges_indices<F: Float>(vertices: &[Point2<F>], min_edge_len: F) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..vertices.len()).collect();
    let min_sq = min_edge_len * min_edge_len;

    loop {
        let n = indices.len();
        if n <= 3 {
            break;
        }

        let mut keep = vec![true; n];
        let mut remaining = n;
        for i in 0..n {
            if !keep[i] {
                continue;
            }
            let j = (i + 1) % n;
            if !keep[j] || remaining <= 3 {
                continue;
            }
            if vertices[indices[i]].distance_squared(vertices[indices[j]]) < min_sq {
                keep[j] = false;
                remaining -= 1;
            }
        }

        if remaining == n {
            break;
        }

        indices = indices
            .into_iter()
            .zip(keep)
            .filter_map(|(idx, k)| k.then_some(idx))
            .collect();
    }

    indices
}
