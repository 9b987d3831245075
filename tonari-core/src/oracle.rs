//! Quadratic reference implementation used to validate the grid algorithm.
//!
//! Compares every pair of points, builds an explicit adjacency list, and
//! collects components with a breadth-first traversal. Only compiled for
//! tests and under the `oracle` feature.

use std::collections::VecDeque;

use crate::{point::Point, result::ComponentSizes};

/// Computes component sizes by comparing all `n(n-1)/2` point pairs.
///
/// Uses the same [`Point::is_within`] predicate as the grid algorithm.
///
/// # Examples
/// ```
/// # #[cfg(feature = "oracle")]
/// # fn main() {
/// use tonari_core::{Point, brute_force_component_sizes};
///
/// let points = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(9.0, 9.0)];
/// let sizes = brute_force_component_sizes(1.0, &points);
/// assert_eq!(sizes.as_slice(), &[2, 1]);
/// # }
/// # #[cfg(not(feature = "oracle"))]
/// # fn main() {}
/// ```
#[must_use]
pub fn brute_force_component_sizes(threshold: f64, points: &[Point]) -> ComponentSizes {
    let adjacency = adjacency_list(threshold, points);
    let mut visited = vec![false; points.len()];
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..points.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut size = 0;
        while let Some(current) = queue.pop_front() {
            size += 1;
            for &neighbour in &adjacency[current] {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }
        sizes.push(size);
    }

    ComponentSizes::from_unsorted(sizes)
}

fn adjacency_list(threshold: f64, points: &[Point]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); points.len()];
    for (i, left) in points.iter().enumerate() {
        for (offset, right) in points[i + 1..].iter().enumerate() {
            if left.is_within(right, threshold) {
                let j = i + 1 + offset;
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }
    }
    adjacency
}
