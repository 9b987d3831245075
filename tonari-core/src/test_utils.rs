//! Shared test utilities for `tonari-core`.

use proptest::test_runner::Config as ProptestConfig;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;
use tonari_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::point::Point;

/// Largest point count generated for oracle comparisons.
pub(crate) const MAX_POINTS: usize = 200;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Spatial arrangement of a generated point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum Layout {
    /// Points sampled uniformly in a square.
    #[weight(3)]
    Uniform,
    /// Points scattered around a handful of centres.
    #[weight(3)]
    Clustered,
    /// Jittered lattice with spacing close to the threshold.
    #[weight(2)]
    Lattice,
    /// Few distinct locations, each repeated several times.
    #[weight(1)]
    Duplicates,
}

/// Generated threshold and points.
#[derive(Clone, Debug)]
pub(crate) struct PointCloud {
    pub(crate) threshold: f64,
    pub(crate) points: Vec<Point>,
}

/// Generates a reproducible point cloud of at most [`MAX_POINTS`] points.
pub(crate) fn generate_cloud(layout: Layout, seed: u64) -> PointCloud {
    let mut rng = SmallRng::seed_from_u64(seed);
    let count = rng.gen_range(0..=MAX_POINTS);
    let threshold = rng.gen_range(0.05..5.0);
    let points = match layout {
        Layout::Uniform => {
            let extent = rng.gen_range(1.0..60.0);
            (0..count).map(|_| uniform_point(&mut rng, extent)).collect()
        }
        Layout::Clustered => clustered(&mut rng, count, threshold),
        Layout::Lattice => lattice(&mut rng, count, threshold),
        Layout::Duplicates => duplicates(&mut rng, count),
    };
    PointCloud { threshold, points }
}

fn uniform_point(rng: &mut SmallRng, extent: f64) -> Point {
    Point::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent))
}

fn clustered(rng: &mut SmallRng, count: usize, threshold: f64) -> Vec<Point> {
    let centres: Vec<Point> = (0..rng.gen_range(1..=6))
        .map(|_| uniform_point(rng, 40.0))
        .collect();
    let spread = threshold * rng.gen_range(0.5..4.0);
    (0..count)
        .map(|_| {
            let centre = centres[rng.gen_range(0..centres.len())];
            Point::new(
                centre.x() + rng.gen_range(-spread..spread),
                centre.y() + rng.gen_range(-spread..spread),
            )
        })
        .collect()
}

fn lattice(rng: &mut SmallRng, count: usize, threshold: f64) -> Vec<Point> {
    let spacing = threshold * rng.gen_range(0.6..1.4);
    let jitter = threshold * 0.05;
    let width = (count as f64).sqrt().ceil().max(1.0) as usize;
    (0..count)
        .map(|index| {
            let column = (index % width) as f64;
            let row = (index / width) as f64;
            Point::new(
                column * spacing + rng.gen_range(-jitter..=jitter),
                row * spacing + rng.gen_range(-jitter..=jitter),
            )
        })
        .collect()
}

fn duplicates(rng: &mut SmallRng, count: usize) -> Vec<Point> {
    let sites: Vec<Point> = (0..rng.gen_range(1..=8))
        .map(|_| uniform_point(rng, 10.0))
        .collect();
    (0..count)
        .map(|_| sites[rng.gen_range(0..sites.len())])
        .collect()
}
