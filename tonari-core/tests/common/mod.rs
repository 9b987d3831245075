use tonari_core::Point;

/// Converts coordinate pairs into points in the given order.
#[must_use]
pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Two well-separated pairs that form two components at threshold 2.
pub const TWO_PAIRS: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (5.0, 5.0), (5.0, 6.0)];
