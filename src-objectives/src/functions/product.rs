//! Product test function

use crate::point::Point;

/// Product function: f(x, y) = x * y
///
/// Saddle-shaped; on a square [-a, a]^2 the global minimum is -a^2,
/// reached at the two anti-diagonal corners (a, -a) and (-a, a).
pub fn product(p: &Point) -> f64 {
    p.x * p.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_known_values() {
        assert_eq!(product(&Point::new(0.0, 3.0)), 0.0);
        assert_eq!(product(&Point::new(2.0, 3.0)), 6.0);
        assert_eq!(product(&Point::new(5.0, -5.0)), -25.0);
        assert_eq!(product(&Point::new(-5.0, 5.0)), -25.0);
    }
}
