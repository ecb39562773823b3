use crate::config::Float;

/// A point on the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    x: Float,
    y: Float,
}

impl City {
    pub const fn new(x: Float, y: Float) -> City {
        City { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(c1: City, c2: City) -> Float {
        let dx = c2.x - c1.x;
        let dy = c2.y - c1.y;

        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert_eq!(City::distance(a, b), 5.0);
        assert_eq!(City::distance(b, a), 5.0);
        assert_eq!(City::distance(a, a), 0.0);
    }

    #[test]
    fn nan_coordinates_are_not_finite() {
        assert!(City::new(1.0, -2.5).is_finite());
        assert!(!City::new(Float::NAN, 0.0).is_finite());
        assert!(!City::new(0.0, Float::INFINITY).is_finite());
    }
}
