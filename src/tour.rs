use crate::{config::Float, distance_matrix::DistanceMatrix, index::CityIndex};
use std::{
    fmt::{self, Display},
    ops::Deref,
    slice::Windows,
};

/// A finished tour together with its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    cities: Vec<CityIndex>,
    tour_length: Float,
}

impl Tour {
    pub const PLACEHOLDER: Tour = Tour {
        cities: Vec::new(),
        tour_length: Float::INFINITY,
    };

    pub fn length(&self) -> Float {
        self.tour_length
    }

    pub fn cities(&self) -> &[CityIndex] {
        &self.cities
    }

    pub fn from_cities(cities: Vec<CityIndex>, distances: &DistanceMatrix) -> Tour {
        let tour_length = cities.calculate_tour_length(distances);

        Tour {
            cities,
            tour_length,
        }
    }

    pub fn is_shorter_than(&self, other: &Tour) -> bool {
        self.tour_length < other.tour_length
    }
}

impl Deref for Tour {
    type Target = [CityIndex];

    fn deref(&self) -> &Self::Target {
        self.cities()
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, city) in self.cities.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{city}")?;
        }
        f.write_str("]")
    }
}

pub trait TourFunctions {
    /// Length of the open path through the cities: there is no path from the last
    /// city back to the first.
    fn calculate_tour_length(&self, distances: &DistanceMatrix) -> Float;

    // Returns iterator over all paths, first -> last excluded.
    fn paths(&self) -> Windows<CityIndex>;

    /// True if every city in `0..city_count` appears exactly once.
    fn is_permutation(&self, city_count: usize) -> bool;
}

impl TourFunctions for [CityIndex] {
    fn calculate_tour_length(&self, distances: &DistanceMatrix) -> Float {
        self.paths()
            .fold(0.0, |length, pair| length + distances[(pair[0], pair[1])])
    }

    fn paths(&self) -> Windows<CityIndex> {
        self.windows(2)
    }

    fn is_permutation(&self, city_count: usize) -> bool {
        if self.len() != city_count {
            return false;
        }
        let mut seen = vec![false; city_count];
        for &city in self {
            let idx = usize::from(city);
            if idx >= city_count || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    fn cities(indices: &[usize]) -> Vec<CityIndex> {
        indices.iter().copied().map(CityIndex::new).collect()
    }

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ])
    }

    #[test]
    fn length_is_an_open_path() {
        let distances = square();
        let tour = cities(&[0, 1, 2, 3]);
        assert_eq!(tour.calculate_tour_length(&distances), 3.0);

        let diagonal = cities(&[0, 2]);
        assert_eq!(diagonal.calculate_tour_length(&distances), Float::sqrt(2.0));
    }

    #[test]
    fn short_tours_have_zero_length() {
        let distances = square();
        assert_eq!(cities(&[]).calculate_tour_length(&distances), 0.0);
        assert_eq!(cities(&[3]).calculate_tour_length(&distances), 0.0);
    }

    #[test]
    fn reversed_tour_has_same_length() {
        let distances = square();
        let tour = cities(&[2, 0, 3, 1]);
        let mut reversed = tour.clone();
        reversed.reverse();

        assert_eq!(
            tour.calculate_tour_length(&distances),
            reversed.calculate_tour_length(&distances)
        );
    }

    #[test]
    fn permutation_check() {
        assert!(cities(&[2, 0, 1]).is_permutation(3));
        assert!(!cities(&[2, 0, 0]).is_permutation(3));
        assert!(!cities(&[0, 1]).is_permutation(3));
        assert!(!cities(&[0, 1, 3]).is_permutation(3));
    }

    #[test]
    fn display_and_ordering() {
        let distances = square();
        let short = Tour::from_cities(cities(&[0, 1, 2]), &distances);
        let long = Tour::from_cities(cities(&[0, 2, 1]), &distances);

        assert_eq!(short.to_string(), "[0, 1, 2]");
        assert_eq!(long.length(), Float::sqrt(2.0) + 1.0);
        assert!(short.is_shorter_than(&long));
        assert!(long.is_shorter_than(&Tour::PLACEHOLDER));
        assert_eq!(short.len(), 3);
    }
}
