use crate::{city::City, config::Float, index::CityIndex, matrix::SquareMatrix};
use std::ops::Index;

/// Pairwise Euclidean distances between all cities. Both triangles are filled.
#[derive(Debug, Clone)]
pub struct DistanceMatrix(SquareMatrix<Float>);

impl DistanceMatrix {
    pub fn from_cities(cities: &[City]) -> DistanceMatrix {
        let city_count = cities.len();
        let mut matrix = SquareMatrix::new(city_count, 0.0);

        for i in 0..city_count {
            for j in (i + 1)..city_count {
                let distance = City::distance(cities[i], cities[j]);
                // Distance matrix is symmetric.
                matrix[(i, j)] = distance;
                matrix[(j, i)] = distance;
            }
        }

        DistanceMatrix(matrix)
    }

    pub fn side_length(&self) -> usize {
        self.0.side_length()
    }

    pub fn as_matrix(&self) -> &SquareMatrix<Float> {
        &self.0
    }
}

impl Index<(CityIndex, CityIndex)> for DistanceMatrix {
    type Output = Float;

    fn index(&self, (x, y): (CityIndex, CityIndex)) -> &Self::Output {
        &self.0[(x.into(), y.into())]
    }
}
