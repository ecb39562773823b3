use crate::{config::Float, index::CityIndex, matrix::SquareMatrix};

/// Trail intensity on every path. Every write touches both `(a, b)` and
/// `(b, a)`, so the matrix stays symmetric.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    matrix: SquareMatrix<Float>,
    rho: Float,
}

impl PheromoneMatrix {
    /// All trails start at zero intensity.
    pub fn new(side_length: usize, rho: Float) -> PheromoneMatrix {
        PheromoneMatrix {
            matrix: SquareMatrix::new(side_length, 0.0),
            rho,
        }
    }

    pub fn pheromone(&self, c1: CityIndex, c2: CityIndex) -> Float {
        self.matrix[(c1.into(), c2.into())]
    }

    pub fn row(&self, city: CityIndex) -> &[Float] {
        self.matrix.row(city.into())
    }

    /// Adds `delta_tau` to the path between `c1` and `c2` in both directions.
    pub fn deposit(&mut self, c1: CityIndex, c2: CityIndex, delta_tau: Float) {
        debug_assert!(delta_tau >= 0.0, "delta_tau: {delta_tau}");

        self.matrix[(c1.into(), c2.into())] += delta_tau;
        self.matrix[(c2.into(), c1.into())] += delta_tau;
    }

    pub fn evaporate_pheromone(&mut self) {
        let persistence = 1.0 - self.rho;
        self.matrix.map_in_place(|tau| tau * persistence);
    }

    pub fn as_matrix(&self) -> &SquareMatrix<Float> {
        &self.matrix
    }
}
