use rand::{distributions::Uniform, prelude::Distribution, Rng};
use tracing::{debug, info, trace};

use crate::{
    ant::Ant,
    city::City,
    config::{self, Float},
    distance_matrix::DistanceMatrix,
    error::ColonyError,
    index::CityIndex,
    pheromone_matrix::PheromoneMatrix,
    tour::{Tour, TourFunctions},
};

/// Algorithm constants of one colony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColonyParameters {
    pub ant_count: usize,
    pub alpha: Float,
    pub beta: Float,
    pub rho: Float,
    pub q: Float,
}

impl Default for ColonyParameters {
    fn default() -> Self {
        ColonyParameters {
            ant_count: config::ANT_COUNT,
            alpha: config::ALPHA,
            beta: config::BETA,
            rho: config::RHO,
            q: config::Q,
        }
    }
}

impl ColonyParameters {
    pub fn validate(&self) -> Result<(), ColonyError> {
        if self.ant_count == 0 {
            return Err(ColonyError::NoAnts);
        }
        check("alpha", self.alpha, "a finite value >= 0", |v| v >= 0.0)?;
        check("beta", self.beta, "a finite value >= 0", |v| v >= 0.0)?;
        check("rho", self.rho, "a value in [0, 1]", |v| (0.0..=1.0).contains(&v))?;
        check("q", self.q, "a finite value > 0", |v| v > 0.0)?;
        Ok(())
    }
}

fn check(
    name: &'static str,
    value: Float,
    expected: &'static str,
    is_valid: impl Fn(Float) -> bool,
) -> Result<(), ColonyError> {
    if value.is_finite() && is_valid(value) {
        Ok(())
    } else {
        Err(ColonyError::InvalidParameter {
            name,
            value,
            expected,
        })
    }
}

/// Outcome of choosing the next city for an ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Picked by the roulette wheel.
    Weighted(CityIndex),
    /// Every unvisited city had zero weight, so the first unvisited city in
    /// index order was taken.
    Fallback(CityIndex),
}

impl Selection {
    pub fn city(self) -> CityIndex {
        match self {
            Selection::Weighted(city) | Selection::Fallback(city) => city,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub best_tour: Tour,
    pub iterations: u32,
    /// Number of city choices that did not come from the roulette wheel.
    pub fallback_selections: usize,
}

/// Owns everything that lives longer than one iteration: distances,
/// pheromone and the algorithm constants. Ants are created per iteration and
/// handed back in by the caller.
#[derive(Debug, Clone)]
pub struct Colony {
    parameters: ColonyParameters,
    distances: DistanceMatrix,
    pheromone: PheromoneMatrix,
    cities_distrib: Uniform<usize>,
    // Upper bound for a single desirability weight, so that their sum stays finite.
    max_weight: Float,
}

impl Colony {
    pub fn new(parameters: ColonyParameters, cities: &[City]) -> Result<Colony, ColonyError> {
        let city_count = cities.len();
        if city_count < 2 {
            return Err(ColonyError::TooFewCities { count: city_count });
        }
        if city_count > CityIndex::MAX_CITIES {
            return Err(ColonyError::TooManyCities { count: city_count });
        }
        if let Some(index) = cities.iter().position(|city| !city.is_finite()) {
            return Err(ColonyError::InvalidCity { index });
        }
        parameters.validate()?;

        Ok(Colony {
            parameters,
            distances: DistanceMatrix::from_cities(cities),
            pheromone: PheromoneMatrix::new(city_count, parameters.rho),
            cities_distrib: Uniform::new(0, city_count),
            max_weight: Float::MAX / city_count as Float,
        })
    }

    pub fn city_count(&self) -> usize {
        self.distances.side_length()
    }

    pub fn parameters(&self) -> &ColonyParameters {
        &self.parameters
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Creates `ant_count` ants, each placed in a uniformly random city.
    pub fn initialize_ants<R: Rng>(&self, rng: &mut R) -> Vec<Ant> {
        let city_count = self.city_count();
        self.cities_distrib
            .sample_iter(rng)
            .take(self.parameters.ant_count)
            .map(|city| Ant::new(city_count, CityIndex::new(city)))
            .collect()
    }

    /// 1 / distance, with coincident cities treated as `MIN_DISTANCE` apart.
    fn visibility(&self, from: CityIndex, to: CityIndex) -> Float {
        1.0 / self.distances[(from, to)].max(config::MIN_DISTANCE)
    }

    /// tau^alpha * visibility^beta, clamped to a finite value.
    fn weight(&self, trails: &[Float], from: CityIndex, to: CityIndex) -> Float {
        let trail = trails[usize::from(to)].powf(self.parameters.alpha);
        if trail == 0.0 {
            return 0.0;
        }
        let weight = trail * self.visibility(from, to).powf(self.parameters.beta);
        if weight.is_nan() {
            0.0
        } else {
            weight.min(self.max_weight)
        }
    }

    /// Roulette-wheel choice of the next city. Returns `None` once the ant
    /// has visited every city.
    pub fn next_city<R: Rng>(&self, ant: &Ant, rng: &mut R) -> Option<Selection> {
        if ant.is_complete() {
            return None;
        }
        let current = ant.current_city();
        let trails = self.pheromone.row(current);

        // Cities without weight can never be drawn, leave them out of the wheel.
        let candidates: Vec<(CityIndex, Float)> = ant
            .unvisited_cities()
            .map(|city| (city, self.weight(trails, current, city)))
            .filter(|&(_, weight)| weight > 0.0)
            .collect();
        let total = candidates
            .iter()
            .fold(0.0, |sum, &(_, weight)| sum + weight);
        if total <= 0.0 {
            return ant.unvisited_cities().next().map(Selection::Fallback);
        }

        let roulette = rng.gen::<Float>() * total;
        let mut cumulative = 0.0;
        for &(city, weight) in &candidates {
            cumulative += weight;
            if cumulative >= roulette {
                return Some(Selection::Weighted(city));
            }
        }
        // The walk ends at exactly `total`, which is never below the roulette value.
        candidates
            .last()
            .map(|&(city, _)| Selection::Weighted(city))
    }

    /// Lets every ant finish its tour. Returns how many choices were fallbacks.
    pub fn ants_move<R: Rng>(&self, ants: &mut [Ant], rng: &mut R) -> usize {
        let mut fallbacks = 0;
        for ant in ants.iter_mut() {
            while let Some(selection) = self.next_city(ant, rng) {
                fallbacks += usize::from(selection.is_fallback());
                ant.visit_city(selection.city());
            }
            debug_assert!(ant.tour().is_permutation(self.city_count()));
        }
        fallbacks
    }

    /// Evaporates all trails, then lets every ant lay Q / L on each path of its tour.
    pub fn update_pheromones(&mut self, ants: &[Ant]) {
        self.pheromone.evaporate_pheromone();

        for ant in ants {
            let tour_length = self.tour_length(ant.tour());
            if tour_length <= 0.0 {
                debug!(tour = ?ant.tour(), "zero length tour, no pheromone deposited");
                continue;
            }
            let delta_tau = self.parameters.q / tour_length;
            for path in ant.tour().paths() {
                let &[c1, c2] = path else { unreachable!() };
                self.pheromone.deposit(c1, c2, delta_tau);
            }
        }
    }

    pub fn tour_length(&self, tour: &[CityIndex]) -> Float {
        tour.calculate_tour_length(&self.distances)
    }

    /// Shortest tour among `ants`.
    fn shortest_tour(&self, ants: &[Ant]) -> Tour {
        let mut shortest = Tour::PLACEHOLDER;
        for ant in ants {
            let tour = Tour::from_cities(ant.tour().to_vec(), &self.distances);
            if tour.is_shorter_than(&shortest) {
                shortest = tour;
            }
        }
        shortest
    }

    /// Runs `iterations` rounds of construction and pheromone update, then
    /// sends out one more batch of ants and reports its shortest tour.
    pub fn run<R: Rng>(&mut self, iterations: u32, rng: &mut R) -> RunSummary {
        info!(
            cities = self.city_count(),
            ants = self.parameters.ant_count,
            iterations,
            "starting ant colony"
        );
        let mut fallback_selections = 0;

        for iteration in 0..iterations {
            let mut ants = self.initialize_ants(rng);
            fallback_selections += self.ants_move(&mut ants, rng);
            self.update_pheromones(&ants);

            debug!(
                iteration,
                shortest_length = self.shortest_tour(&ants).length(),
                "iteration finished"
            );
        }

        // The reporting batch does not lay any trail.
        let mut ants = self.initialize_ants(rng);
        fallback_selections += self.ants_move(&mut ants, rng);
        let best_tour = self.shortest_tour(&ants);

        trace!("pheromone matrix:\n{}", self.pheromone.as_matrix());
        info!(
            best_length = best_tour.length(),
            fallback_selections,
            "ant colony finished"
        );

        RunSummary {
            best_tour,
            iterations,
            fallback_selections,
        }
    }
}
