use crate::city::City;

/// Float type to use everywhere (distances, pheromone and quantities).
pub type Float = f64;

// Number of ants spawned in every iteration.
pub const ANT_COUNT: usize = 10;
// α: the relative importance of the trail, α ≥ 0
pub const ALPHA: Float = 1.0;
// β: the relative importance of the visibility, β ≥ 0
pub const BETA: Float = 2.0;
// ρ: evaporation rate, 0 ≤ ρ ≤ 1 (1 - ρ of the trail survives each iteration)
pub const RHO: Float = 0.5;
// Q: a constant related to the quantity of trail laid by ants
pub const Q: Float = 100.0;

pub const ITERATIONS: u32 = 100;

/// Distances below this are treated as this when computing visibility,
/// so that coincident cities get a large but finite visibility.
pub const MIN_DISTANCE: Float = 1e-9;

/// The problem being solved. Cities are identified by their position here.
pub const CITIES: [City; 5] = [
    City::new(0.0, 0.0),
    City::new(1.0, 1.0),
    City::new(2.0, 2.0),
    City::new(3.0, 3.0),
    City::new(4.0, 4.0),
];
