use serde::Serialize;
use std::fmt::Debug;
use std::fmt::Display;

/// Index of the city in the city list.
/// `u16` is enough since it is extremely unlikely that number of cities would be greater.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CityIndex(u16);

impl CityIndex {
    /// Largest number of cities addressable by `CityIndex`.
    pub const MAX_CITIES: usize = u16::MAX as usize + 1;

    pub fn new(index: usize) -> CityIndex {
        debug_assert!(index < Self::MAX_CITIES, "city index out of range: {index}");
        CityIndex(index as u16)
    }
}

impl From<CityIndex> for usize {
    fn from(value: CityIndex) -> Self {
        value.0.into()
    }
}

impl Debug for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl Display for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
