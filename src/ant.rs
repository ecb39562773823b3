use crate::index::CityIndex;

/// An agent building one tour. Lives for a single iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    // Both tour and visited have fixed capacity once the ant is created.
    tour: Vec<CityIndex>,
    visited: Vec<bool>,
}

impl Ant {
    pub fn new(city_count: usize, starting_city: CityIndex) -> Ant {
        let mut ant = Ant {
            tour: Vec::with_capacity(city_count),
            visited: vec![false; city_count],
        };
        ant.visit_city(starting_city);

        ant
    }

    pub fn visit_city(&mut self, city: CityIndex) {
        debug_assert!(!self.has_visited(city), "{city:?} visited twice");

        self.visited[usize::from(city)] = true;
        self.tour.push(city);
    }

    pub fn has_visited(&self, city: CityIndex) -> bool {
        self.visited[usize::from(city)]
    }

    /// City the ant is standing in, i. e. the last one in the tour.
    pub fn current_city(&self) -> CityIndex {
        debug_assert!(!self.tour.is_empty());

        self.tour[self.tour.len() - 1]
    }

    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }

    pub fn tour(&self) -> &[CityIndex] {
        &self.tour
    }

    /// Unvisited cities in index order.
    pub fn unvisited_cities(&self) -> impl Iterator<Item = CityIndex> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|&(_, &visited)| !visited)
            .map(|(idx, _)| CityIndex::new(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ant_stands_in_starting_city() {
        let ant = Ant::new(4, CityIndex::new(2));

        assert_eq!(ant.tour(), &[CityIndex::new(2)]);
        assert_eq!(ant.current_city(), CityIndex::new(2));
        assert!(ant.has_visited(CityIndex::new(2)));
        assert!(!ant.has_visited(CityIndex::new(0)));
        assert!(!ant.is_complete());
    }

    #[test]
    fn visited_flags_follow_tour() {
        let mut ant = Ant::new(3, CityIndex::new(1));
        ant.visit_city(CityIndex::new(0));

        let unvisited: Vec<_> = ant.unvisited_cities().collect();
        assert_eq!(unvisited, vec![CityIndex::new(2)]);

        ant.visit_city(CityIndex::new(2));
        assert!(ant.is_complete());
        assert_eq!(ant.current_city(), CityIndex::new(2));
        assert_eq!(ant.unvisited_cities().count(), 0);
    }
}
