use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

// Table layout:
// [row, row, ..]
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T>
where
    T: Copy,
{
    data: Vec<T>,
    side_length: usize,
}

impl<T> SquareMatrix<T>
where
    T: Copy,
{
    pub fn new(side_length: usize, init_value: T) -> SquareMatrix<T> {
        let data = vec![init_value; side_length * side_length];

        SquareMatrix { data, side_length }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.data[(self.side_length * y)..(self.side_length * (y + 1))]
    }

    /// Applies `f` to every element in place.
    pub fn map_in_place(&mut self, f: impl Fn(T) -> T) {
        for elem in self.data.iter_mut() {
            *elem = f(*elem);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> SquareMatrix<T>
where
    T: Copy + PartialEq,
{
    pub fn is_symmetric(&self) -> bool {
        (0..self.side_length)
            .all(|y| (0..y).all(|x| self[(x, y)] == self[(y, x)]))
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T>
where
    T: Copy,
{
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.data[self.side_length * y + x]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T>
where
    T: Copy,
{
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.data[self.side_length * y + x]
    }
}

/// Trait used for matrix display. Although not stated
/// here, types implementing this should also support formatting
/// `{.<number>}`.
pub trait FloatDisplay: Copy + Display {}

impl FloatDisplay for f32 {}
impl FloatDisplay for f64 {}

impl<T: FloatDisplay> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.side_length) {
            for elem in row {
                write!(f, "{elem:.2}\t")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_column_then_row() {
        let mut m = SquareMatrix::new(3, 0u32);
        m[(2, 0)] = 5;
        assert_eq!(m.row(0), &[0, 0, 5]);
        assert_eq!(m[(2, 0)], 5);
        assert_eq!(m[(0, 2)], 0);
        assert!(!m.is_symmetric());

        m[(0, 2)] = 5;
        assert!(m.is_symmetric());
    }

    #[test]
    fn map_in_place_touches_every_element() {
        let mut m = SquareMatrix::new(2, 3.0);
        m.map_in_place(|v| v * 0.5);
        assert!(m.iter().all(|&v| v == 1.5));

        assert_eq!(m.to_string(), "1.50\t1.50\t\n1.50\t1.50\t\n");
    }
}
