/// Single coordinate axis used for grid rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Side length of the puzzle grid.
pub const GRID_SIZE: Coord = 9;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Returns `coords` when inside the 9x9 grid.
pub const fn checked_coords(coords: Coord2) -> Option<Coord2> {
    if coords.0 < GRID_SIZE && coords.1 < GRID_SIZE {
        Some(coords)
    } else {
        None
    }
}

/// Iterates every grid position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_outside_grid_are_rejected() {
        assert_eq!(checked_coords((8, 8)), Some((8, 8)));
        assert_eq!(checked_coords((9, 0)), None);
        assert_eq!(checked_coords((0, 9)), None);
    }

    #[test]
    fn iter_coords_covers_grid_row_major() {
        let mut coords = iter_coords();
        assert_eq!(coords.next(), Some((0, 0)));
        assert_eq!(coords.next(), Some((0, 1)));
        assert_eq!(iter_coords().count(), 81);
        assert_eq!(iter_coords().last(), Some((8, 8)));
    }
}
