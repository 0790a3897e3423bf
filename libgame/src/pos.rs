use std::fmt;

/// A tile coordinate, `x` being the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// The Moore neighborhood of this position, limited to a `width` x `height` area.
    ///
    /// Neighbors that would fall outside the area are skipped instead of wrapped,
    /// so corner and edge positions yield fewer than eight neighbors.
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Position> {
        const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        fn offset(center: usize, by: isize, len: usize) -> Option<usize> {
            center.checked_add_signed(by).filter(|pos| *pos < len)
        }

        NEIGHBOR_RELATIVE_POSITIONS
            .into_iter()
            .filter_map(move |[rel_x, rel_y]| {
                Some(Position {
                    x: offset(self.x, rel_x, width)?,
                    y: offset(self.y, rel_y, height)?,
                })
            })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
