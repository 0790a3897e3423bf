use itertools::Itertools;

use super::pos::Position;

/// A fixed size grid of tiles, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    /// Iterates the board one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        (0..self.height).map(|y| &self.tiles[y * self.width..(y + 1) * self.width])
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    /// Whether the position lies on the outermost frame of the board.
    pub fn is_border<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    pub fn border_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width)
            .cartesian_product(0..self.height)
            .map(|(x, y)| Position { x, y })
            .filter(|pos| self.is_border(*pos))
    }

    /// Kills every border tile, returning how many were alive.
    pub fn clear_border(&mut self) -> usize {
        let border = self.border_positions().collect_vec();

        let mut cleared = 0;
        for pos in border {
            if let Some(tile) = self.tile_mut(pos)
                && *tile == TileState::Alive
            {
                *tile = TileState::Dead;
                cleared += 1;
            }
        }

        cleared
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
