use std::convert::Infallible;

use board::{GameBoard, TileState};
use pos::Position;
use rule::Rule;
use tracing::{debug, warn};

pub mod board;
pub mod codec;
pub mod pos;
pub mod rule;

/// A Game of Life simulation on a board whose outer frame is always dead.
///
/// The game owns two equally sized boards and alternates between them: one is read while the
/// other is written, and the two swap roles after every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub rule: Rule,
    buffers: [GameBoard; 2],
    current: usize,
    generation: usize,
}

impl Game {
    /// Starts a game from `board`. Live border tiles are killed first, so generation 0 can differ
    /// from `board` when its frame isn't already dead.
    pub fn new(mut board: GameBoard, rule: Rule) -> Self {
        let cleared = board.clear_border();
        if cleared > 0 {
            warn!(cleared, "initial board had live border tiles, they were killed");
        }

        let next = GameBoard::new(board.width, board.height);

        Self {
            rule,
            buffers: [board, next],
            current: 0,
            generation: 0,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.buffers[self.current]
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advances the simulation by one generation.
    pub fn tick(&mut self) {
        let [first, second] = &mut self.buffers;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for (tile_pos, tile) in current.enumerate_tiles() {
            let next_tile = if current.is_border(tile_pos) {
                TileState::Dead
            } else {
                let alive_neighbor_count = alive_neighbor_count(current, tile_pos);
                self.rule.next_state(*tile, alive_neighbor_count)
            };

            // SAFETY: Both buffers share the same shape, so every position of one is valid in the other.
            *next.tile_mut(tile_pos).unwrap() = next_tile;
        }

        self.current ^= 1;
        self.generation += 1;

        debug!(
            generation = self.generation,
            alive = self.board().count_cells(TileState::Alive),
            "ticked"
        );
    }

    /// Ticks until `iterations` generations have passed, handing every generation to `emit`,
    /// starting with the current one.
    pub fn run<F>(&mut self, iterations: usize, mut emit: F)
    where
        F: FnMut(usize, &GameBoard),
    {
        let result = self.try_run(iterations, |generation, board| {
            emit(generation, board);
            Ok::<_, Infallible>(())
        });

        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Like [`Game::run`], but stops at the first error returned by `emit`.
    pub fn try_run<F, E>(&mut self, iterations: usize, mut emit: F) -> Result<(), E>
    where
        F: FnMut(usize, &GameBoard) -> Result<(), E>,
    {
        emit(self.generation, self.board())?;

        while self.generation < iterations {
            self.tick();
            emit(self.generation, self.board())?;
        }

        Ok(())
    }
}

fn alive_neighbor_count(board: &GameBoard, tile_pos: Position) -> usize {
    tile_pos
        .neighbors(board.width, board.height)
        .filter_map(|neighbor_pos| board.tile(neighbor_pos))
        .filter(|neighbor| neighbor.is_alive())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    fn game_from(lines: &[&str]) -> Game {
        let board = decode(lines, lines.len(), lines[0].len() * 4).unwrap();
        Game::new(board, Rule::default())
    }

    fn alive_at(game: &Game, pos: [usize; 2]) -> bool {
        game.board().tile(pos).is_some_and(|tile| tile.is_alive())
    }

    #[test]
    fn new_game_starts_at_generation_zero() {
        let game = game_from(&["0000", "0660", "0660", "0000"]);

        assert_eq!(game.generation(), 0);
        assert_eq!(game.board().count_cells(TileState::Alive), 8);
    }

    #[test]
    fn live_border_is_cleared_on_construction() {
        let mut game = game_from(&["FFFF", "8001", "8001", "FFFF"]);

        assert_eq!(game.board().count_cells(TileState::Alive), 0);

        let mut first_emitted = None;
        game.run(0, |generation, board| first_emitted = Some((generation, board.clone())));
        assert_eq!(first_emitted, Some((0, GameBoard::new(16, 4))));
    }

    #[test]
    fn block_is_still_life() {
        let mut game = game_from(&["00", "18", "18", "00"]);
        let initial = game.board().clone();

        game.tick();
        assert_eq!(game.board(), &initial);
        game.tick();
        assert_eq!(game.board(), &initial);
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn blinker_oscillates() {
        // Horizontal blinker in row 2, columns 1..4.
        let mut game = game_from(&["00", "00", "70", "00", "00"]);

        game.tick();
        assert_eq!(encode(game.board()).unwrap(), vec!["00", "20", "20", "20", "00"]);

        game.tick();
        assert_eq!(encode(game.board()).unwrap(), vec!["00", "00", "70", "00", "00"]);
    }

    #[test]
    fn lonely_and_crowded_tiles_die() {
        // A single tile, and a plus shape whose center has four neighbors.
        let mut game = game_from(&["0000", "0000", "0200", "0000", "0000", "0040", "00E0", "0040", "0000"]);

        game.tick();

        assert!(!alive_at(&game, [6, 2]));
        assert!(!alive_at(&game, [9, 6]));
    }

    #[test]
    fn dead_tile_with_three_neighbors_is_born() {
        // An L of three tiles completes into a block.
        let mut game = game_from(&["00", "20", "30", "00"]);

        assert!(!alive_at(&game, [3, 1]));
        game.tick();

        assert!(alive_at(&game, [3, 1]));
        assert_eq!(game.board().count_cells(TileState::Alive), 4);
    }

    #[test]
    fn dead_tile_with_two_neighbors_stays_dead() {
        let mut game = game_from(&["00", "20", "10", "00"]);

        game.tick();

        assert_eq!(game.board().count_cells(TileState::Alive), 0);
    }

    #[test]
    fn growth_never_reaches_the_border() {
        // The blinker's vertical phase would poke into rows 0 and 3 without the dead frame.
        let mut game = game_from(&["0000", "0700", "0000", "0000"]);

        game.tick();

        let board = game.board();
        assert!(board.border_positions().all(|pos| !alive_at(&game, pos.into())));
        assert_eq!(board.count_cells(TileState::Alive), 2);
    }

    #[test]
    fn rectangular_boards_use_both_dimensions() {
        // 6 rows by 12 columns, blinker near the right side.
        let mut game = game_from(&["000", "000", "00E", "000", "000", "000"]);

        game.tick();

        assert!(alive_at(&game, [9, 1]));
        assert!(alive_at(&game, [9, 2]));
        assert!(alive_at(&game, [9, 3]));
        assert_eq!(game.board().count_cells(TileState::Alive), 3);
    }

    #[test]
    fn custom_rule_is_applied() {
        // B36/S23 grows a birth from six neighbors.
        let board = decode(&["000", "0E0", "000", "0E0", "000"], 5, 12).unwrap();
        let mut game = Game::new(
            board,
            Rule {
                birth: vec![3, 6],
                survive: vec![2, 3],
            },
        );

        game.tick();

        assert!(game.board().tile([5, 2]).is_some_and(|tile| tile.is_alive()));
    }
}
