//! Conversion between boards and their compact hexadecimal form.
//!
//! Every hex digit packs four horizontally adjacent tiles, the leftmost tile being the most
//! significant bit, so `3` is `..**` and `C` is `**..`. A board therefore always has a width
//! that is a multiple of four.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{GameBoard, TileState};

const TILES_PER_DIGIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("board text has no rows")]
    Empty,

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid hex digit {digit:?} at row {row}, position {column}")]
    InvalidDigit {
        row: usize,
        column: usize,
        digit: char,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("board width {width} is not a multiple of 4")]
    WidthNotMultipleOfFour { width: usize },
}

/// Characters used when drawing a board as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn glyph(&self, tile: TileState) -> char {
        match tile {
            TileState::Alive => self.alive,
            TileState::Dead => self.dead,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '*',
            dead: '.',
        }
    }
}

/// Decodes `lines` into a board of exactly `rows` x `cols` tiles.
pub fn decode<S>(lines: &[S], rows: usize, cols: usize) -> Result<GameBoard, DecodeError>
where
    S: AsRef<str>,
{
    if lines.len() != rows {
        return Err(DecodeError::RowCount {
            expected: rows,
            found: lines.len(),
        });
    }

    let mut tiles = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        let found = line.chars().count() * TILES_PER_DIGIT;
        if found != cols {
            return Err(DecodeError::RowLength {
                row,
                expected: cols,
                found,
            });
        }
        tiles.reserve(cols);

        for (column, digit) in line.chars().enumerate() {
            let value = digit.to_digit(16).ok_or(DecodeError::InvalidDigit {
                row,
                column,
                digit,
            })?;

            // Most significant bit first, leading zeros included.
            tiles.extend(
                (0..TILES_PER_DIGIT)
                    .rev()
                    .map(|bit| TileState::from((value >> bit) & 1 == 1)),
            );
        }
    }

    Ok(GameBoard::with_tiles(cols, rows, tiles))
}

/// Decodes a whole board text, inferring its size from the line count and the first line.
pub fn decode_text(text: &str) -> Result<GameBoard, DecodeError> {
    let mut lines = text.lines().collect_vec();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let first_line = lines.first().ok_or(DecodeError::Empty)?;

    let rows = lines.len();
    let cols = first_line.chars().count() * TILES_PER_DIGIT;
    debug!(rows, cols, "decoding compact board");

    decode(&lines, rows, cols)
}

/// Encodes a board into one upper case hex string per row.
pub fn encode(board: &GameBoard) -> Result<Vec<String>, EncodeError> {
    if board.width % TILES_PER_DIGIT != 0 {
        return Err(EncodeError::WidthNotMultipleOfFour { width: board.width });
    }

    let rows = board
        .rows()
        .map(|row| {
            row.chunks(TILES_PER_DIGIT)
                .map(|nibble| {
                    let value = nibble
                        .iter()
                        .fold(0, |acc, tile| (acc << 1) | u32::from(tile.is_alive()));

                    // A nibble is always below 16.
                    char::from_digit(value, 16)
                        .map(|digit| digit.to_ascii_uppercase())
                        .unwrap_or('?')
                })
                .collect::<String>()
        })
        .collect();

    Ok(rows)
}

pub fn render_glyphs(board: &GameBoard) -> Vec<String> {
    render_glyphs_with(board, Glyphs::default())
}

pub fn render_glyphs_with(board: &GameBoard, glyphs: Glyphs) -> Vec<String> {
    board
        .rows()
        .map(|row| row.iter().map(|tile| glyphs.glyph(*tile)).collect())
        .collect()
}
