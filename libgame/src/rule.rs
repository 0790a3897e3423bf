use serde::{Deserialize, Serialize};

use crate::board::TileState;

/// Neighbor counts that bring a dead tile to life or keep a live one alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_state(&self, current: TileState, alive_neighbor_count: usize) -> TileState {
        let alive = match current {
            TileState::Alive => self.survive.contains(&alive_neighbor_count),
            TileState::Dead => self.birth.contains(&alive_neighbor_count),
        };

        TileState::from(alive)
    }
}

/// Conway's B3/S23.
impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
