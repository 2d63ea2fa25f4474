use crate::core::{Cell, GameState};

impl GameState {
    /// Solved iff every goal cell currently holds a box.
    pub fn is_won(&self) -> bool {
        self.goals
            .iter()
            .all(|g| self.grid[g.y as usize][g.x as usize] == Cell::BoxOnTarget)
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    /// Boxes on the grid, wherever they sit. Conserved across steps and
    /// equal to `goals.len()` for any loaded level.
    pub fn count_boxes(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| c.has_box())
            .count()
    }
}
