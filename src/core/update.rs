use crate::core::models::Cell::{
    BoxOnFloor, BoxOnTarget, Floor, PlayerOnFloor, PlayerOnTarget, Target, Wall,
};
use crate::core::{Direction, GameState, StepOutcome, Vec2};

/// Advance the simulation by one player step. Total: every direction yields
/// an outcome, blocked moves leave the state untouched. `solved` is
/// recomputed on every call rather than cached.
pub fn step(state: &mut GameState, dir: Direction) -> StepOutcome {
    let h = state.height();
    let w = state.width();
    let d = dir.offset();

    let nx = state.player.x + d.x;
    let ny = state.player.y + d.y;
    if nx < 0 || ny < 0 || nx >= w || ny >= h {
        return StepOutcome { moved: false, solved: state.is_won() };
    }

    let dest = state.grid[ny as usize][nx as usize];
    if dest == Wall {
        return StepOutcome { moved: false, solved: state.is_won() };
    }

    if dest.has_box() {
        let bx = nx + d.x;
        let by = ny + d.y;
        if bx < 0 || by < 0 || bx >= w || by >= h {
            return StepOutcome { moved: false, solved: state.is_won() };
        }
        let beyond = state.grid[by as usize][bx as usize];
        if !(beyond == Floor || beyond == Target) {
            // Push blocked by a wall or another box.
            return StepOutcome { moved: false, solved: state.is_won() };
        }

        // Move the box, merging with the destination terrain.
        state.grid[by as usize][bx as usize] =
            if beyond == Target { BoxOnTarget } else { BoxOnFloor };

        // Clear the old box spot down to terrain (player steps into it).
        state.grid[ny as usize][nx as usize] =
            if dest == BoxOnTarget { Target } else { Floor };
    }

    // Move the player: clear the old cell to terrain, occupy the new one.
    let (px, py) = (state.player.x as usize, state.player.y as usize);
    let cur = state.grid[py][px];
    state.grid[py][px] = if cur == PlayerOnTarget { Target } else { Floor };

    let dest_now = state.grid[ny as usize][nx as usize];
    state.grid[ny as usize][nx as usize] =
        if dest_now == Target { PlayerOnTarget } else { PlayerOnFloor };

    state.player = Vec2 { x: nx, y: ny };

    StepOutcome { moved: true, solved: state.is_won() }
}
