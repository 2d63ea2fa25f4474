use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::models::Cell::{
    BoxOnFloor, BoxOnTarget, Floor, PlayerOnFloor, PlayerOnTarget, Target, Wall,
};
use crate::core::{Cell, GameState, LoadError, ParseMode, Vec2};

fn cell_from_char(ch: char, mode: ParseMode) -> Option<Cell> {
    let c = match mode {
        ParseMode::Glyph => match ch {
            ' ' => Floor,
            '#' => Wall,
            '@' => PlayerOnFloor,
            '$' => BoxOnFloor,
            '.' => Target,
            '+' => PlayerOnTarget,
            '*' => BoxOnTarget,
            _ => return None,
        },
        ParseMode::Digit => match ch {
            '0' => Floor,
            '1' => Wall,
            '2' => PlayerOnFloor,
            '3' => BoxOnFloor,
            '4' => Target,
            '5' => PlayerOnTarget,
            '6' => BoxOnTarget,
            _ => return None,
        },
    };
    Some(c)
}

fn char_from_cell(c: Cell) -> char {
    match c {
        Floor => ' ',
        Wall => '#',
        PlayerOnFloor => '@',
        BoxOnFloor => '$',
        Target => '.',
        PlayerOnTarget => '+',
        BoxOnTarget => '*',
    }
}

/// Parse a level from text. Rows are split on `\n`; callers strip trailing
/// whitespace beforehand. Rows shorter than the widest row are padded on the
/// right with walls, bounding the level in stone.
pub fn parse_level(text: &str, mode: ParseMode) -> Result<GameState, LoadError> {
    let max_width = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);

    let mut grid: Vec<Vec<Cell>> = Vec::new();
    let mut player = Vec2 { x: 0, y: 0 };
    let mut goals: HashSet<Vec2> = HashSet::new();
    let mut n_player = 0usize;
    let mut n_box = 0usize;

    for (y, line) in text.split('\n').enumerate() {
        let mut row = Vec::with_capacity(max_width);
        for (x, ch) in line.chars().enumerate() {
            let c = cell_from_char(ch, mode).ok_or(LoadError::ParseError {
                glyph: ch,
                row: y,
                col: x,
            })?;
            let pos = Vec2 { x: x as i32, y: y as i32 };
            if c.has_player() {
                player = pos;
                n_player += 1;
            }
            if c.has_box() {
                n_box += 1;
            }
            if c.is_target() {
                goals.insert(pos);
            }
            row.push(c);
        }
        while row.len() < max_width {
            row.push(Wall);
        }
        grid.push(row);
    }

    if n_player == 0 {
        return Err(LoadError::MissingPlayer);
    }
    if n_player > 1 {
        return Err(LoadError::MultiplePlayers);
    }
    if goals.is_empty() {
        return Err(LoadError::NoGoals);
    }
    if n_box != goals.len() {
        return Err(LoadError::BoxGoalMismatch {
            boxes: n_box,
            goals: goals.len(),
        });
    }

    Ok(GameState { grid, player, goals })
}

/// Read a level file, strip trailing whitespace, and parse it.
pub fn load_level_file(path: &Path, mode: ParseMode) -> Result<GameState, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_level(text.trim_end(), mode)?)
}

/// Render the grid back to glyph form, one row per line. The inverse of the
/// glyph parse table; pure, display only.
pub fn render(state: &GameState) -> String {
    state
        .grid
        .iter()
        .map(|row| row.iter().map(|&c| char_from_cell(c)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
