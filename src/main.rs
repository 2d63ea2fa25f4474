// Simple CLI Sokoban with ratatui
// Controls: W/A/S/D or arrow keys (immediate response). Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use sokoban::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokoban::core::{GameState, ParseMode, UserAction, load_level_file, parse_level, step};
use sokoban::models::GameRenderState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Glyph,
    Digit,
}

impl From<Mode> for ParseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Glyph => ParseMode::Glyph,
            Mode::Digit => ParseMode::Digit,
        }
    }
}

#[derive(Debug, Parser)]
struct Args {
    /// Level file to play. Falls back to a built-in example level.
    #[arg(long)]
    level: Option<PathBuf>,

    /// Character table the level file is written in.
    #[arg(long, value_enum, default_value_t = Mode::Glyph)]
    mode: Mode,
}

// A tiny built-in level (Sokoban-like)
const EXAMPLE_LEVEL: &str = "\
#######
#     #
#     #
#. #$ #
#.$   #
#.$$  #
#.#  @#
#######";

fn load(args: &Args) -> Result<GameState, Box<dyn std::error::Error>> {
    match &args.level {
        Some(path) => load_level_file(path, args.mode.into()),
        // The built-in level is written in glyph form, whatever --mode says.
        None => Ok(parse_level(EXAMPLE_LEVEL, ParseMode::Glyph)?),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut game = load(&args)?;

    let mut terminal = setup_terminal()?;
    let mut won = game.is_won();
    let mut blocked = false;

    loop {
        render_game(&mut terminal, &GameRenderState {
            game: game.clone(),
            won,
            error: blocked.then(|| "that way is blocked".to_string()),
        })?;

        let Some(action) = handle_input()? else {
            continue;
        };
        match action {
            UserAction::Quit => break,
            // Any movement key quits once the level is solved.
            _ if won => break,
            UserAction::Move(dir) => {
                let outcome = step(&mut game, dir);
                won = outcome.solved;
                blocked = !outcome.moved;
            }
        }
    }

    cleanup_terminal()?;
    Ok(())
}
