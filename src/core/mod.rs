mod level;
mod model_helpers;
mod models;
mod update;

pub use level::{load_level_file, parse_level, render};
pub use models::{Cell, Direction, GameState, LoadError, ParseMode, StepOutcome, UserAction, Vec2};
pub use update::step;
