use crate::core::GameState;

/// Everything the terminal layer needs to draw a frame.
pub struct GameRenderState {
    pub game: GameState,
    pub won: bool,
    pub error: Option<String>,
}
