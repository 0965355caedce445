pub mod chess_state;
pub mod consts;
pub mod evaluation;
pub mod searching;
pub mod state;

pub mod prelude {
    // easier exporting
    pub use super::chess_state::ChessState;
    pub use super::consts::{Value, DRAW, INF, MATE};
    pub use super::searching::{alpha_beta, find_best_move, SearchResult};
    pub use super::state::{GameState, Side};
}
