//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They never mutate their
//! input, so the search can call them at every node.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::classify;
pub use win::{LINES, check_winner};
