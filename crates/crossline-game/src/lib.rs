//! Solving a generated crossword.
//!
//! [`Game`] tracks the letters a player has typed into a layout, the cursor
//! and which entries are solved. Solved entries are frozen, and the input
//! that solves the last entry reports completion exactly once.

pub use self::{cursor::*, error::*, game::*};

mod cursor;
mod error;
mod game;
