//! Panel route handlers, one module per dashboard area.

pub mod battle;
pub mod deity;
pub mod player;
pub mod state;
pub mod util;
