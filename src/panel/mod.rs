//! Admin panel internals: snapshot store, pure renderers, action outcomes.

pub mod actions;
pub mod detail;
pub mod notice;
pub mod state;
pub mod tables;
