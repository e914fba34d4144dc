//! Movement domain: system modules for the trek loop.

pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use jump::{tick_jump_timers, trigger_jump};
pub(crate) use movement::{advance_player, reset_player, spawn_player, sync_player_transform};
