//! Shared components used by the views and the shell.
pub mod action_link;
pub mod global_style;
pub mod pico;
