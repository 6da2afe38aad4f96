//! Bills TUI - terminal form for a name and a list of bills
//!
//! A Ratatui-based form that validates every change and hands the
//! validated value to a completion action on submit.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod submit;
pub mod ui;
pub mod validation;
