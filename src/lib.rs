// lib.rs - Library root for the envy editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod coords;
pub mod cursor;
pub mod editor;
pub mod keymap;
pub mod mode;
pub mod prompt;
pub mod registers;
pub mod row;
pub mod search;
pub mod status;
pub mod terminal;
pub mod ui;
pub mod viewport;
