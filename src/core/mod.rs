pub mod classify;
pub mod config;
pub mod layout;
pub mod logic;
