//! CLI library components for the salary dashboard.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
