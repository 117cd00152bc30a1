pub mod checks;
pub mod command;
pub mod config;
pub mod env;
pub mod report;
pub mod runner;
pub mod score;
