pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod shopping;
pub mod tui;
