pub mod app;
mod shopping_states;
