//! Leptos components for the greeting page.
pub mod app;
pub mod player;
