//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - [`runtime::Runtime`] queues messages, runs `update` and executes commands
//! - [`app_runner::AppRunner`] owns the terminal, the rotation timer and the main loop
//! - [`renderer::Renderer`] draws the state through the presentation components

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
