//! # Storefront - Aathira Trendz landing page in the terminal
//!
//! A terminal rendition of an ethnic-wear storefront landing page, built with
//! Rust and Ratatui. Its centrepiece is the hero banner, which rotates through
//! promotional slides on a fixed cadence and can be driven by the keyboard.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Application state, replaced on every update
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (resize, render, timer reset, logging)
//! - **View** (`components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront::{
//!     core::{
//!         msg::{hero::HeroMsg, Msg},
//!         state::AppState,
//!         update::update,
//!     },
//!     infrastructure::config::Config,
//! };
//!
//! let state = AppState::new_with_config(Config::default())?;
//! let (state, _commands) = update(Msg::Hero(HeroMsg::Next), state);
//! assert_eq!(state.hero.rotator.active_index(), 1);
//! # Ok::<(), storefront::domain::rotator::RotatorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Slides, the rotator, catalog data and page geometry
//! - [`infrastructure`] - Terminal, configuration, CLI and the rotation timer
//! - [`integration`] - Runtime and the main loop
//! - [`presentation`] - Components, widgets, styles and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
