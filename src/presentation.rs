//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components that lay out the landing page
//! - Reusable widgets for each storefront section
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
