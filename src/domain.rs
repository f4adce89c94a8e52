//! Domain layer
//!
//! This module contains the storefront's domain logic, free of terminal and
//! runtime concerns:
//! - Hero slides and the slide rotator
//! - The static storefront catalog
//! - Price presentation rules
//! - Page geometry shared by the update logic and the renderer
//! - Column-aware text fitting

pub mod catalog;
pub mod layout;
pub mod price;
pub mod rotator;
pub mod slide;
pub mod text;
