//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - The hero rotation schedule

pub mod cli;
pub mod config;
pub mod rotation_service;
pub mod tui;
