//! Taskpad - A keyboard-driven to-do list for the terminal
//!
//! This library provides a small terminal-based task tracker built around a
//! quick-add form: type a description, pick a priority and an optional due
//! date, and the task lands at the top of the list. The interactive UI is
//! built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`tasks`] - Task model and the in-memory store
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task model and the in-memory task store
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the task model for convenient access
pub use tasks::{NewTask, Priority, Task, TaskStore};
