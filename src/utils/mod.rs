//! Utility modules for the taskpad application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date handling and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date formatting, parsing, and manipulation functions

pub mod datetime;
