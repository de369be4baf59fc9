//! Core UI functionality for the taskpad application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, action dispatch, and component abstractions. It
//! provides the foundation that all UI components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard/mouse input handling
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//!
//! Components never mutate shared state directly; they return actions that the
//! application component consumes in one place.

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
