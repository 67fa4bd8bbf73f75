//! Presentation layer
//!
//! Stateless UI components. Components receive the application state as a
//! parameter during render and never hold state of their own.

pub mod components;
