//! Core terminal emulation data structures and logic.
//!
//! This crate provides the foundational types for terminal emulation:
//! cell representation, grid storage, cursor management, scrollback,
//! and all grid editing/navigation operations. It contains no GUI,
//! rendering, or platform-specific code.

#![deny(unsafe_code)]

pub mod cell;
pub mod color;
pub mod grid;
pub mod index;
pub mod serialize;
pub mod term;
pub mod width;

pub use cell::{Cell, CellAttrs};
pub use color::Color;
pub use grid::{EraseMode, Grid, Row};
pub use index::{Column, Location};
pub use term::{Screen, ScreenFlags};
