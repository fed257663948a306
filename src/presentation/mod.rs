//! Presentation layer for visual styling.
//!
//! Turns marker state and timing into what gets drawn, keeping the panels
//! free of arithmetic.

pub mod marker_style;
