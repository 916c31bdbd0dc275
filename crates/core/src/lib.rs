#![deny(unsafe_code)]
//! Core types for the uiuc workspace.
//!
//! Provides [`HslaPixel`], the HSLA color value handed to an external PNG
//! library's pixel-access API.

pub mod pixel;

pub use pixel::HslaPixel;
