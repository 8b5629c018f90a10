//! This module contains algorithm building blocks.

pub mod geometry;
