//! This crate provides building blocks to search for near-optimal delivery routes for agents
//! constrained by travel range and payload capacity which can be restored at recharge stations.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod evolution;
pub mod models;
pub mod prelude;
pub mod simulation;
pub mod split;
pub mod utils;
