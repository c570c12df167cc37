//! Movement and collision core of a side-scrolling arcade game.
//!
//! `entities` holds plain data, `compute` and `gameboard` hold the per-tick
//! logic, `intent` turns key presses into velocity changes and `config`
//! carries the tunable constants.

pub mod compute;
pub mod config;
pub mod entities;
pub mod gameboard;
pub mod geometry;
pub mod intent;
