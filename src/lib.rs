//! A sparse Conway's Game of Life engine on an unbounded integer grid.
//!
//! The live population is a set of coordinates; each generation is computed
//! from an immutable snapshot of the previous one, so the cost of a step is
//! proportional to the live population and its neighborhood rather than to
//! any grid size.

pub mod board;
pub mod coord;
pub mod pattern;
pub mod render;
pub mod rules;
