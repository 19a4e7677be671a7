extern crate direction;
extern crate grid_2d;
extern crate num_traits;
#[cfg(feature = "serialize")]
extern crate serde;
#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde_derive;

mod astar;
mod bfs;
mod config;
mod dijkstra;
mod error;
mod graph;
mod grid;
mod hash;
mod metadata;
mod path;
mod pool;
mod queue;

pub use astar::*;
pub use bfs::*;
pub use config::*;
pub use error::*;
pub use graph::*;
pub use grid::*;
pub use hash::*;
pub use metadata::*;
pub use pool::{PoolStats, DEFAULT_POOL_CAPACITY};
pub use queue::*;

#[cfg(test)]
mod tests;
