//! Two self-balancing ordered maps over integer-keyed records.
//!
//! [`AvlMap`](avl_tree::AvlMap) keeps the heights of sibling subtrees within one of each other and
//! [`RedBlackMap`](red_black_tree::RedBlackMap) keeps a red black coloring with explicit parent
//! links. Both implement [`OrderedEngine`](engine::OrderedEngine) and can be driven
//! interchangeably.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod arena;
pub mod avl_tree;
pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod layout;
pub mod red_black_tree;
pub mod source;

pub use crate::engine::OrderedEngine;
pub use crate::entry::{Entry, Key, Record};
