//! # Graph Model
//!
//! Clean DTOs that cross every boundary: registry ↔ edge builder ↔ export ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no randomness, no
//! construction logic.

pub mod node;
pub mod link;

pub use node::{Node, NodeId};
pub use link::Link;
