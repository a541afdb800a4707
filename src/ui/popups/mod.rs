//! Modal popup rendering.

pub mod message;
