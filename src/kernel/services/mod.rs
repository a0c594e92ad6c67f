//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types the completion core talks to.
//! - `adapters`: filesystem and logging backed implementations.

pub mod adapters;
pub mod ports;
