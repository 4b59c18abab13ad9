//! The conversion stages, in the order a run applies them.
//!
//! Each stage takes the sheet it works on by exclusive reference and
//! finishes before the next one reads, so no stage observes another's
//! partial writes.

pub mod locate;
pub mod mapping;
pub mod normalize;
pub mod records;
pub mod split;
