//! Field Pieces Library
//!
//! Points, cars and battle units with guarded mutators. The demo binary
//! replays their usage scenarios headlessly.

pub mod pieces;
