//! Shared building blocks for the turbojet cycle crates.
//!
//! The only module today is [`constraint`], which lets engine inputs and
//! component outputs carry their numeric invariants in the type system.

pub mod constraint;
