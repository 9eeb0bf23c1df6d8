//! Service layer containing the selection-and-composition logic.
//!
//! ## Service map
//! - `wordpool.rs` — word list parsing + length/letter filters.
//! - `selector.rs` — distinct draw and unique-initials draw.
//! - `separators.rs` — alias table, coverage planning, rendering.
//! - `caser.rs` — capitalization policy.
//! - `composer.rs` — final string assembly.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Every function is pure over its inputs plus an explicit `&mut R: Rng`.
//! - The random source is threaded through as a parameter, never ambient;
//!   the run handler fixes the draw order.
//! - Keep command handlers thin; delegate logic here.

pub mod caser;
pub mod composer;
pub mod output;
pub mod selector;
pub mod separators;
pub mod wordpool;
