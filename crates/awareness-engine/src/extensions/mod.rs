// extensions/mod.rs
//
// Optional helpers decoupled from the loop contract.
// Games opt in by calling them from update or render code.

pub mod easing;

pub use easing::{Easing, lerp, ease};
