pub mod rng;
#[cfg(feature = "vectors")]
pub mod vector;
