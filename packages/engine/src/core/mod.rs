//! Core building blocks shared by the domain and simulation layers.

pub mod math;
pub mod random;
