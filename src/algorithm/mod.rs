/// Fit-constraint candidate tables per remaining budget
pub mod budget;
/// Row-by-row stereogram assembly and message encoding
pub mod builder;
/// Fixed-length word pattern generation
pub mod pattern;
/// Seeded random source threaded through generation
pub mod random;
