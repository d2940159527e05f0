pub mod strategy;

#[cfg(test)]
mod tests;

pub use strategy::{DefaultStrategy, SchedulingStrategy, LOAD_PENALTY_PER_STOP, OPPOSITE_DIRECTION_PENALTY};
