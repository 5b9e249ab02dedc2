pub mod calculators;
pub mod catch;
pub mod runner;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
