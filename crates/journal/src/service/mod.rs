pub mod assistant;
pub mod records;
pub mod statistics;
