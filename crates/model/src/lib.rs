pub mod errors;
pub mod record;
pub mod statistics;
pub mod user;
