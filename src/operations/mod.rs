pub mod boolean;
pub mod query;
pub mod repair;
pub mod simplify;
