pub mod day_14;
pub mod day_15;
