pub mod day_1;
pub mod day_6;
pub mod day_7;
