pub mod day_1;
pub mod day_5;
pub mod day_9;
pub mod day_14;
