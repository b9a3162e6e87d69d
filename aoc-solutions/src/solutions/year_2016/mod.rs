pub mod day_1;
pub mod day_9;
pub mod day_12;
pub mod day_13;
pub mod day_15;
pub mod day_18;
pub mod day_19;
pub mod day_20;
