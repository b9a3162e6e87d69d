pub mod day_3;
pub mod day_8;
pub mod day_10;
pub mod day_13;
pub mod day_15;
pub mod day_25;
