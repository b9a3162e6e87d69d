pub mod day_1;
pub mod day_5;
pub mod day_6;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_12;
pub mod day_16;
pub mod day_17;
