pub mod day_1;
pub mod day_4;
pub mod day_5;
pub mod day_9;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_16;
pub mod day_18;
pub mod day_20;
pub mod day_23;
pub mod day_25;
