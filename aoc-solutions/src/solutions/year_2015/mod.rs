pub mod day_3;
pub mod day_23;
pub mod day_24;
pub mod day_25;
