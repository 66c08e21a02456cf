pub mod day;
pub mod pay;
