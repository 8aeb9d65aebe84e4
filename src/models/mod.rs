pub mod break_interval;
pub mod employee;
pub mod roster;
