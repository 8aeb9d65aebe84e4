pub mod board;
pub mod breaks;
pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod ledger;
pub mod log;
pub mod ordering;
pub mod persist;
pub mod projector;
pub mod tick;
