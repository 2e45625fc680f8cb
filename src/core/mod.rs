pub mod backup;
pub mod config;
pub mod day_entry;
pub mod ids;
pub mod item;
pub mod job;
pub mod lineage;
pub mod log;
pub mod priority;
pub mod rollover;
