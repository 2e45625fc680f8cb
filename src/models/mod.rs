pub mod day_entry;
pub mod item;
pub mod item_type;
pub mod job;
pub mod priority;
pub mod status;

pub use day_entry::{DayEntry, EntryPatch};
pub use item::Item;
pub use item_type::ItemType;
pub use job::{Job, JobStage};
pub use priority::Priority;
pub use status::ItemStatus;
