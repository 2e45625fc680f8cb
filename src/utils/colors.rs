/// ANSI color helper utilities for terminal output.
use crate::models::{Item, Priority};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Priority color:
/// critical → red, high → yellow, normal → reset, low → grey
pub fn color_for_priority(p: Priority) -> &'static str {
    match p {
        Priority::Critical => RED,
        Priority::High => YELLOW,
        Priority::Normal => RESET,
        Priority::Low => GREY,
    }
}

/// Closed items are greyed out; carried items are cyan.
pub fn color_for_item(item: &Item) -> &'static str {
    if item.is_closed() {
        GREY
    } else if item.rolled_from_item_id.is_some() {
        CYAN
    } else {
        RESET
    }
}

/// Right-aligned counter; non-zero values are painted, zero stays grey.
pub fn colorize_count(value: usize, width: usize, color: &str) -> String {
    let color = if value == 0 { GREY } else { color };
    format!("{color}{value:>width$}{RESET}")
}
