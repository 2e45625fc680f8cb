//! Formatting utilities used for CLI outputs.

use crate::models::{ItemType, JobStage, Priority};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Horizontal rule built from the configured separator character.
pub fn separator(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}

/// Human label and icon for an item kind.
pub fn describe_type(t: &ItemType) -> (String, &'static str) {
    match t {
        ItemType::Task => ("Task".into(), "🔧"),
        ItemType::Material => ("Material".into(), "📦"),
        ItemType::Issue => ("Issue".into(), "⚠️"),
        ItemType::Delay => ("Delay".into(), "⏳"),
        ItemType::Email => ("Email".into(), "✉️"),
        ItemType::Other(raw) => (raw.clone(), "•"),
    }
}

pub fn describe_priority(p: Priority) -> &'static str {
    match p {
        Priority::Critical => "Critical",
        Priority::High => "High",
        Priority::Normal => "Normal",
        Priority::Low => "Low",
    }
}

pub fn describe_stage(s: &JobStage) -> &'static str {
    match s {
        JobStage::Prestart => "Pre-start",
        JobStage::InProgress => "In progress",
        JobStage::Snagging => "Snagging",
        JobStage::Complete => "Complete",
    }
}
