//! Display formatting for terminal output

pub mod contact;
pub mod expense;

pub use contact::format_contact_list;
pub use expense::{format_expense_details, format_expense_list};

/// Shorten text to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
