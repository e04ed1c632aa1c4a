//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use console::Style;
use nutrijama_core::FoodGroup;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Style for a group's display name, using its color theme.
pub fn group_style(group: FoodGroup) -> Style {
    Style::new().color256(group.info().color)
}

/// Format an energy value for display
pub fn format_kcal(value: f64) -> String {
    format!("{} kcal", value.round() as i64)
}

/// Format a gram quantity for display
pub fn format_grams(value: f64) -> String {
    format!("{:.1} g", value)
}

/// Format a milligram quantity for display
pub fn format_milligrams(value: f64) -> String {
    format!("{:.1} mg", value)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
