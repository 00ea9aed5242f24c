//! Terminal output formatting
//!
//! Word wrapping, frequency reports and the text view's printed messages.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_early_exit, print_error, print_progress, print_prompt, print_success,
};
pub use formatters::{HELP_TEXT, LINE_WIDTH, frequency_report, word_wrap};
