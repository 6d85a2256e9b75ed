//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Rename previews and summaries

pub mod console;
pub mod progress;
pub mod report;

pub use self::console::{print_error, print_info, print_success, print_warning};
pub use progress::create_item_bar;
pub use report::{preview_lines, print_preview, print_rename_summary};
