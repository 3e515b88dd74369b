//! Constants for the interactive TUI module
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and make the codebase more self-documenting.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Share of the screen width given to the details pane
pub const DETAIL_PANE_PERCENT: u16 = 40;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 80;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Results table
/// Width of the numeric columns (forks, stars)
pub const COUNT_COLUMN_WIDTH: u16 = 10;

/// Width of the last-updated column (YYYY-MM-DD plus sort marker)
pub const DATE_COLUMN_WIDTH: u16 = 12;

/// Width of the language column
pub const LANGUAGE_COLUMN_WIDTH: u16 = 14;
