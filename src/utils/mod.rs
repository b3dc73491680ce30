// Utility functions
// Helper functions for common operations

pub mod format;

pub use format::{page_summary, results_count_label};
