pub mod app_loop;
pub mod choice_window;
pub mod journal_store;
pub mod seed;

/// Name used for the window title and the per-user data directory.
pub const APP_NAME: &str = "Wayside";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
