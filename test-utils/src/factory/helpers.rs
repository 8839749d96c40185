use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-unique id for factory defaults.
///
/// Keeps unique-column defaults (guild ids, URLs) from colliding when a test
/// creates several entities without specifying values.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
