//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so default names and addresses never
/// collide with the unique constraints on the `servers` table.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a private IPv4-looking address from a counter value.
///
/// # Arguments
/// - `id` - Unique counter value from `next_id()`
///
/// # Returns
/// - `String` - Address in the `10.x.y.z` range unique per `id`
pub fn address_for(id: u64) -> String {
    format!("10.{}.{}.{}", (id >> 16) & 0xff, (id >> 8) & 0xff, id & 0xff)
}
