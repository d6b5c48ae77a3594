/// Global hard limits for configuration values

/// Smallest page size that still paginates
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest page size before a single batch becomes unwieldy in a terminal list
pub const MAX_PAGE_SIZE: usize = 500;

/// Event poll timeout bounds (milliseconds)
pub const MIN_POLL_TIMEOUT_MS: u64 = 1;
pub const MAX_POLL_TIMEOUT_MS: u64 = 1000;

/// Upper bound for the tick interval (milliseconds)
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;
