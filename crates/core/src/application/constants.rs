// Run constants (no magic values)

/// Producer units spawned per run
pub const DEFAULT_PRODUCER_COUNT: usize = 5;

/// Consumer units spawned per run
pub const DEFAULT_CONSUMER_COUNT: usize = 5;

/// Pacing between two spawns of the same launcher (1s)
pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 1000;

/// Result channel capacity, sized to the expected successful consumes
pub const DEFAULT_RESULT_CAPACITY: usize = 5;
