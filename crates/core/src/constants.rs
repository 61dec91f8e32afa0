/// Minimum weight an asset contributes to its class pool, so a zero score still earns a share.
pub const SCORE_WEIGHT_FLOOR: f64 = 0.1;

/// Highest preference score an asset may carry.
pub const MAX_ASSET_SCORE: f64 = 15.0;

/// Class budgets and per-asset allocations at or below this amount are not suggested.
pub const MIN_ALLOCATION_AMOUNT: f64 = 1.0;

/// Amounts within this distance of zero count as "no allocation".
pub const ALLOCATION_EPSILON: f64 = 0.01;

/// Allowed drift from 100% when validating a set of class targets.
pub const GOALS_SUM_TOLERANCE: f64 = 0.01;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
