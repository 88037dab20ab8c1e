// Per-request analysis: skill detection, coverage scoring, gap aggregation.
// Nothing in here writes to the taxonomy.

pub mod detector;
pub mod gaps;
pub mod handlers;
pub mod pipeline;
pub mod scorer;
