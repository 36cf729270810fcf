/// All case and officer primary keys are 64-bit integers.
pub type CaseId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
