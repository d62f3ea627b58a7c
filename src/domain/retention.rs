use chrono::{DateTime, TimeDelta, Utc};

use super::entity::RetentionDecision;

/// Decide whether a release is old enough to be purged.
///
/// Delete iff `created_at < now - max_age`. The inequality is strict: a
/// release sitting exactly on the boundary is kept.
pub fn decide(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    max_age: TimeDelta,
) -> RetentionDecision {
    if created_at < now - max_age {
        RetentionDecision::Delete
    } else {
        RetentionDecision::Keep
    }
}
