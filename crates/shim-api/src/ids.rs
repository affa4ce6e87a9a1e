//! Identifier generation.
//!
//! Identifiers carry the creation second for readability plus a random
//! v4 uuid, so calls within the same second never collide.

use chrono::Utc;
use uuid::Uuid;

/// New execution identifier, e.g. `exec-1735689600-3f2a...`.
pub fn execution_id() -> String {
    prefixed_id("exec")
}

/// New identifier for a created resource, e.g. `crew-1735689600-9b1c...`.
pub fn resource_id(noun: &str) -> String {
    prefixed_id(noun)
}

fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}-{}", prefix, Utc::now().timestamp(), Uuid::new_v4().simple())
}
