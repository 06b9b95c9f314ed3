//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the Spectrum bucket.

use uuid::Uuid;

/// Owner segment used for results submitted without a user.
pub const ANONYMOUS_OWNER: &str = "anonymous";

pub const RESULTS_PREFIX: &str = "results/";

pub fn owner(user_id: Option<Uuid>) -> String {
    match user_id {
        Some(id) => id.to_string(),
        None => ANONYMOUS_OWNER.to_string(),
    }
}

pub fn results_prefix(user_id: Option<Uuid>) -> String {
    format!("{RESULTS_PREFIX}{}/", owner(user_id))
}

pub fn result(user_id: Option<Uuid>, id: Uuid) -> String {
    format!("{RESULTS_PREFIX}{}/{id}.json", owner(user_id))
}
