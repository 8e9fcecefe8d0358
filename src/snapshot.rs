//! JSON form of a mode's resource list.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::resource::Resource;

pub fn encode(resources: &[Resource]) -> Result<String> {
    Ok(serde_json::to_string(resources)?)
}

/// Parses and checks a stored snapshot. Rejects anything that is not an array
/// of complete records, has duplicate ids, or has `current > max`.
pub fn decode(raw: &str) -> Result<Vec<Resource>> {
    let resources: Vec<Resource> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for r in &resources {
        if !seen.insert(r.id.as_str()) {
            return Err(Error::InvalidSnapshot(format!("duplicate id `{}`", r.id)));
        }
        if !r.is_within_bounds() {
            return Err(Error::InvalidSnapshot(format!(
                "`{}` has current {} above max {}",
                r.id, r.current, r.max
            )));
        }
    }
    Ok(resources)
}
