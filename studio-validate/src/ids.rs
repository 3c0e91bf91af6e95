//! Sibling persisted-id checks.

/// Result of scanning one sibling scope.
pub(crate) struct IdCheck {
    /// Items with an empty or absent id.
    pub no_id: usize,
    /// Each duplicated id, once, in first-occurrence order.
    pub duplicates: Vec<String>,
}

/// Scans one scope of sibling ids. `None` and empty strings count as
/// missing; an id seen more than once is reported a single time.
pub(crate) fn check_ids<'a>(ids: impl Iterator<Item = Option<&'a str>>) -> IdCheck {
    let mut seen: Vec<&str> = Vec::new();
    let mut no_id = 0;
    let mut duplicates: Vec<String> = Vec::new();

    for id in ids {
        match id {
            None | Some("") => no_id += 1,
            Some(id) => {
                if seen.contains(&id) {
                    if !duplicates.iter().any(|d| d == id) {
                        duplicates.push(id.to_string());
                    }
                } else {
                    seen.push(id);
                }
            }
        }
    }

    IdCheck { no_id, duplicates }
}
