/// Most-recently-used ordering rules for the command history
///
/// Pure functions, no I/O: the store decides when to persist.
pub struct MruPolicy;

impl MruPolicy {
    /// Returns a new list with `item` at the front.
    ///
    /// Any other occurrence of `item` is dropped first so each entry appears
    /// at most once, then the result is cut down to `limit` entries.
    pub fn promote(entries: &[String], item: &str, limit: usize) -> Vec<String> {
        let mut promoted = Vec::with_capacity(entries.len() + 1);
        promoted.push(item.to_string());
        promoted.extend(entries.iter().filter(|e| e.as_str() != item).cloned());
        promoted.truncate(limit);
        promoted
    }

    /// Normalizes entries read back from disk: trims, drops blanks and
    /// duplicates (keeping the earliest, i.e. most recent), applies the bound.
    pub fn normalize<I>(entries: I, limit: usize) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() || normalized.iter().any(|e| e == entry) {
                continue;
            }
            normalized.push(entry.to_string());
            if normalized.len() == limit {
                break;
            }
        }
        normalized
    }
}
