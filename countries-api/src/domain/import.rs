use serde::{Deserialize, Serialize};

/// Outcome of reconciling the external country list with local storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Records returned by the source.
    pub fetched: usize,
    /// Countries inserted by this run.
    pub inserted: usize,
    /// Distinct source countries that were already stored.
    pub already_present: usize,
    /// Records repeating an earlier name of the same list (case-insensitive).
    pub duplicates: usize,
    /// Source records that could not be stored (blank or over-long fields).
    pub rejected: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        format!(
            "Country list updated: {} fetched, {} inserted, {} already present, {} duplicates, {} rejected.",
            self.fetched, self.inserted, self.already_present, self.duplicates, self.rejected
        )
    }
}
