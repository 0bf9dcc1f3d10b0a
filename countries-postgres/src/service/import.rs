//! Reconciliation of the external country list with local storage
//!
//! Import is insert-only: countries already stored (by case-insensitive name)
//! are left untouched, and nothing is ever deleted.

use countries_api::domain::RegisterCountry;
use countries_db::models::CountryModel;
use std::collections::{HashMap, HashSet};
use validator::Validate;

/// Source records turned into insertable countries.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PreparedImport {
    /// One model per distinct normalized name, in first-seen order
    pub candidates: Vec<CountryModel>,
    /// Records with a blank or over-long field
    pub rejected: usize,
    /// Valid records whose name repeats an earlier candidate
    pub duplicates: usize,
}

impl PreparedImport {
    pub fn name_hashes(&self) -> Vec<i64> {
        self.candidates.iter().map(|c| c.name_hash).collect()
    }
}

/// Validates and deduplicates source records.
///
/// Names that collide case-insensitively keep the position of the first
/// occurrence and the attributes of the last one.
pub(crate) fn prepare_import(records: Vec<RegisterCountry>) -> PreparedImport {
    let mut prepared = PreparedImport::default();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    for record in records {
        if let Err(e) = record.validate() {
            tracing::warn!(name = %record.name, error = %e, "skipping invalid source record");
            prepared.rejected += 1;
            continue;
        }
        let model = match CountryModel::new(&record.name, record.iso_code.as_deref()) {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(name = %record.name, error = %e, "skipping invalid source record");
                prepared.rejected += 1;
                continue;
            }
        };

        match positions.get(&model.name_hash) {
            Some(&index) => {
                prepared.candidates[index] = model;
                prepared.duplicates += 1;
            }
            None => {
                positions.insert(model.name_hash, prepared.candidates.len());
                prepared.candidates.push(model);
            }
        }
    }

    prepared
}

/// Candidates whose name is not in `existing`.
pub(crate) fn missing_countries(candidates: Vec<CountryModel>, existing: &HashSet<i64>) -> Vec<CountryModel> {
    candidates
        .into_iter()
        .filter(|c| !existing.contains(&c.name_hash))
        .collect()
}
