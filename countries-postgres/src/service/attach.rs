use countries_db::models::CountryLinkModel;
use std::collections::HashSet;

/// Distinct ids in first-seen order.
pub(crate) fn distinct_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Links from `country_id` to every checked id, or the first id (in request
/// order) that does not exist.
pub(crate) fn plan_links(country_id: i64, existence: &[(i64, bool)]) -> Result<Vec<CountryLinkModel>, i64> {
    if let Some((missing, _)) = existence.iter().find(|(_, exists)| !exists) {
        return Err(*missing);
    }
    Ok(existence
        .iter()
        .map(|(id, _)| CountryLinkModel::new(country_id, *id))
        .collect())
}
