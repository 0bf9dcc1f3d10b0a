#[cfg(test)]
pub mod test_utils {
    use countries_db::models::CountryModel;
    use uuid::Uuid;

    /// Name that no other test run can collide with
    pub fn unique_name(prefix: &str) -> String {
        format!("{prefix} {}", Uuid::new_v4().simple())
    }

    pub fn create_test_country(name: &str, iso_code: Option<&str>) -> CountryModel {
        CountryModel::new(name, iso_code).unwrap()
    }
}
