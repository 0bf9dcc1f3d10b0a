#[cfg(test)]
pub mod test_utils {
    use countries_db::models::{CatalogEntity, HotelModel, RestaurantModel};
    use uuid::Uuid;

    pub fn create_test_hotel(prefix: &str, stars: Option<&str>) -> HotelModel {
        HotelModel::from_parts(0, &format!("{prefix} {}", Uuid::new_v4().simple()), stars).unwrap()
    }

    pub fn create_test_restaurant(prefix: &str, restaurant_type: Option<&str>) -> RestaurantModel {
        RestaurantModel::from_parts(0, &format!("{prefix} {}", Uuid::new_v4().simple()), restaurant_type)
            .unwrap()
    }
}
