use countries_db::models::{CountryAggregate, CountryModel, HotelModel, RestaurantModel};
use countries_db::repository::LoadLinked;
use std::collections::HashMap;
use std::error::Error;

use crate::repository::CountryRepositories;

/// Eager loads hotels and restaurants for `countries`, two queries in total.
pub(crate) async fn load_aggregates(
    repos: &CountryRepositories,
    countries: Vec<CountryModel>,
) -> Result<Vec<CountryAggregate>, Box<dyn Error + Send + Sync>> {
    if countries.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = countries.iter().map(|c| c.id).collect();
    let hotels = repos.country_hotel_repository.load_by_country_ids(&ids).await?;
    let restaurants = repos
        .country_restaurant_repository
        .load_by_country_ids(&ids)
        .await?;

    Ok(assemble(countries, hotels, restaurants))
}

/// Groups linked rows under their country, keeping the country order and
/// the order of the linked rows.
pub(crate) fn assemble(
    countries: Vec<CountryModel>,
    hotels: Vec<(i64, HotelModel)>,
    restaurants: Vec<(i64, RestaurantModel)>,
) -> Vec<CountryAggregate> {
    let mut hotels_by_country: HashMap<i64, Vec<HotelModel>> = HashMap::new();
    for (country_id, hotel) in hotels {
        hotels_by_country.entry(country_id).or_default().push(hotel);
    }
    let mut restaurants_by_country: HashMap<i64, Vec<RestaurantModel>> = HashMap::new();
    for (country_id, restaurant) in restaurants {
        restaurants_by_country
            .entry(country_id)
            .or_default()
            .push(restaurant);
    }

    countries
        .into_iter()
        .map(|country| CountryAggregate {
            hotels: hotels_by_country.remove(&country.id).unwrap_or_default(),
            restaurants: restaurants_by_country.remove(&country.id).unwrap_or_default(),
            country,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_db::models::CatalogEntity;

    fn country(id: i64, name: &str) -> CountryModel {
        let mut model = CountryModel::new(name, None).unwrap();
        model.id = id;
        model
    }

    #[test]
    fn test_assemble_groups_by_country() {
        let plaza = HotelModel::from_parts(10, "Plaza", Some("4")).unwrap();
        let ritz = HotelModel::from_parts(11, "Ritz", None).unwrap();
        let noma = RestaurantModel::from_parts(20, "Noma", Some("Nordic")).unwrap();

        let aggregates = assemble(
            vec![country(1, "Chile"), country(2, "Denmark"), country(3, "Peru")],
            vec![(1, plaza.clone()), (1, ritz.clone()), (2, plaza.clone())],
            vec![(2, noma.clone())],
        );

        assert_eq!(aggregates.len(), 3);
        assert_eq!(aggregates[0].country.id, 1);
        assert_eq!(aggregates[0].hotels, vec![plaza.clone(), ritz]);
        assert!(aggregates[0].restaurants.is_empty());
        assert_eq!(aggregates[1].hotels, vec![plaza]);
        assert_eq!(aggregates[1].restaurants, vec![noma]);
        assert!(aggregates[2].hotels.is_empty());
    }
}
