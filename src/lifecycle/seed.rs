//! Demo catalogue loaded at startup.
//!
//! One restaurant per [`CATEGORIES`] entry, each with [`MENU_ITEMS_PER_RESTAURANT`] dishes.
//! Names, descriptions and restaurant images are fixed; ratings, prices and dish images are
//! drawn from the supplied RNG.

use crate::framework::ResourceActor;
use crate::model::{MenuItem, MenuItemCreate, Restaurant, RestaurantCreate, CATEGORIES};
use rand::Rng;
use tracing::info;

/// Restaurant pictures, one per category in catalogue order.
pub const RESTAURANT_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4",
    "https://images.unsplash.com/photo-1497644083578-611b798c60f3",
    "https://images.unsplash.com/photo-1514933651103-005eec06c04b",
    "https://images.unsplash.com/photo-1494346480775-936a9f0d0877",
    "https://images.unsplash.com/photo-1414235077428-338989a2e8c0",
    "https://images.unsplash.com/photo-1474898856510-884a2c0be546",
];

/// Dish pictures; each seeded dish picks one uniformly.
pub const FOOD_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1563897539633-7374c276c212",
    "https://images.unsplash.com/photo-1564844536311-de546a28c87d",
    "https://images.unsplash.com/photo-1492683962492-deef0ec456c0",
    "https://images.unsplash.com/photo-1432139555190-58524dae6a55",
    "https://images.unsplash.com/photo-1560963805-6c64417e3413",
    "https://images.unsplash.com/photo-1560963689-02e82017fb3c",
];

pub const MENU_ITEMS_PER_RESTAURANT: usize = 4;

pub const DISH_DESCRIPTION: &str = "A delicious dish made with fresh ingredients";

/// Inserts the demo catalogue into actors that are not running yet.
///
/// Restaurants and their dishes are interleaved the same way create calls would be, so
/// with fresh actors restaurant `r` gets id `r` and its dishes get ids `4(r-1)+1 ..= 4r`.
pub fn seed_catalogue<R: Rng + ?Sized>(
    restaurants: &mut ResourceActor<Restaurant>,
    menu: &mut ResourceActor<MenuItem>,
    rng: &mut R,
) {
    for (category, image) in CATEGORIES.into_iter().zip(RESTAURANT_IMAGES) {
        let restaurant = restaurants.seed(RestaurantCreate {
            name: format!("{} Place", category),
            category,
            image: image.to_string(),
            rating: rng.random_range(4.0..5.0),
        });

        for n in 1..=MENU_ITEMS_PER_RESTAURANT {
            menu.seed(MenuItemCreate {
                restaurant_id: restaurant.id,
                name: format!("{} Dish {}", category, n),
                description: DISH_DESCRIPTION.to_string(),
                price: f64::from(rng.random_range(10u32..30)),
                image: FOOD_IMAGES[rng.random_range(0..FOOD_IMAGES.len())].to_string(),
            });
        }
    }

    info!(
        restaurants = restaurants.len(),
        menu_items = menu.len(),
        "Seeded catalogue"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItemId, RestaurantId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn seeded(seed: u64) -> (Vec<Restaurant>, Vec<MenuItem>) {
        let (mut restaurant_actor, restaurant_client) = ResourceActor::<Restaurant>::new(8);
        let (mut menu_actor, menu_client) = ResourceActor::<MenuItem>::new(8);

        seed_catalogue(
            &mut restaurant_actor,
            &mut menu_actor,
            &mut StdRng::seed_from_u64(seed),
        );
        tokio::spawn(restaurant_actor.run());
        tokio::spawn(menu_actor.run());

        let restaurants = restaurant_client.list(()).await.unwrap();
        let mut items = vec![];
        for restaurant in &restaurants {
            items.extend(menu_client.list(restaurant.id).await.unwrap());
        }
        (restaurants, items)
    }

    #[tokio::test]
    async fn test_one_restaurant_per_category() {
        let (restaurants, _) = seeded(1).await;

        let categories: Vec<Category> = restaurants.iter().map(|r| r.category).collect();
        assert_eq!(categories, CATEGORIES.to_vec());

        for (i, restaurant) in restaurants.iter().enumerate() {
            assert_eq!(restaurant.id, RestaurantId(i as u32 + 1));
            assert_eq!(restaurant.name, format!("{} Place", restaurant.category));
            assert_eq!(restaurant.image, RESTAURANT_IMAGES[i]);
            assert!((4.0..5.0).contains(&restaurant.rating));
        }
    }

    #[tokio::test]
    async fn test_four_dishes_per_restaurant_with_bounded_values() {
        let (restaurants, items) = seeded(2).await;
        assert_eq!(items.len(), 24);

        for (i, item) in items.iter().enumerate() {
            let owner = &restaurants[i / MENU_ITEMS_PER_RESTAURANT];
            let n = i % MENU_ITEMS_PER_RESTAURANT + 1;

            assert_eq!(item.id, MenuItemId(i as u32 + 1));
            assert_eq!(item.restaurant_id, owner.id);
            assert_eq!(item.name, format!("{} Dish {}", owner.category, n));
            assert_eq!(item.description, DISH_DESCRIPTION);
            assert!((10.0..30.0).contains(&item.price));
            assert_eq!(item.price.fract(), 0.0);
            assert!(FOOD_IMAGES.contains(&item.image.as_str()));
        }
    }

    #[tokio::test]
    async fn test_random_fields_vary_with_rng() {
        let (first, first_items) = seeded(3).await;
        let (second, second_items) = seeded(4).await;

        let names = |rs: &[Restaurant]| rs.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));

        let draws = |rs: &[Restaurant], items: &[MenuItem]| {
            let mut values: Vec<f64> = rs.iter().map(|r| r.rating).collect();
            values.extend(items.iter().map(|i| i.price));
            values
        };
        assert_ne!(draws(&first, &first_items), draws(&second, &second_items));
    }
}
