use rand::rngs::StdRng;
use rand::SeedableRng;
use restaurant_store::lifecycle::{MemStorage, StoreConfig, MENU_ITEMS_PER_RESTAURANT};
use restaurant_store::model::{
    Category, MenuItemCreate, MenuItemId, OrderCreate, OrderId, PaymentMethod, RestaurantCreate,
    RestaurantId, CATEGORIES,
};
use restaurant_store::storage::Storage;
use std::collections::HashSet;
use std::sync::Arc;

fn unseeded() -> MemStorage {
    MemStorage::start(StoreConfig {
        seed: false,
        ..StoreConfig::default()
    })
}

fn taco_hut() -> RestaurantCreate {
    RestaurantCreate {
        name: "Taco Hut".to_string(),
        category: Category::Mexican,
        image: "https://example.com/taco-hut.jpg".to_string(),
        rating: 4.2,
    }
}

fn dish(restaurant_id: RestaurantId, name: &str, price: f64) -> MenuItemCreate {
    MenuItemCreate {
        restaurant_id,
        name: name.to_string(),
        description: format!("{} description", name),
        price,
        image: "https://example.com/dish.jpg".to_string(),
    }
}

fn order(items: &[&str], total: f64) -> OrderCreate {
    OrderCreate {
        items: items.iter().map(|s| s.to_string()).collect(),
        total,
        status: "pending".to_string(),
        payment_method: PaymentMethod::Upi,
        address: "123 St".to_string(),
    }
}

/// Full walk through the store behind a trait object, the way the API layer holds it.
#[tokio::test]
async fn test_seeded_store_end_to_end() {
    let store: Arc<dyn Storage> = Arc::new(MemStorage::new());

    let restaurant = store.create_restaurant(taco_hut()).await.unwrap();
    assert_eq!(restaurant.id, RestaurantId(7));
    assert_eq!(restaurant.name, "Taco Hut");

    let taco = store
        .create_menu_item(dish(restaurant.id, "Taco", 8.0))
        .await
        .unwrap();
    assert_eq!(taco.id, MenuItemId(25));

    let menu = store.list_menu_items(RestaurantId(7)).await.unwrap();
    assert_eq!(menu, vec![taco.clone()]);

    let placed = store.create_order(order(&["25"], 8.0)).await.unwrap();
    assert_eq!(placed.id, OrderId(1));
    assert_eq!(placed.items, vec!["25".to_string()]);
    assert_eq!(placed.payment_method, PaymentMethod::Upi);

    let fetched = store.get_order(OrderId(1)).await.unwrap();
    assert_eq!(fetched, Some(placed));
    assert_eq!(store.get_order(OrderId(999)).await.unwrap(), None);

    assert_eq!(store.list_restaurants().await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_seeded_catalogue_shape() {
    let store = MemStorage::start_with_rng(StoreConfig::default(), &mut StdRng::seed_from_u64(7));

    let restaurants = store.list_restaurants().await.unwrap();
    let categories: Vec<Category> = restaurants.iter().map(|r| r.category).collect();
    assert_eq!(categories, CATEGORIES.to_vec());

    for (i, restaurant) in restaurants.iter().enumerate() {
        assert_eq!(restaurant.id, RestaurantId(i as u32 + 1));
        assert!((4.0..5.0).contains(&restaurant.rating));

        let menu = store.list_menu_items(restaurant.id).await.unwrap();
        assert_eq!(menu.len(), MENU_ITEMS_PER_RESTAURANT);
        for item in &menu {
            assert_eq!(item.restaurant_id, restaurant.id);
            assert!(item.name.starts_with(&restaurant.category.to_string()));
            assert!((10.0..30.0).contains(&item.price));
        }
    }

    // Dish ids 1..=24 are all taken by the seed
    assert!(store.get_menu_item(MenuItemId(24)).await.unwrap().is_some());
    assert!(store.get_menu_item(MenuItemId(25)).await.unwrap().is_none());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unseeded_counters_are_independent() {
    let store = unseeded();
    assert!(store.list_restaurants().await.unwrap().is_empty());

    let first_order = store.create_order(order(&[], 0.0)).await.unwrap();
    let restaurant = store.create_restaurant(taco_hut()).await.unwrap();
    let item = store
        .create_menu_item(dish(restaurant.id, "Burrito", 9.5))
        .await
        .unwrap();
    let second_order = store.create_order(order(&["1"], 9.5)).await.unwrap();

    assert_eq!(first_order.id, OrderId(1));
    assert_eq!(restaurant.id, RestaurantId(1));
    assert_eq!(item.id, MenuItemId(1));
    assert_eq!(second_order.id, OrderId(2));

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_items_are_not_checked_against_restaurants() {
    let store = unseeded();

    let orphan = store
        .create_menu_item(dish(RestaurantId(42), "Ghost Soup", 5.0))
        .await
        .unwrap();

    assert_eq!(store.get_restaurant(RestaurantId(42)).await.unwrap(), None);
    assert_eq!(
        store.list_menu_items(RestaurantId(42)).await.unwrap(),
        vec![orphan]
    );
    assert!(store.list_menu_items(RestaurantId(999)).await.unwrap().is_empty());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_keep_unknown_items_and_free_text() {
    let store = unseeded();

    let mut params = order(&["not-a-dish", "25", "25"], 12.75);
    params.status = "anything goes".to_string();
    params.payment_method = PaymentMethod::Cash;

    let placed = store.create_order(params.clone()).await.unwrap();
    assert_eq!(placed.items, params.items);
    assert_eq!(placed.status, "anything goes");
    assert_eq!(placed.total, 12.75);
    assert_eq!(placed.payment_method, PaymentMethod::Cash);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_listing_keeps_creation_order_across_restaurants() {
    let store = unseeded();
    let a = store.create_restaurant(taco_hut()).await.unwrap();
    let b = store
        .create_restaurant(RestaurantCreate {
            name: "Green Bowl".to_string(),
            category: Category::Healthy,
            ..taco_hut()
        })
        .await
        .unwrap();

    let a1 = store.create_menu_item(dish(a.id, "A1", 1.0)).await.unwrap();
    let b1 = store.create_menu_item(dish(b.id, "B1", 2.0)).await.unwrap();
    let a2 = store.create_menu_item(dish(a.id, "A2", 3.0)).await.unwrap();

    assert_eq!(store.list_menu_items(a.id).await.unwrap(), vec![a1, a2]);
    assert_eq!(store.list_menu_items(b.id).await.unwrap(), vec![b1]);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reads_are_repeatable() {
    let store = MemStorage::new();

    let first = store.list_restaurants().await.unwrap();
    let second = store.list_restaurants().await.unwrap();
    assert_eq!(first, second);

    let item = store.get_menu_item(MenuItemId(3)).await.unwrap();
    assert_eq!(item, store.get_menu_item(MenuItemId(3)).await.unwrap());
    assert_eq!(store.get_restaurant(RestaurantId(0)).await.unwrap(), None);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_get_distinct_ids() {
    let store = Arc::new(unseeded());

    let mut handles = vec![];
    for i in 0..50u32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let item = i.to_string();
            store
                .create_order(order(&[item.as_str()], f64::from(i)))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let placed = handle.await.unwrap();
        let fetched = store.get_order(placed.id).await.unwrap();
        assert_eq!(fetched, Some(placed.clone()));
        ids.insert(placed.id.0);
    }

    assert_eq!(ids, (1..=50).collect::<HashSet<u32>>());
    assert_eq!(store.get_order(OrderId(51)).await.unwrap(), None);
}

#[tokio::test]
async fn test_zero_buffer_size_is_clamped() {
    let store = MemStorage::start(StoreConfig {
        buffer_size: 0,
        seed: false,
    });

    let restaurant = store.create_restaurant(taco_hut()).await.unwrap();
    assert_eq!(restaurant.id, RestaurantId(1));

    store.shutdown().await.unwrap();
}
