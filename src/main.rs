//! # Restaurant Store Demo
//!
//! Starts the in-memory store, prints the seeded catalogue and walks through the basic
//! flow an API layer would drive:
//! 1.  Starting a seeded [`MemStorage`].
//! 2.  Adding a restaurant and a dish to it.
//! 3.  Placing an [`OrderCreate`] and reading it back.
//!
//! Configure with `RUST_LOG`, `STORE_BUFFER_SIZE` and `STORE_SEED`.

use restaurant_store::lifecycle::{setup_tracing, MemStorage, StoreConfig};
use restaurant_store::model::{
    Category, MenuItemCreate, OrderCreate, OrderId, PaymentMethod, RestaurantCreate,
};
use restaurant_store::storage::{Storage, StoreError};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env();
    info!(?config, "Starting restaurant store");

    let store = MemStorage::start(config);

    let span = tracing::info_span!("catalogue");
    async {
        for restaurant in store.list_restaurants().await? {
            let menu = store.list_menu_items(restaurant.id).await?;
            info!(
                id = %restaurant.id,
                name = %restaurant.name,
                rating = restaurant.rating,
                dishes = menu.len(),
                "Restaurant"
            );
        }
        Ok::<_, StoreError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("restaurant_creation");
    let (restaurant, dish) = async {
        let restaurant = store
            .create_restaurant(RestaurantCreate {
                name: "Taco Hut".to_string(),
                category: Category::Mexican,
                image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47".to_string(),
                rating: 4.2,
            })
            .await?;

        let dish = store
            .create_menu_item(MenuItemCreate {
                restaurant_id: restaurant.id,
                name: "Taco".to_string(),
                description: "Corn tortilla with grilled chicken".to_string(),
                price: 8.0,
                image: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b".to_string(),
            })
            .await?;

        Ok::<_, StoreError>((restaurant, dish))
    }
    .instrument(span)
    .await?;

    info!(restaurant_id = %restaurant.id, menu_item_id = %dish.id, "Restaurant created successfully");

    let menu = store.list_menu_items(restaurant.id).await?;
    info!(restaurant_id = %restaurant.id, dishes = menu.len(), "Menu listed");

    let span = tracing::info_span!("order_processing");
    let order = async {
        info!("Placing order");
        store
            .create_order(OrderCreate {
                items: vec![dish.id.0.to_string()],
                total: dish.price,
                status: "pending".to_string(),
                payment_method: PaymentMethod::Upi,
                address: "123 St".to_string(),
            })
            .await
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, total = order.total, "Order placed successfully");

    match store.get_order(order.id).await? {
        Some(found) => info!(order_id = %found.id, status = %found.status, "Order found"),
        None => warn!(order_id = %order.id, "Order missing after create"),
    }

    let missing = OrderId(999);
    if store.get_order(missing).await?.is_none() {
        info!(order_id = %missing, "Unknown order reported as absent");
    }

    // Shutdown store gracefully
    store.shutdown().await?;
    Ok(())
}
