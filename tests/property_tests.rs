use orderdesk::domain::menu::{Catalog, ItemId, Price};
use orderdesk::domain::order::OrderStatus;
use orderdesk::error::OrderError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

mod common;

fn random_ids(rng: &mut StdRng) -> Vec<ItemId> {
    let len = rng.gen_range(0..8);
    // Only 1..=3 are on the default menu
    (0..len).map(|_| rng.gen_range(-2..=5)).collect()
}

fn expected_total(catalog: &Catalog, ids: &[ItemId]) -> Decimal {
    ids.iter()
        .filter_map(|id| catalog.list().iter().find(|item| item.id == *id))
        .map(|item| item.price.value())
        .sum()
}

#[tokio::test]
async fn test_totals_match_known_items() {
    let catalog = Catalog::default();
    let engine = common::in_memory_engine(catalog.clone());
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let ids = random_ids(&mut rng);
        let order = engine.create_order(&ids).await.unwrap();
        assert_eq!(order.total.value(), expected_total(&catalog, &ids), "ids: {:?}", ids);
        assert_eq!(Some(order.total), Price::total_of(&order.items));
    }
}

#[tokio::test]
async fn test_add_items_is_additive() {
    let catalog = Catalog::default();
    let engine = common::in_memory_engine(catalog.clone());
    let mut rng = StdRng::seed_from_u64(7);

    let initial = random_ids(&mut rng);
    let mut before = engine.create_order(&initial).await.unwrap();

    for _ in 0..50 {
        let ids = random_ids(&mut rng);
        let after = engine.add_items(before.id, &ids).await.unwrap();

        assert_eq!(
            after.total.value(),
            before.total.value() + expected_total(&catalog, &ids)
        );
        assert_eq!(after.items[..before.items.len()], before.items[..]);
        before = after;
    }
}

#[tokio::test]
async fn test_set_status_always_applies() {
    let engine = common::in_memory_engine(Catalog::default());
    let mut rng = StdRng::seed_from_u64(3);
    let statuses = [
        OrderStatus::Processing,
        OrderStatus::OutForDelivery,
        OrderStatus::Completed,
    ];
    engine.create_order(&[1]).await.unwrap();

    for _ in 0..30 {
        let status = statuses[rng.gen_range(0..statuses.len())];
        let order = engine.set_status(1, status).await.unwrap();
        assert_eq!(order.status, status);
    }
}

#[tokio::test]
async fn test_unknown_order_ids_are_not_found() {
    let engine = common::in_memory_engine(Catalog::default());
    engine.create_order(&[1]).await.unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let id = rng.gen_range(-1_000_000..1_000_000i64);
        if id == 1 {
            continue;
        }
        assert!(matches!(engine.order(id).await, Err(OrderError::NotFound(_))));
        assert!(matches!(
            engine.add_items(id, &[1]).await,
            Err(OrderError::NotFound(_))
        ));
        assert!(matches!(engine.pay_order(id).await, Err(OrderError::NotFound(_))));
        assert!(matches!(
            engine.set_status(id, OrderStatus::Completed).await,
            Err(OrderError::NotFound(_))
        ));
    }
}
