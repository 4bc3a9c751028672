use chrono::Utc;
use uuid::Uuid;

use bistro_api::domain::types::{CategorySales, Payment, StoreCounts};
use bistro_api::usecase::stats::{AdminStats, AdminStatsUseCase, OrderStatsUseCase};

use crate::helpers::{FixedStatsRepo, InMemoryMenuRepo, InMemoryPaymentRepo, test_menu_item};

fn payment_for_items(menu_item_ids: Vec<Uuid>) -> Payment {
    Payment {
        id: Uuid::now_v7(),
        email: "me@example.com".to_owned(),
        price: 1.0,
        transaction_id: "pi_test".to_owned(),
        menu_item_ids,
        cart_item_ids: vec![],
        created_at: Utc::now(),
    }
}

// ── Summary counts ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_zero_revenue_on_an_empty_payment_collection() {
    let usecase = AdminStatsUseCase {
        stats: FixedStatsRepo {
            counts: StoreCounts::default(),
            revenue: 0.0,
        },
    };

    let stats = usecase.execute().await.unwrap();
    // Zero, not null and not an error.
    assert_eq!(stats.revenue, 0.0);
}

#[tokio::test]
async fn should_report_counts_and_revenue_together() {
    let usecase = AdminStatsUseCase {
        stats: FixedStatsRepo {
            counts: StoreCounts {
                users: 4,
                menu_items: 20,
                cart_items: 7,
            },
            revenue: 132.5,
        },
    };

    assert_eq!(
        usecase.execute().await.unwrap(),
        AdminStats {
            users: 4,
            menu_items: 20,
            cart_items: 7,
            revenue: 132.5,
        }
    );
}

// ── Category breakdown ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_aggregate_purchases_by_category() {
    let drink_a = test_menu_item("Drinks", 5.0);
    let drink_b = test_menu_item("Drinks", 3.0);
    let food_c = test_menu_item("Food", 10.0);

    let usecase = OrderStatsUseCase {
        payments: InMemoryPaymentRepo::new(vec![
            payment_for_items(vec![drink_a.id]),
            payment_for_items(vec![drink_b.id]),
            payment_for_items(vec![food_c.id]),
        ]),
        menu: InMemoryMenuRepo::new(vec![drink_a, drink_b, food_c]),
    };

    // No ordering guarantee across categories; sort for the assertion.
    let mut sales = usecase.execute().await.unwrap();
    sales.sort_by(|a, b| a.category.cmp(&b.category));

    assert_eq!(
        sales,
        vec![
            CategorySales {
                category: "Drinks".to_owned(),
                quantity: 2,
                revenue: 8.0,
            },
            CategorySales {
                category: "Food".to_owned(),
                quantity: 1,
                revenue: 10.0,
            },
        ]
    );
}

#[tokio::test]
async fn should_skip_purchases_whose_item_left_the_catalog() {
    let surviving = test_menu_item("Food", 10.0);
    let deleted_id = Uuid::now_v7();

    let usecase = OrderStatsUseCase {
        payments: InMemoryPaymentRepo::new(vec![payment_for_items(vec![
            surviving.id,
            deleted_id,
        ])]),
        menu: InMemoryMenuRepo::new(vec![surviving]),
    };

    let sales = usecase.execute().await.unwrap();
    assert_eq!(
        sales,
        vec![CategorySales {
            category: "Food".to_owned(),
            quantity: 1,
            revenue: 10.0,
        }]
    );
}

#[tokio::test]
async fn should_price_purchases_at_the_current_catalog_value() {
    // Purchased when the item cost 5.0; the catalog now says 6.0. The
    // breakdown reflects the catalog at query time, not the paid amount.
    let mut item = test_menu_item("Drinks", 5.0);
    let payment = payment_for_items(vec![item.id]);
    item.price = 6.0;

    let usecase = OrderStatsUseCase {
        payments: InMemoryPaymentRepo::new(vec![payment]),
        menu: InMemoryMenuRepo::new(vec![item]),
    };

    let sales = usecase.execute().await.unwrap();
    assert_eq!(sales[0].revenue, 6.0);
}

#[tokio::test]
async fn should_return_an_empty_breakdown_without_payments() {
    let usecase = OrderStatsUseCase {
        payments: InMemoryPaymentRepo::empty(),
        menu: InMemoryMenuRepo::new(vec![test_menu_item("Food", 10.0)]),
    };

    assert!(usecase.execute().await.unwrap().is_empty());
}
