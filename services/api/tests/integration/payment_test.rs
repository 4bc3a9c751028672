use uuid::Uuid;

use bistro_api::domain::repository::PaymentRepository;
use bistro_api::domain::types::CartCleanup;
use bistro_api::usecase::payment::{
    ListPaymentsUseCase, SettlePaymentInput, SettlePaymentUseCase,
};

use crate::helpers::{InMemoryCartRepo, InMemoryPaymentRepo, test_cart_item};

fn settle_input(email: &str, cart_item_ids: Vec<Uuid>) -> SettlePaymentInput {
    SettlePaymentInput {
        email: email.to_owned(),
        price: 12.5,
        transaction_id: "pi_test_123".to_owned(),
        menu_item_ids: vec![Uuid::now_v7(), Uuid::now_v7()],
        cart_item_ids,
    }
}

// ── Cart cleanup scope ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_remove_only_the_consumed_cart_entries() {
    let purchased_a = test_cart_item("me@example.com");
    let purchased_b = test_cart_item("me@example.com");
    let unrelated = test_cart_item("me@example.com");
    let consumed = vec![purchased_a.id, purchased_b.id];
    let unrelated_id = unrelated.id;

    let carts = InMemoryCartRepo::new(vec![purchased_a, purchased_b, unrelated]);
    let items = carts.items_handle();
    let calls = carts.delete_calls_handle();

    let usecase = SettlePaymentUseCase {
        payments: InMemoryPaymentRepo::empty(),
        carts,
    };

    let outcome = usecase
        .execute(settle_input("me@example.com", consumed.clone()))
        .await
        .unwrap();

    assert_eq!(outcome.cart_cleanup, CartCleanup::Completed { removed: 2 });

    // Exactly one batch delete, keyed by exactly the payment's id set.
    assert_eq!(calls.lock().unwrap().as_slice(), &[consumed]);

    // Only the unrelated entry survives.
    let remaining = items.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, unrelated_id);
}

// ── Settlement ordering ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_payment_retrievable_when_cart_cleanup_fails() {
    let cart_entry = test_cart_item("me@example.com");
    let payments = InMemoryPaymentRepo::empty();
    let payments_handle = payments.payments_handle();

    let usecase = SettlePaymentUseCase {
        payments,
        carts: InMemoryCartRepo::failing(vec![cart_entry.clone()]),
    };

    let outcome = usecase
        .execute(settle_input("me@example.com", vec![cart_entry.id]))
        .await
        .unwrap();

    assert!(matches!(outcome.cart_cleanup, CartCleanup::Failed { .. }));

    // The payment record exists despite the failed cleanup.
    let recorded = payments_handle.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, outcome.payment_id);
    assert_eq!(recorded[0].email, "me@example.com");
}

#[tokio::test]
async fn should_attempt_no_cleanup_when_the_insert_fails() {
    let cart_entry = test_cart_item("me@example.com");
    let carts = InMemoryCartRepo::new(vec![cart_entry.clone()]);
    let calls = carts.delete_calls_handle();
    let items = carts.items_handle();

    let usecase = SettlePaymentUseCase {
        payments: InMemoryPaymentRepo::failing(),
        carts,
    };

    let result = usecase
        .execute(settle_input("me@example.com", vec![cart_entry.id]))
        .await;

    assert!(result.is_err());
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(items.lock().unwrap().len(), 1);
}

// ── Partial application ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_partial_removal_when_some_ids_are_already_gone() {
    let present = test_cart_item("me@example.com");
    let already_gone = Uuid::now_v7();

    let usecase = SettlePaymentUseCase {
        payments: InMemoryPaymentRepo::empty(),
        carts: InMemoryCartRepo::new(vec![present.clone()]),
    };

    let outcome = usecase
        .execute(settle_input("me@example.com", vec![present.id, already_gone]))
        .await
        .unwrap();

    // One of the two requested ids had no backing row; the count says so.
    assert_eq!(outcome.cart_cleanup, CartCleanup::Completed { removed: 1 });
}

#[tokio::test]
async fn should_report_zero_removals_when_settling_the_same_cart_ids_twice() {
    let entry = test_cart_item("me@example.com");
    let ids = vec![entry.id];

    let payments = InMemoryPaymentRepo::empty();
    let payments_handle = payments.payments_handle();
    let usecase = SettlePaymentUseCase {
        payments,
        carts: InMemoryCartRepo::new(vec![entry]),
    };

    let first = usecase
        .execute(settle_input("me@example.com", ids.clone()))
        .await
        .unwrap();
    let second = usecase
        .execute(settle_input("me@example.com", ids))
        .await
        .unwrap();

    // No idempotency key on settlement: both payments are recorded, and the
    // overlap is observable through the second outcome's zero removals.
    assert_eq!(first.cart_cleanup, CartCleanup::Completed { removed: 1 });
    assert_eq!(second.cart_cleanup, CartCleanup::Completed { removed: 0 });
    assert_eq!(payments_handle.lock().unwrap().len(), 2);
}

// ── Payment history ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_payments_scoped_to_one_payer() {
    let usecase = SettlePaymentUseCase {
        payments: InMemoryPaymentRepo::empty(),
        carts: InMemoryCartRepo::new(vec![]),
    };
    usecase
        .execute(settle_input("me@example.com", vec![]))
        .await
        .unwrap();
    usecase
        .execute(settle_input("other@example.com", vec![]))
        .await
        .unwrap();

    let mine = usecase
        .payments
        .list_by_email("me@example.com")
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].email, "me@example.com");

    let list = ListPaymentsUseCase {
        repo: InMemoryPaymentRepo::new(usecase.payments.payments_handle().lock().unwrap().clone()),
    };
    assert_eq!(list.execute().await.unwrap().len(), 2);
}
