use cafe_storefront::{
    CartStore, Catalog, CheckoutError, CheckoutForm, CheckoutSubmitter, ConfirmationOutcome,
    NewOrder, OrderId, OrderService, OrderServiceError, OrderType, RestOrderService, Route,
    Storefront,
};

use crate::backend::{self, API_KEY};

fn new_order() -> NewOrder {
    NewOrder {
        customer_name: "A B".into(),
        customer_email: "a@b.com".into(),
        customer_phone: "9876543210".into(),
        order_type: OrderType::DineIn,
        total_amount: 180,
        special_instructions: Some("Table by the window".into()),
    }
}

fn form() -> CheckoutForm {
    CheckoutForm::new("A B", "a@b.com", "9876543210", OrderType::Pickup)
}

#[tokio::test]
async fn create_order_sends_backend_columns() {
    let (base, db) = backend::start().await;
    let service = RestOrderService::new(base, API_KEY);

    let order = service.create_order(new_order()).await.unwrap();
    assert_eq!(order.status, "pending");
    assert_eq!(order.total_amount, 180);

    let tables = db.lock().unwrap();
    let row = &tables.orders[0];
    assert_eq!(row["customer_name"], "A B");
    assert_eq!(row["order_type"], "dine-in");
    assert_eq!(row["total_amount"], 180);
    assert_eq!(row["special_instructions"], "Table by the window");
}

#[tokio::test]
async fn get_order_and_items_by_id() {
    let (base, _db) = backend::start().await;
    let service = RestOrderService::new(base, API_KEY);
    let mut cart = CartStore::new();
    let catalog = Catalog::house_menu();
    cart.add_item(catalog.find("Latte").unwrap());
    cart.add_item(catalog.find("Chocolate Brownie").unwrap());

    let order_id = CheckoutSubmitter::new()
        .submit(&mut cart, &form(), &service)
        .await
        .unwrap();

    let order = service.get_order(&order_id).await.unwrap().unwrap();
    assert_eq!(order.id, order_id);
    assert_eq!(order.total_amount, 130);

    let items = service.get_order_items(&order_id).await.unwrap();
    let names: Vec<&str> = items.iter().map(|item| item.item_name.as_str()).collect();
    assert_eq!(names, vec!["Latte", "Chocolate Brownie"]);
    assert!(items.iter().all(|item| item.order_id == order_id));

    assert!(service
        .get_order(&OrderId::new("order-9999"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn wrong_key_is_a_status_error() {
    let (base, _db) = backend::start().await;
    let service = RestOrderService::new(base, "wrong-key");

    let err = service.create_order(new_order()).await.unwrap_err();
    assert!(matches!(err, OrderServiceError::Status { status: 401, .. }));
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let service = RestOrderService::new("http://127.0.0.1:9", API_KEY);
    let err = service.get_order(&OrderId::new("x")).await.unwrap_err();
    assert!(matches!(err, OrderServiceError::Transport(_)));
}

#[tokio::test]
async fn delete_order_removes_header_and_items() {
    let (base, db) = backend::start().await;
    let service = RestOrderService::new(base, API_KEY);
    let mut cart = CartStore::new();
    cart.add_item(Catalog::house_menu().find("Latte").unwrap());
    let order_id = CheckoutSubmitter::new()
        .submit(&mut cart, &form(), &service)
        .await
        .unwrap();
    assert_eq!(db.lock().unwrap().order_items.len(), 1);

    assert!(service.delete_order(&order_id).await.unwrap());

    let tables = db.lock().unwrap();
    assert!(tables.orders.is_empty());
    assert!(tables.order_items.is_empty());
    drop(tables);
    assert!(service.get_order_items(&order_id).await.unwrap().is_empty());
    assert!(!service.delete_order(&order_id).await.unwrap());
}

#[tokio::test]
async fn items_failure_deletes_header_over_rest() {
    let (base, db) = backend::start().await;
    db.lock().unwrap().fail_items = true;
    let service = RestOrderService::new(base, API_KEY);
    let mut cart = CartStore::new();
    cart.add_item(Catalog::house_menu().find("Espresso").unwrap());

    let err = CheckoutSubmitter::new()
        .submit(&mut cart, &form(), &service)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::ItemsWrite {
            compensated: true,
            ..
        }
    ));
    assert!(db.lock().unwrap().orders.is_empty());
    assert_eq!(cart.total_items(), 1);
}

#[tokio::test]
async fn storefront_round_trip_over_rest() {
    let (base, _db) = backend::start().await;
    let mut store = Storefront::new(Catalog::house_menu(), RestOrderService::new(base, API_KEY));
    store.add_to_cart("Cold Brew").unwrap();
    store.add_to_cart("Cold Brew").unwrap();

    let Route::Confirmation(order_id) = store.checkout(&form()).await.route else {
        panic!("checkout should succeed");
    };

    let ConfirmationOutcome::Loaded(view) = store.confirmation(&order_id).await.unwrap() else {
        panic!("order should load");
    };
    assert_eq!(view.order.total_amount, 180);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.display_number(), "ORDER-00");
}
