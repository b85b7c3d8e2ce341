//! Test doubles: an order service that records calls and fails on demand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cafe_storefront::{
    CartStore, Catalog, Category, CheckoutForm, InMemoryOrderService, MenuItem, NewOrder,
    NewOrderItem, Order, OrderId, OrderItem, OrderService, OrderServiceError, OrderType,
};

/// Which service call to break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    CreateOrder,
    CreateOrderItems,
    GetOrder,
    GetOrderItems,
    DeleteOrder,
}

/// In-memory service that logs every call and can be told to fail any of them.
#[derive(Default)]
pub struct ScriptedOrderService {
    pub store: InMemoryOrderService,
    calls: Mutex<Vec<Call>>,
    fail_create_order: AtomicBool,
    fail_create_items: AtomicBool,
    fail_get_order: AtomicBool,
    fail_get_items: AtomicBool,
    fail_delete: AtomicBool,
}

impl ScriptedOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, call: Call) -> Self {
        self.set_failing(call, true);
        self
    }

    pub fn set_failing(&self, call: Call, failing: bool) {
        self.flag(call).store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn flag(&self, call: Call) -> &AtomicBool {
        match call {
            Call::CreateOrder => &self.fail_create_order,
            Call::CreateOrderItems => &self.fail_create_items,
            Call::GetOrder => &self.fail_get_order,
            Call::GetOrderItems => &self.fail_get_items,
            Call::DeleteOrder => &self.fail_delete,
        }
    }

    fn enter(&self, call: Call) -> Result<(), OrderServiceError> {
        self.calls.lock().unwrap().push(call);
        if self.flag(call).load(Ordering::SeqCst) {
            return Err(OrderServiceError::Status {
                status: 503,
                body: format!("{:?} unavailable", call),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OrderService for ScriptedOrderService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderServiceError> {
        self.enter(Call::CreateOrder)?;
        self.store.create_order(order).await
    }

    async fn create_order_items(
        &self,
        order_id: &OrderId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderServiceError> {
        self.enter(Call::CreateOrderItems)?;
        self.store.create_order_items(order_id, items).await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        self.enter(Call::GetOrder)?;
        self.store.get_order(id).await
    }

    async fn get_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderServiceError> {
        self.enter(Call::GetOrderItems)?;
        self.store.get_order_items(order_id).await
    }

    async fn delete_order(&self, id: &OrderId) -> Result<bool, OrderServiceError> {
        self.enter(Call::DeleteOrder)?;
        self.store.delete_order(id).await
    }
}

pub fn latte() -> MenuItem {
    MenuItem::new("Latte", "Espresso with steamed milk", 70, "/latte.jpg", Category::Hot)
}

pub fn espresso() -> MenuItem {
    MenuItem::new("Espresso", "A short shot", 40, "/espresso.jpg", Category::Hot)
}

/// Latte × 2 and Espresso × 1: 3 items, 180 total.
pub fn sample_cart() -> CartStore {
    let mut cart = CartStore::new();
    cart.add_item(&latte());
    cart.add_item(&latte());
    cart.add_item(&espresso());
    cart
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![latte(), espresso()]).unwrap()
}

pub fn valid_form() -> CheckoutForm {
    CheckoutForm::new("A B", "a@b.com", "9876543210", OrderType::Pickup)
}
