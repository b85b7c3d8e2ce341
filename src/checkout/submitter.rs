use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::{CheckoutError, CheckoutForm, Notice};
use crate::cart::CartStore;
use crate::order::{NewOrderItem, OrderId, OrderService};

/// Where the checkout flow currently stands.
///
/// ```text
/// Idle -> Validating -> Submitting -> Succeeded | Failed
///           |
///           +-> Idle (field errors)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded { order_id: OrderId },
    Failed { notice: Notice },
}

/// Called with every state the submitter enters, before the work of that
/// state starts.
pub type TransitionObserver = Arc<dyn Fn(&CheckoutState) + Send + Sync>;

/// Drives one checkout submission at a time against an order service.
///
/// The cart is borrowed mutably for the whole submission, so it cannot change
/// between the header write and the items write. Because of that borrow the
/// intermediate states are only visible through [`transitions`] or an
/// observer installed with [`with_observer`].
///
/// [`transitions`]: CheckoutSubmitter::transitions
/// [`with_observer`]: CheckoutSubmitter::with_observer
#[derive(Default)]
pub struct CheckoutSubmitter {
    state: CheckoutState,
    transitions: Vec<CheckoutState>,
    observer: Option<TransitionObserver>,
}

impl fmt::Debug for CheckoutSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutSubmitter")
            .field("state", &self.state)
            .field("transitions", &self.transitions)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl CheckoutSubmitter {
    /// A submitter in `Idle` with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify `observer` on every state change.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&CheckoutState) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// States entered during the most recent [`submit`](CheckoutSubmitter::submit),
    /// in order. Empty when that call was turned away on an empty cart.
    pub fn transitions(&self) -> &[CheckoutState] {
        &self.transitions
    }

    /// Back to `Idle`, e.g. when the checkout view is re-entered.
    pub fn reset(&mut self) {
        self.transitions.clear();
        self.state = CheckoutState::Idle;
    }

    /// Validate `form`, write the order header, then its items, then clear
    /// the cart.
    ///
    /// On an empty cart or invalid form nothing is sent and the state stays
    /// `Idle`. On a write failure the state becomes `Failed` and the cart is
    /// left as it was so the customer can retry. If the items write fails,
    /// the already-created header is deleted again.
    pub async fn submit<S>(
        &mut self,
        cart: &mut CartStore,
        form: &CheckoutForm,
        service: &S,
    ) -> Result<OrderId, CheckoutError>
    where
        S: OrderService + ?Sized,
    {
        self.transitions.clear();
        if cart.is_empty() {
            warn!("checkout attempted with an empty cart");
            self.state = CheckoutState::Idle;
            return Err(CheckoutError::EmptyCart);
        }

        self.enter(CheckoutState::Validating);
        let validated = match form.validate() {
            Ok(validated) => validated,
            Err(errors) => {
                info!(fields = errors.len(), "checkout form rejected");
                self.enter(CheckoutState::Idle);
                return Err(errors.into());
            }
        };

        self.enter(CheckoutState::Submitting);
        let total_amount = cart.total_amount();
        let order = match service.create_order(validated.into_new_order(total_amount)).await {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "order header write failed");
                return Err(self.fail(CheckoutError::OrderWrite(e)));
            }
        };

        let items: Vec<NewOrderItem> = cart.lines().iter().map(NewOrderItem::from_line).collect();
        if let Err(e) = service.create_order_items(&order.id, items).await {
            error!(order_id = %order.id, error = %e, "order items write failed");
            let compensated = compensate(service, &order.id).await;
            return Err(self.fail(CheckoutError::ItemsWrite {
                order_id: order.id,
                source: e,
                compensated,
            }));
        }

        cart.clear_cart();
        info!(order_id = %order.id, total = total_amount, "order placed");
        self.enter(CheckoutState::Succeeded {
            order_id: order.id.clone(),
        });
        Ok(order.id)
    }

    fn enter(&mut self, state: CheckoutState) {
        debug!(?state, "checkout state changed");
        if let Some(observer) = &self.observer {
            observer(&state);
        }
        self.transitions.push(state.clone());
        self.state = state;
    }

    fn fail(&mut self, err: CheckoutError) -> CheckoutError {
        self.enter(CheckoutState::Failed {
            notice: err.notice().unwrap_or(Notice::ORDER_FAILED),
        });
        err
    }
}

/// Delete a header whose items never made it. Returns false only when the
/// delete call fails; a header that is already gone counts as removed.
async fn compensate<S>(service: &S, order_id: &OrderId) -> bool
where
    S: OrderService + ?Sized,
{
    match service.delete_order(order_id).await {
        Ok(existed) => {
            info!(order_id = %order_id, existed, "orphaned order header removed");
            true
        }
        Err(e) => {
            error!(order_id = %order_id, error = %e, "failed to remove orphaned order header");
            false
        }
    }
}
