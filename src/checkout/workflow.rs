//! Checkout Workflows
//!
//! Both hosts of the checkout machine live here. [`CheckoutPage`] drives the
//! full checkout page from the cart; [`DirectCheckout`] is the single-product
//! "buy now" modal with the promo sub-flow and live payment polling.
//!
//! Field-level validation runs before any network call and toasts the
//! specific missing field. A failed order creation returns control to the
//! form without discarding entered values.

use super::polling::{StatusPoller, POLL_INTERVAL};
use super::totals::{grand_total, DeliveryMethod};
use crate::api::{
    ApiClient, ApiError, CreateOrderItem, CreateOrderRequest, CreateOrderResponse, OrderStatus,
    ValidatePromoResponse,
};
use crate::cart::CartStore;
use crate::notify::Notifier;
use std::time::Duration;
use tokio::sync::watch;
use tracing::warn;

// =============================================================================
// User-visible messages (kept verbatim from the storefront UI)
// =============================================================================

pub const EMPTY_CART_MESSAGE: &str = "Сагс хоосон байна. Эхлээд бүтээгдэхүүн нэмнэ үү.";
pub const NAME_REQUIRED_MESSAGE: &str = "Нэрээ оруулна уу.";
pub const PHONE_REQUIRED_MESSAGE: &str = "Утасны дугаараа оруулна уу.";
pub const ORDER_CREATED_MESSAGE: &str = "Захиалга үүслээ. QPay-аар төлнө үү.";
pub const ORDER_FAILED_MESSAGE: &str = "Захиалга үүсгэхэд алдаа гарлаа.";
pub const PROMO_INVALID_MESSAGE: &str = "Промо код буруу байна.";
pub const PROMO_CHECK_FAILED_MESSAGE: &str = "Промо код шалгахад алдаа гарлаа.";

// =============================================================================
// Shared machine pieces
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Form,
    Submitting,
    Payment,
}

/// Customer-entered form fields. Values are kept raw as typed and trimmed
/// only when building the order payload, so a failed submit leaves the form
/// exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub delivery_method: DeliveryMethod,
}

impl CheckoutForm {
    /// Client-side preconditions, checked in order; the first violation
    /// aborts the submit with its specific message.
    fn validate(&self, has_items: bool) -> Result<(), &'static str> {
        if !has_items {
            return Err(EMPTY_CART_MESSAGE);
        }
        if self.customer_name.trim().is_empty() {
            return Err(NAME_REQUIRED_MESSAGE);
        }
        if self.customer_phone.trim().is_empty() {
            return Err(PHONE_REQUIRED_MESSAGE);
        }
        Ok(())
    }

    fn payload(
        &self,
        items: Vec<CreateOrderItem>,
        promo_code: Option<String>,
    ) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_email: non_empty_trimmed(&self.customer_email),
            delivery_method: self.delivery_method,
            delivery_address: non_empty_trimmed(&self.delivery_address),
            items,
            promo_code,
        }
    }
}

fn non_empty_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn order_error_message(err: ApiError) -> String {
    match err {
        // Backend `{error}` bodies pass through verbatim
        ApiError::Api { message, .. } => message,
        ApiError::Transport(err) => {
            warn!(error = %err, "order creation transport failure");
            ORDER_FAILED_MESSAGE.to_string()
        }
    }
}

// =============================================================================
// Full checkout page
// =============================================================================

/// Cart-driven checkout. On success the cart is cleared and the page shows a
/// static awaiting-payment display; this host does not poll.
#[derive(Default)]
pub struct CheckoutPage {
    pub form: CheckoutForm,
    step: CheckoutStep,
    order: Option<CreateOrderResponse>,
}

impl CheckoutPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn order(&self) -> Option<&CreateOrderResponse> {
        self.order.as_ref()
    }

    /// Items subtotal + delivery fee; the page host has no promo flow.
    pub fn grand_total(&self, cart: &CartStore) -> u64 {
        grand_total(cart.total_price(), self.form.delivery_method.fee(), 0)
    }

    pub async fn submit(&mut self, api: &ApiClient, cart: &mut CartStore, notifier: &Notifier) {
        if let Err(message) = self.form.validate(!cart.is_empty()) {
            notifier.error(message);
            return;
        }
        self.step = CheckoutStep::Submitting;
        let payload = self.form.payload(cart.order_items(), None);
        match api.create_order(&payload).await {
            Ok(order) => {
                cart.clear();
                self.order = Some(order);
                self.step = CheckoutStep::Payment;
                notifier.success(ORDER_CREATED_MESSAGE);
            }
            Err(err) => {
                self.step = CheckoutStep::Form;
                notifier.error(order_error_message(err));
            }
        }
    }
}

// =============================================================================
// Direct-buy modal
// =============================================================================

/// Single-product "buy now" flow with an optional promo code. Closing the
/// modal resets everything; a reopened modal always creates a fresh order.
pub struct DirectCheckout {
    product: CreateOrderItem,
    pub form: CheckoutForm,
    pub promo_input: String,
    step: CheckoutStep,
    order: Option<CreateOrderResponse>,
    applied_promo: Option<ValidatePromoResponse>,
    poller: Option<StatusPoller>,
    poll_interval: Duration,
}

impl DirectCheckout {
    pub fn new(product: CreateOrderItem) -> Self {
        Self {
            product,
            form: CheckoutForm::default(),
            promo_input: String::new(),
            step: CheckoutStep::default(),
            order: None,
            applied_promo: None,
            poller: None,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Overrides the status poll cadence.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn order(&self) -> Option<&CreateOrderResponse> {
        self.order.as_ref()
    }

    pub fn applied_promo(&self) -> Option<&ValidatePromoResponse> {
        self.applied_promo.as_ref()
    }

    /// Pre-discount subtotal of the single product line.
    pub fn product_total(&self) -> u64 {
        self.product.price * u64::from(self.product.quantity)
    }

    pub fn discount(&self) -> u64 {
        self.applied_promo
            .as_ref()
            .map(ValidatePromoResponse::applied_discount)
            .unwrap_or(0)
    }

    pub fn grand_total(&self) -> u64 {
        grand_total(
            self.product_total(),
            self.form.delivery_method.fee(),
            self.discount(),
        )
    }

    /// Validates the entered promo code against the pre-discount subtotal.
    /// A valid result replaces any previously applied promo; an invalid
    /// result or transport failure clears it and surfaces the reason.
    pub async fn apply_promo(&mut self, api: &ApiClient, notifier: &Notifier) {
        let code = self.promo_input.trim().to_string();
        if code.is_empty() {
            return;
        }
        match api.validate_promo(&code, self.product_total()).await {
            Ok(result) if result.valid => {
                notifier.success(format!(
                    "Промо код амжилттай хэрэглэгдлээ. -{}₮",
                    result.applied_discount()
                ));
                self.applied_promo = Some(result);
            }
            Ok(result) => {
                self.applied_promo = None;
                notifier.error(
                    result
                        .error
                        .unwrap_or_else(|| PROMO_INVALID_MESSAGE.to_string()),
                );
            }
            Err(err) => {
                warn!(error = %err, "promo validation transport failure");
                self.applied_promo = None;
                notifier.error(PROMO_CHECK_FAILED_MESSAGE);
            }
        }
    }

    /// Clears the applied promo. An explicit user action; no re-validation.
    pub fn remove_promo(&mut self) {
        self.applied_promo = None;
        self.promo_input.clear();
    }

    pub async fn submit(&mut self, api: &ApiClient, notifier: &Notifier) {
        if let Err(message) = self.form.validate(true) {
            notifier.error(message);
            return;
        }
        self.step = CheckoutStep::Submitting;
        let promo_code = self
            .applied_promo
            .as_ref()
            .filter(|p| p.valid)
            .and_then(|p| p.code.clone());
        let payload = self
            .form
            .payload(vec![self.product.clone()], promo_code);
        match api.create_order(&payload).await {
            Ok(order) => {
                notifier.success(ORDER_CREATED_MESSAGE);
                // Any poll against a previous order identity dies here.
                self.poller = None;
                if !order.status.is_paid() {
                    self.poller = Some(StatusPoller::spawn_with_interval(
                        api.clone(),
                        order.order_id,
                        order.status,
                        self.poll_interval,
                    ));
                }
                self.order = Some(order);
                self.step = CheckoutStep::Payment;
            }
            Err(err) => {
                self.step = CheckoutStep::Form;
                notifier.error(order_error_message(err));
            }
        }
    }

    /// Last observed payment status for the created order, live-updated by
    /// the poller while it runs.
    pub fn payment_status(&self) -> Option<OrderStatus> {
        match (&self.poller, &self.order) {
            (Some(poller), _) => Some(poller.status()),
            (None, Some(order)) => Some(order.status),
            (None, None) => None,
        }
    }

    /// Receiver for awaiting live status changes; `None` before an order
    /// exists or once polling has been cancelled.
    pub fn status_updates(&self) -> Option<watch::Receiver<OrderStatus>> {
        self.poller.as_ref().map(StatusPoller::subscribe)
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status().is_some_and(OrderStatus::is_paid)
    }

    /// Closes the modal: cancels the active poll and resets all local state
    /// back to initial. Reopening never resumes a half-completed order.
    pub fn close(&mut self) {
        self.poller = None;
        self.step = CheckoutStep::Form;
        self.order = None;
        self.applied_promo = None;
        self.promo_input.clear();
        self.form = CheckoutForm::default();
    }
}
