//! Order placement.

use tracing::info;

use crate::cart::CartStore;
use crate::checkout::{CheckoutForm, OrderReceipt, TrackingCode};
use crate::clock::Clock;
use crate::error::CommerceError;

/// Place an order for everything in the cart.
///
/// The form is checked first and the cart is left untouched if it fails.
/// On success the cart is cleared and its former contents are returned in
/// the receipt. Nothing is sent anywhere.
pub fn submit_order(
    form: &CheckoutForm,
    cart: &mut CartStore,
    clock: &dyn Clock,
) -> Result<OrderReceipt, CommerceError> {
    form.validate()?;

    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let placed_at = clock.now();
    let receipt = OrderReceipt {
        tracking_code: TrackingCode::from_time(&placed_at),
        placed_at,
        items: cart.items().to_vec(),
        total: cart.total(),
        address: form.address.clone(),
        phone: form.phone.clone(),
    };
    cart.clear();

    info!(
        tracking_code = %receipt.tracking_code,
        total = receipt.total.amount,
        items = receipt.items.len(),
        "order placed"
    );
    Ok(receipt)
}
