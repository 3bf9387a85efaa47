use crate::model::money::format_currency;

use super::state::CheckoutState;

/// Consumes loaded checkout state. Nothing is reported back to the loader.
pub trait Renderer {
    fn render(&mut self, state: &CheckoutState);
}

impl<F: FnMut(&CheckoutState)> Renderer for F {
    fn render(&mut self, state: &CheckoutState) {
        self(state)
    }
}

/// Writes the order and payment summaries as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, state: &CheckoutState) {
        for (item, product) in state.order_lines() {
            match product {
                Some(p) => tracing::info!(
                    product = p.id(),
                    title = p.name(),
                    price = %p.price(),
                    quantity = item.quantity,
                    delivery_option = %item.delivery_option_id,
                    "order line"
                ),
                None => tracing::warn!(product = %item.product_id, "cart refers to unknown product"),
            }
        }

        match state.items_total_cents() {
            Some(total) => tracing::info!(
                items = state.cart.quantity(),
                total = %format!("${}", format_currency(total)),
                "payment summary"
            ),
            None => tracing::warn!(
                items = state.cart.quantity(),
                "payment summary total does not fit in cents"
            ),
        }
    }
}
