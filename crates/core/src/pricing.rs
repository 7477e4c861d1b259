//! Pricing
//!
//! The one pricing rule shared by the cart display and the order writer: line totals are
//! summed, a flat shipping fee is charged when there is anything to ship and no tax is
//! applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat shipping fee charged on every non-empty order.
pub const FLAT_SHIPPING_FEE: Decimal = Decimal::TEN;

/// Something that contributes a priced quantity to an order.
pub trait OrderLine {
    /// Unit price captured for the line.
    fn unit_price(&self) -> Decimal;

    /// Number of units on the line.
    fn quantity(&self) -> u32;

    /// `unit_price × quantity`, saturating at the decimal range.
    fn line_total(&self) -> Decimal {
        self.unit_price()
            .saturating_mul(Decimal::from(self.quantity()))
    }
}

impl<L: OrderLine + ?Sized> OrderLine for &L {
    fn unit_price(&self) -> Decimal {
        (**self).unit_price()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }
}

/// Derived order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of quantities.
    pub total_items: u64,

    /// Sum of `price × quantity`.
    pub subtotal: Decimal,

    /// Shipping charge, [`FLAT_SHIPPING_FEE`] when there is at least one line.
    pub shipping: Decimal,

    /// Always zero.
    pub tax: Decimal,

    /// `subtotal + shipping + tax`.
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals over the given lines.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: OrderLine,
    {
        let mut any_lines = false;

        let (total_items, subtotal) =
            lines
                .into_iter()
                .fold((0_u64, Decimal::ZERO), |(count, subtotal), line| {
                    any_lines = true;

                    (
                        count.saturating_add(u64::from(line.quantity())),
                        subtotal.saturating_add(line.line_total()),
                    )
                });

        let shipping = if any_lines {
            FLAT_SHIPPING_FEE
        } else {
            Decimal::ZERO
        };

        let tax = Decimal::ZERO;

        Self {
            total_items,
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
        }
    }

    /// Whether the totals were computed over no lines at all.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}
