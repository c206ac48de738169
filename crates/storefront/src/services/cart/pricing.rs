//! Cart pricing.

use rust_decimal::Decimal;
use wighub_core::{CartLine, Totals};

use crate::config::PricingConfig;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Compute subtotal, tax, shipping and total for `lines`.
///
/// - `subtotal = Σ price × quantity`
/// - `tax = subtotal × tax_rate / 100`
/// - `shipping = 0` when `subtotal ≥ free_shipping_threshold`, else `shipping_fee`
/// - `total = subtotal + tax + shipping`
///
/// Nothing is rounded here. An empty cart prices to all zeros rather than
/// the bare shipping fee.
#[must_use]
pub fn compute_totals(lines: &[CartLine], config: &PricingConfig) -> Totals {
    if lines.is_empty() {
        return Totals::default();
    }

    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    let tax = subtotal * config.tax_rate / PERCENT;
    let shipping = if subtotal >= config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.shipping_fee
    };

    Totals {
        subtotal,
        tax,
        shipping,
        total: subtotal + tax + shipping,
    }
}

/// Number of units in the cart (what the cart badge shows).
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use wighub_core::ProductId;

    use super::*;

    fn line(price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(1),
            name: "Kinky Curly".to_owned(),
            category: "Human Hair".to_owned(),
            product_type: "Full Lace".to_owned(),
            price,
            image: None,
            quantity,
        }
    }

    #[test]
    fn test_below_threshold_pays_shipping() {
        let totals = compute_totals(&[line(Decimal::from(50), 1)], &PricingConfig::default());
        assert_eq!(totals.subtotal, Decimal::from(50));
        assert_eq!(totals.tax, Decimal::from(4));
        assert_eq!(totals.shipping, Decimal::from(10));
        assert_eq!(totals.total, Decimal::from(64));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let totals = compute_totals(&[line(Decimal::from(75), 1)], &PricingConfig::default());
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(81));
    }

    #[test]
    fn test_quantities_multiply() {
        let totals = compute_totals(&[line(Decimal::new(8999, 2), 2)], &PricingConfig::default());
        assert_eq!(totals.subtotal, Decimal::new(17998, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_not_rounded() {
        let config = PricingConfig {
            tax_rate: Decimal::new(75, 1),
            ..PricingConfig::default()
        };
        let totals = compute_totals(&[line(Decimal::new(1999, 2), 1)], &config);
        // 19.99 × 7.5% = 1.49925
        assert_eq!(totals.tax, Decimal::new(149_925, 5));
        assert_eq!(totals.total, Decimal::new(3_148_925, 5));
    }

    #[test]
    fn test_repeated_cent_amounts_do_not_drift() {
        let lines: Vec<CartLine> = (0..1000).map(|_| line(Decimal::new(1, 1), 1)).collect();
        let totals = compute_totals(&lines, &PricingConfig::default());
        assert_eq!(totals.subtotal, Decimal::from(100));
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = compute_totals(&[], &PricingConfig::default());
        assert_eq!(totals, Totals::default());
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let lines = [line(Decimal::ONE, 2), line(Decimal::ONE, 3)];
        assert_eq!(item_count(&lines), 5);
    }
}
