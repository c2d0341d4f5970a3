use rand::Rng;

use crate::errors::{Result, SelfCalcError};

/// Placeholder description used for generated rows.
pub const DEFAULT_DESCRIPTION: &str = r"\lipsum[2][1-5]";

/// Exclusive upper bound for generated prices, in cents.
const MAX_PRICE_CENTS: u32 = 100_000;

/// A single priced row of the generated table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    description: String,
    price: f64,
}

impl LineItem {
    /// Creates an item, rejecting negative or non-finite prices.
    pub fn new(description: impl Into<String>, price: f64) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(SelfCalcError::InvalidPrice(price));
        }
        Ok(Self {
            description: description.into(),
            price,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Produces `count` items priced uniformly in `[0.00, 1000.00)` with whole-cent
/// precision.
pub fn generate_items<R: Rng + ?Sized>(
    count: usize,
    description: &str,
    rng: &mut R,
) -> Vec<LineItem> {
    (0..count)
        .map(|_| {
            let cents = rng.gen_range(0..MAX_PRICE_CENTS);
            LineItem {
                description: description.to_string(),
                price: f64::from(cents) / 100.0,
            }
        })
        .collect()
}

pub fn generate_items_with_thread_rng(count: usize, description: &str) -> Vec<LineItem> {
    let mut rng = rand::thread_rng();
    generate_items(count, description, &mut rng)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn generates_requested_count_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 10, 250] {
            let items = generate_items(count, DEFAULT_DESCRIPTION, &mut rng);
            assert_eq!(items.len(), count);
            for item in &items {
                assert!((0.0..1000.0).contains(&item.price()), "{}", item.price());
                assert_eq!(item.description(), DEFAULT_DESCRIPTION);
            }
        }
    }

    #[test]
    fn generated_prices_have_at_most_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        for item in generate_items(500, "x", &mut rng) {
            let cents = item.price() * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{}", item.price());
        }
    }

    #[test]
    fn new_rejects_invalid_prices() {
        assert!(matches!(
            LineItem::new("neg", -0.01),
            Err(SelfCalcError::InvalidPrice(_))
        ));
        assert!(LineItem::new("nan", f64::NAN).is_err());
        assert!(LineItem::new("inf", f64::INFINITY).is_err());
        assert_eq!(LineItem::new("zero", 0.0).unwrap().price(), 0.0);
    }
}
