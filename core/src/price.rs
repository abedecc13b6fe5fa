use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An amount in Bolivianos.
///
/// Menu prices and surcharges are whole amounts, so the value is kept as an
/// unsigned integer and can never be negative. Arithmetic saturates at
/// `u64::MAX` instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Multiplies the price by a quantity.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bs{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_currency_prefix() {
        assert_eq!(Price::new(58).to_string(), "Bs58");
        assert_eq!(Price::ZERO.to_string(), "Bs0");
    }

    #[test]
    fn sums_owned_and_borrowed() {
        let prices = [Price::new(40), Price::new(18)];
        let by_ref: Price = prices.iter().sum();
        let by_val: Price = prices.into_iter().sum();
        assert_eq!(by_ref, Price::new(58));
        assert_eq!(by_val, by_ref);
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Price = std::iter::empty::<Price>().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn times_scales_amount() {
        assert_eq!(Price::new(50).times(3), Price::new(150));
        assert_eq!(Price::new(50).times(0), Price::ZERO);
    }

    #[test]
    fn amounts_past_u32_do_not_wrap() {
        let big = Price::new(u64::from(u32::MAX));
        assert_eq!(big + Price::new(40), Price::new(u64::from(u32::MAX) + 40));
    }

    #[test]
    fn arithmetic_saturates_at_max() {
        let max = Price::new(u64::MAX);
        let mut acc = max;
        acc += Price::new(1);

        assert_eq!(max + Price::new(10), max);
        assert_eq!(acc, max);
        assert_eq!(max.times(2), max);
        assert_eq!([max, max].iter().sum::<Price>(), max);
    }
}
