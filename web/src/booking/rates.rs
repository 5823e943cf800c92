use serde::{Deserialize, Serialize};

/// Fee schedule for the listing, in whole rupees. Provided to the UI through
/// context so the pricing math can be exercised against any table, but the
/// product ships exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub nightly_rate: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub discount: i64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            nightly_rate: 4999,
            cleaning_fee: 499,
            service_fee: 299,
            discount: 2098,
        }
    }
}

/// Price breakdown for one stay. Derived from the rate table on every read,
/// never stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub nights: i64,
    pub base_price: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub discount: i64,
    pub total: i64,
}

impl RateTable {
    /// Quote a stay of `nights`. Zero nights means the date range is still
    /// incomplete; callers gate on `nights >= 1` before showing a quote.
    pub fn quote(&self, nights: i64) -> PriceQuote {
        let base_price = self.nightly_rate * nights;
        PriceQuote {
            nights,
            base_price,
            cleaning_fee: self.cleaning_fee,
            service_fee: self.service_fee,
            discount: self.discount,
            total: base_price + self.cleaning_fee + self.service_fee - self.discount,
        }
    }
}

/// Group digits in threes for display, e.g. 14997 -> "14,997". The displayed
/// totals must match the computed totals exactly, so this only inserts
/// separators and never rounds.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_uses_exact_arithmetic() {
        let rates = RateTable::default();
        let quote = rates.quote(3);

        assert_eq!(quote.base_price, 14997);
        assert_eq!(quote.cleaning_fee, 499);
        assert_eq!(quote.service_fee, 299);
        assert_eq!(quote.discount, 2098);
        assert_eq!(quote.total, 14997 + 499 + 299 - 2098);
        assert_eq!(quote.total, 13697);
    }

    #[test]
    fn quote_single_night() {
        let quote = RateTable::default().quote(1);
        assert_eq!(quote.base_price, 4999);
        assert_eq!(quote.total, 3699);
    }

    #[test]
    fn quote_respects_injected_table() {
        let rates = RateTable {
            nightly_rate: 100,
            cleaning_fee: 10,
            service_fee: 5,
            discount: 15,
        };
        let quote = rates.quote(2);
        assert_eq!(quote.base_price, 200);
        assert_eq!(quote.total, 200);
    }

    #[test]
    fn format_amount_groups_digits() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(499), "499");
        assert_eq!(format_amount(4999), "4,999");
        assert_eq!(format_amount(14997), "14,997");
        assert_eq!(format_amount(1234567), "1,234,567");
        assert_eq!(format_amount(-2098), "-2,098");
    }
}
