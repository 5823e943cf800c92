use chrono::NaiveDate;

/// The selected check-in/check-out pair. The pair always satisfies
/// `check_in <= check_out`; setters clamp rather than reject so the widget
/// never has to surface a range error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Fresh selection: both dates start on `today`, which leaves the range
    /// at zero nights until the guest picks a checkout.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            check_in: today,
            check_out: today,
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Moving check-in past the current check-out drags check-out forward to
    /// the same day (auto-advance policy, see DESIGN.md).
    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.check_in = date;
        if self.check_out < date {
            self.check_out = date;
        }
    }

    /// The checkout picker is min-bounded to check-in, so an earlier date can
    /// only arrive programmatically; it clamps up to check-in.
    pub fn set_check_out(&mut self, date: NaiveDate) {
        self.check_out = date.max(self.check_in);
    }

    /// Whole nights between the two dates. Zero means the selection is still
    /// incomplete and must not be quoted.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).expect("valid test date")
    }

    #[test]
    fn nights_is_whole_day_difference() {
        let mut stay = StayDates::starting(day(1));
        stay.set_check_out(day(3));
        assert_eq!(stay.nights(), 2);
    }

    #[test]
    fn fresh_selection_has_zero_nights() {
        let stay = StayDates::starting(day(10));
        assert_eq!(stay.nights(), 0);
        assert_eq!(stay.check_in(), stay.check_out());
    }

    #[test]
    fn check_in_past_check_out_advances_check_out() {
        let mut stay = StayDates::starting(day(1));
        stay.set_check_out(day(4));
        stay.set_check_in(day(8));

        assert_eq!(stay.check_in(), day(8));
        assert_eq!(stay.check_out(), day(8));
        assert_eq!(stay.nights(), 0);
    }

    #[test]
    fn check_in_within_range_leaves_check_out_alone() {
        let mut stay = StayDates::starting(day(1));
        stay.set_check_out(day(9));
        stay.set_check_in(day(5));

        assert_eq!(stay.check_out(), day(9));
        assert_eq!(stay.nights(), 4);
    }

    #[test]
    fn check_out_before_check_in_clamps() {
        let mut stay = StayDates::starting(day(6));
        stay.set_check_out(day(2));

        assert_eq!(stay.check_out(), day(6));
        assert_eq!(stay.nights(), 0);
    }

    #[test]
    fn nights_spans_month_boundary() {
        let mut stay = StayDates::starting(day(30));
        stay.set_check_out(NaiveDate::from_ymd_opt(2026, 9, 2).expect("valid test date"));
        assert_eq!(stay.nights(), 3);
    }
}
