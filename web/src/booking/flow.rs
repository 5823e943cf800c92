/// How long the simulated payment step runs before confirming, in
/// milliseconds. The delay always ends in `Confirmed`; there is no failure
/// branch and no cancellation.
pub const SUBMIT_DELAY_MS: i32 = 2_000;

/// Lifecycle of one reservation attempt:
/// `Idle -> FormOpen -> Submitting -> Confirmed -> Idle`.
///
/// Every transition method returns whether it fired; a call from any other
/// state leaves the value untouched. That makes double-clicks on the confirm
/// button (and any other re-entry) harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFlow {
    #[default]
    Idle,
    FormOpen,
    Submitting,
    Confirmed,
}

impl BookingFlow {
    /// Primary call-to-action: open the booking form.
    pub fn open_form(&mut self) -> bool {
        self.step(BookingFlow::Idle, BookingFlow::FormOpen)
    }

    /// Close the form without submitting. Not available while a submission
    /// is in flight.
    pub fn dismiss_form(&mut self) -> bool {
        self.step(BookingFlow::FormOpen, BookingFlow::Idle)
    }

    /// Start the simulated processing step. Returns false when already
    /// submitting, which is the re-entrancy guard for the confirm button.
    pub fn begin_submit(&mut self) -> bool {
        self.step(BookingFlow::FormOpen, BookingFlow::Submitting)
    }

    /// The fixed delay elapsed; the booking is confirmed unconditionally.
    pub fn finish_submit(&mut self) -> bool {
        self.step(BookingFlow::Submitting, BookingFlow::Confirmed)
    }

    /// The guest dismissed the confirmation dialog.
    pub fn acknowledge(&mut self) -> bool {
        self.step(BookingFlow::Confirmed, BookingFlow::Idle)
    }

    pub fn is_form_visible(&self) -> bool {
        matches!(self, BookingFlow::FormOpen | BookingFlow::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, BookingFlow::Submitting)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingFlow::Confirmed)
    }

    fn step(&mut self, from: BookingFlow, to: BookingFlow) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut flow = BookingFlow::default();
        assert_eq!(flow, BookingFlow::Idle);

        assert!(flow.open_form());
        assert_eq!(flow, BookingFlow::FormOpen);

        assert!(flow.begin_submit());
        assert_eq!(flow, BookingFlow::Submitting);

        assert!(flow.finish_submit());
        assert_eq!(flow, BookingFlow::Confirmed);

        assert!(flow.acknowledge());
        assert_eq!(flow, BookingFlow::Idle);
    }

    #[test]
    fn begin_submit_is_idempotent_under_reentry() {
        let mut flow = BookingFlow::FormOpen;
        assert!(flow.begin_submit());
        assert!(!flow.begin_submit());
        assert_eq!(flow, BookingFlow::Submitting);
    }

    #[test]
    fn submitting_cannot_be_dismissed() {
        let mut flow = BookingFlow::Submitting;
        assert!(!flow.dismiss_form());
        assert_eq!(flow, BookingFlow::Submitting);
    }

    #[test]
    fn submission_confirms_exactly_once() {
        let mut flow = BookingFlow::Submitting;
        assert!(flow.finish_submit());
        assert!(!flow.finish_submit());
        assert_eq!(flow, BookingFlow::Confirmed);
    }

    #[test]
    fn transitions_from_wrong_state_are_noops() {
        let mut flow = BookingFlow::Idle;
        assert!(!flow.begin_submit());
        assert!(!flow.finish_submit());
        assert!(!flow.acknowledge());
        assert!(!flow.dismiss_form());
        assert_eq!(flow, BookingFlow::Idle);
    }

    #[test]
    fn form_can_be_dismissed_without_submitting() {
        let mut flow = BookingFlow::default();
        assert!(flow.open_form());
        assert!(flow.dismiss_form());
        assert_eq!(flow, BookingFlow::Idle);
    }
}
