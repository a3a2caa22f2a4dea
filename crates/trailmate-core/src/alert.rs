//! Emergency alert state machine.
//!
//! `Idle -> CountingDown(n) -> Dispatched -> Idle`. Every transition is total: calls made
//! from a state where they do not apply leave the session untouched and report
//! [`Transition::Ignored`]. Timers and notifications live outside this type (see
//! [`crate::countdown`]); the controller only owns the session data.

use serde::{Deserialize, Serialize};

/// Countdown length in seconds once the user confirms activation.
pub const COUNTDOWN_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[default]
    Idle,
    CountingDown,
    Dispatched,
}

/// Where the most recent location share came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOrigin {
    /// Automatic share on entering `Dispatched`.
    Dispatch,
    /// The "Share Location" quick action.
    Manual,
}

/// Snapshot of one SOS session as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSession {
    pub status: AlertStatus,
    pub seconds_remaining: u32,
    pub location_shared: bool,
    pub share_origin: Option<ShareOrigin>,
}

/// Outcome of a transition call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The call did not apply to the current state; nothing changed.
    Ignored,
    /// The session moved (or, for `share_location`, updated) and is now in this status.
    Applied(AlertStatus),
}

impl Transition {
    pub fn applied(self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    /// True when this transition entered `Dispatched`.
    pub fn dispatched(self) -> bool {
        self == Transition::Applied(AlertStatus::Dispatched)
    }
}

/// Collaborator asked before a countdown may start.
pub trait ConfirmationPrompt {
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// A pre-answered prompt, e.g. the `confirmed` flag of an HTTP request.
impl ConfirmationPrompt for bool {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        *self
    }
}

pub const ACTIVATE_PROMPT_TITLE: &str = "Activate SOS?";
pub const ACTIVATE_PROMPT_MESSAGE: &str =
    "This will send your location to emergency contacts and local authorities after 10 seconds.";

#[derive(Debug, Default)]
pub struct EmergencyAlertController {
    session: AlertSession,
}

impl EmergencyAlertController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> AlertSession {
        self.session
    }

    pub fn status(&self) -> AlertStatus {
        self.session.status
    }

    /// Starts the countdown from `Idle` once `prompt` confirms.
    pub fn activate(&mut self, prompt: &dyn ConfirmationPrompt) -> Transition {
        if self.session.status != AlertStatus::Idle {
            return Transition::Ignored;
        }
        if !prompt.confirm(ACTIVATE_PROMPT_TITLE, ACTIVATE_PROMPT_MESSAGE) {
            return Transition::Ignored;
        }
        self.session.status = AlertStatus::CountingDown;
        self.session.seconds_remaining = COUNTDOWN_SECS;
        Transition::Applied(AlertStatus::CountingDown)
    }

    /// One second elapsed. Reaching zero enters `Dispatched` and shares location.
    pub fn tick(&mut self) -> Transition {
        if self.session.status != AlertStatus::CountingDown || self.session.seconds_remaining == 0 {
            return Transition::Ignored;
        }
        self.session.seconds_remaining -= 1;
        if self.session.seconds_remaining > 0 {
            return Transition::Applied(AlertStatus::CountingDown);
        }
        self.session.status = AlertStatus::Dispatched;
        self.share(ShareOrigin::Dispatch);
        Transition::Applied(AlertStatus::Dispatched)
    }

    pub fn cancel(&mut self) -> Transition {
        if self.session.status != AlertStatus::CountingDown {
            return Transition::Ignored;
        }
        self.session.status = AlertStatus::Idle;
        self.session.seconds_remaining = 0;
        Transition::Applied(AlertStatus::Idle)
    }

    pub fn acknowledge(&mut self) -> Transition {
        if self.session.status != AlertStatus::Dispatched {
            return Transition::Ignored;
        }
        self.session = AlertSession::default();
        Transition::Applied(AlertStatus::Idle)
    }

    /// Manual share; allowed in any state and never changes `status`.
    pub fn share_location(&mut self) -> Transition {
        self.share(ShareOrigin::Manual);
        Transition::Applied(self.session.status)
    }

    fn share(&mut self, origin: ShareOrigin) {
        self.session.location_shared = true;
        self.session.share_origin = Some(origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> EmergencyAlertController {
        let mut c = EmergencyAlertController::new();
        assert!(c.activate(&true).applied());
        c
    }

    #[test]
    fn declined_prompt_stays_idle() {
        let mut c = EmergencyAlertController::new();
        assert_eq!(c.activate(&false), Transition::Ignored);
        assert_eq!(c.session(), AlertSession::default());
    }

    #[test]
    fn activate_starts_full_countdown() {
        let c = counting();
        assert_eq!(c.status(), AlertStatus::CountingDown);
        assert_eq!(c.session().seconds_remaining, COUNTDOWN_SECS);
    }

    #[test]
    fn activate_is_ignored_outside_idle() {
        let mut c = counting();
        c.tick();
        let before = c.session();
        assert_eq!(c.activate(&true), Transition::Ignored);
        assert_eq!(c.session(), before);

        for _ in 0..9 {
            c.tick();
        }
        let before = c.session();
        assert_eq!(before.status, AlertStatus::Dispatched);
        assert_eq!(c.activate(&true), Transition::Ignored);
        assert_eq!(c.session(), before);
    }

    #[test]
    fn last_tick_dispatches_and_shares() {
        let mut c = counting();
        for _ in 0..9 {
            assert_eq!(c.tick(), Transition::Applied(AlertStatus::CountingDown));
        }
        assert!(!c.session().location_shared);
        assert!(c.tick().dispatched());
        let s = c.session();
        assert_eq!(s.status, AlertStatus::Dispatched);
        assert_eq!(s.seconds_remaining, 0);
        assert!(s.location_shared);
        assert_eq!(s.share_origin, Some(ShareOrigin::Dispatch));
    }

    #[test]
    fn tick_outside_countdown_is_ignored() {
        let mut c = EmergencyAlertController::new();
        assert_eq!(c.tick(), Transition::Ignored);
        assert_eq!(c.session(), AlertSession::default());
    }

    #[test]
    fn cancel_is_noop_when_idle_or_dispatched() {
        let mut c = EmergencyAlertController::new();
        assert_eq!(c.cancel(), Transition::Ignored);

        let mut c = counting();
        for _ in 0..10 {
            c.tick();
        }
        let before = c.session();
        assert_eq!(c.cancel(), Transition::Ignored);
        assert_eq!(c.session(), before);
    }

    #[test]
    fn cancel_keeps_manual_share() {
        let mut c = counting();
        c.share_location();
        c.cancel();
        assert_eq!(c.status(), AlertStatus::Idle);
        assert!(c.session().location_shared);
        assert_eq!(c.session().share_origin, Some(ShareOrigin::Manual));
    }

    #[test]
    fn share_location_never_moves_status() {
        let mut c = counting();
        c.tick();
        assert_eq!(c.share_location(), Transition::Applied(AlertStatus::CountingDown));
        assert_eq!(c.session().seconds_remaining, COUNTDOWN_SECS - 1);
    }
}
