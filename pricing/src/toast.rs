//! Visibility state machine of the auto-dismissing toast.
//!
//! The machine owns no timers. Every transition that needs one returns a
//! [`TimerRequest`]; the driver keeps at most one pending timer per machine,
//! cancels it whenever [`ToastMachine::request`] is called, and feeds the
//! ticket back through [`ToastMachine::fire`] when the timer elapses.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_EXIT: Duration = Duration::from_millis(300);
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// Time from the show request until the hide animation starts.
    pub duration: Duration,
    /// Length of the hide animation before the close callback fires.
    pub exit: Duration,
    /// Deferral before the toast is marked displayed, so the hidden state renders once.
    pub enter_delay: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            exit: DEFAULT_EXIT,
            enter_delay: DEFAULT_ENTER_DELAY,
        }
    }
}

impl ToastConfig {
    /// Upper bound from a show request to the close callback.
    pub fn lifetime(&self) -> Duration {
        self.duration.max(self.enter_delay) + self.exit
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

/// The page's show flag.
///
/// Every [`show`](ToastTrigger::show) yields a value different from the last, so
/// a repeated request still reaches observers that only react to changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastTrigger {
    visible: bool,
    serial: u64,
}

impl ToastTrigger {
    pub fn show(&mut self) {
        self.visible = true;
        self.serial += 1;
    }

    pub fn reset(&mut self) {
        self.visible = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Number of show requests so far.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub ticket: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    /// Arm the next timer in place of the one that just fired.
    Schedule(TimerRequest),
    /// The hide animation finished; notify the owner exactly once.
    Closed,
    /// The ticket no longer belongs to this machine's pending timer.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMachine {
    config: ToastConfig,
    phase: ToastPhase,
    requested: bool,
    displayed: bool,
    ticket: u64,
}

impl ToastMachine {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            phase: ToastPhase::Hidden,
            requested: false,
            displayed: false,
            ticket: 0,
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Whether the toast is in its shown animation state.
    ///
    /// Set when the enter delay elapses and cleared only when the hide animation
    /// starts or the request is withdrawn; restarting a shown toast keeps it set.
    pub fn displayed(&self) -> bool {
        self.displayed
    }

    /// Whether the toast element is present at all.
    pub fn mounted(&self) -> bool {
        self.requested || self.displayed()
    }

    pub fn class(&self) -> &'static str {
        if self.displayed() {
            "toast show"
        } else {
            "toast hide"
        }
    }

    /// Applies the owner's `show` flag. Any previously issued ticket becomes stale.
    ///
    /// A `true` request always restarts the cycle from [`ToastPhase::Appearing`],
    /// even when the toast is already showing.
    pub fn request(&mut self, visible: bool) -> Option<TimerRequest> {
        self.requested = visible;
        if visible {
            tracing::debug!(from = ?self.phase, "Toast show requested");
            self.phase = ToastPhase::Appearing;
            Some(self.arm(self.config.enter_delay))
        } else {
            if self.phase != ToastPhase::Hidden {
                tracing::debug!(from = ?self.phase, "Toast reset");
            }
            self.ticket += 1;
            self.phase = ToastPhase::Hidden;
            self.displayed = false;
            None
        }
    }

    pub fn fire(&mut self, ticket: u64) -> ToastStep {
        if ticket != self.ticket {
            tracing::debug!(ticket, current = self.ticket, "Ignoring stale toast timer");
            return ToastStep::Stale;
        }

        match self.phase {
            ToastPhase::Appearing => {
                self.phase = ToastPhase::Visible;
                self.displayed = true;
                let remaining = self.config.duration.saturating_sub(self.config.enter_delay);
                ToastStep::Schedule(self.arm(remaining))
            }
            ToastPhase::Visible => {
                self.phase = ToastPhase::Disappearing;
                self.displayed = false;
                ToastStep::Schedule(self.arm(self.config.exit))
            }
            ToastPhase::Disappearing => {
                self.ticket += 1;
                self.phase = ToastPhase::Hidden;
                tracing::debug!("Toast closed");
                ToastStep::Closed
            }
            ToastPhase::Hidden => ToastStep::Stale,
        }
    }

    fn arm(&mut self, delay: Duration) -> TimerRequest {
        self.ticket += 1;
        TimerRequest {
            ticket: self.ticket,
            delay,
        }
    }
}

impl Default for ToastMachine {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}
