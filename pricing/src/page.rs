use anyhow::Context;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::card::PlanCard;
use crate::catalog::Catalog;
use crate::config::PageConfig;
use crate::copy::PageCopy;
use crate::toast::{TimerRequest, ToastMachine, ToastPhase, ToastStep, ToastTrigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastView {
    pub message: &'static str,
    pub class: &'static str,
}

#[derive(Debug)]
struct ToastState {
    trigger: ToastTrigger,
    machine: ToastMachine,
    closed: usize,
}

type SharedToast = Arc<Mutex<ToastState>>;

fn lock(state: &SharedToast) -> MutexGuard<'_, ToastState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Headless pricing page: the catalog rendered as cards plus the toast.
///
/// Toast timers run as a Tokio task on the current runtime, so selecting a plan
/// must happen inside one.
#[derive(Debug)]
pub struct PricingPage {
    copy: &'static PageCopy,
    cards: Vec<PlanCard>,
    created: Instant,
    toast: SharedToast,
    timer: Option<JoinHandle<()>>,
}

impl PricingPage {
    pub fn new(config: &PageConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::builtin(config.locale)?;
        Ok(Self::with_catalog(config, &catalog))
    }

    pub fn with_catalog(config: &PageConfig, catalog: &Catalog) -> Self {
        let copy = config.locale.copy();
        Self {
            copy,
            cards: catalog
                .plans()
                .iter()
                .map(|plan| PlanCard::render(plan, copy))
                .collect(),
            created: Instant::now(),
            toast: Arc::new(Mutex::new(ToastState {
                trigger: ToastTrigger::default(),
                machine: ToastMachine::new(config.toast_config()),
                closed: 0,
            })),
            timer: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.copy.title
    }

    pub fn heading(&self) -> &'static str {
        self.copy.heading
    }

    pub fn subtitle(&self) -> &'static str {
        self.copy.subtitle
    }

    pub fn cards(&self) -> &[PlanCard] {
        &self.cards
    }

    pub fn badge_count(&self) -> usize {
        self.cards.iter().filter(|c| c.badge().is_some()).count()
    }

    /// Every card carries exactly one CTA.
    pub fn cta_count(&self) -> usize {
        self.cards.len()
    }

    pub fn click_cta(&mut self, index: usize) -> anyhow::Result<()> {
        let card = self
            .cards
            .get(index)
            .cloned()
            .with_context(|| format!("No plan card at index {index}"))?;

        let mut selected = Ok(());
        card.select(Some(|id: &str| selected = self.select_plan(id)));
        selected
    }

    /// Shows the toast. The same message appears whichever plan was chosen.
    pub fn select_plan(&mut self, plan_id: &str) -> anyhow::Result<()> {
        let runtime = Handle::try_current().context("Toast timers need a Tokio runtime")?;
        tracing::debug!(plan_id, "Plan selected");

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let request = {
            let mut state = lock(&self.toast);
            state.trigger.show();
            let visible = state.trigger.visible();
            state.machine.request(visible)
        };

        if let Some(request) = request {
            let toast = Arc::clone(&self.toast);
            let started = Instant::now();
            self.timer = Some(runtime.spawn(run_timers(toast, started, request)));
        }

        Ok(())
    }

    /// Time since the page was built, on the runtime clock.
    pub fn now(&self) -> Duration {
        Instant::now() - self.created
    }

    pub fn toast(&self) -> Option<ToastView> {
        let state = lock(&self.toast);
        state.machine.mounted().then(|| ToastView {
            message: self.copy.toast_message,
            class: state.machine.class(),
        })
    }

    pub fn toast_visible(&self) -> bool {
        lock(&self.toast).trigger.visible()
    }

    pub fn toast_displayed(&self) -> bool {
        lock(&self.toast).machine.displayed()
    }

    pub fn toast_phase(&self) -> ToastPhase {
        lock(&self.toast).machine.phase()
    }

    /// How many times the toast reported itself closed.
    pub fn closed_count(&self) -> usize {
        lock(&self.toast).closed
    }
}

impl Drop for PricingPage {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

// Deadlines chain from the click instant so a late poll never stretches the cycle.
async fn run_timers(toast: SharedToast, started: Instant, first: TimerRequest) {
    let mut deadline = started;
    let mut next = Some(first);

    while let Some(request) = next.take() {
        deadline += request.delay;
        tokio::time::sleep_until(deadline).await;

        {
            let mut state = lock(&toast);
            match state.machine.fire(request.ticket) {
                ToastStep::Schedule(request) => next = Some(request),
                ToastStep::Closed => {
                    state.closed += 1;
                    state.trigger.reset();
                    let visible = state.trigger.visible();
                    state.machine.request(visible);
                }
                ToastStep::Stale => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn page() -> PricingPage {
        PricingPage::new(&PageConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let page = page();
        assert_eq!(page.title(), "定价方案");
        assert_eq!(page.cards().len(), 3);
        assert_eq!(page.badge_count(), 1);
        assert!(!page.toast_visible());
        assert!(page.toast().is_none());
    }

    #[test]
    fn test_select_outside_runtime_fails() {
        let mut page = page();
        let err = page.select_plan("pro").unwrap_err();
        assert!(err.to_string().contains("Tokio runtime"));
        assert!(!page.toast_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_shows_then_hides() {
        let mut page = page();
        page.click_cta(0).unwrap();
        assert!(page.toast_visible());

        let toast = page.toast().unwrap();
        assert_eq!(toast.message, "功能正在开发中");
        assert_eq!(toast.class, "toast hide");

        advance(10).await;
        assert!(page.toast_displayed());
        assert_eq!(page.toast().unwrap().class, "toast show");

        advance(1989).await;
        assert!(page.toast_displayed());
        advance(1).await;
        assert!(!page.toast_displayed());
        assert_eq!(page.toast_phase(), ToastPhase::Disappearing);
        assert!(page.toast().is_some());

        advance(299).await;
        assert_eq!(page.closed_count(), 0);
        advance(1).await;
        assert_eq!(page.closed_count(), 1);
        assert!(!page.toast_visible());
        assert!(page.toast().is_none());
        assert_eq!(page.now(), Duration::from_millis(2300));

        advance(10_000).await;
        assert_eq!(page.closed_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_card_triggers_the_same_toast() {
        for index in 0..3 {
            let mut page = page();
            page.click_cta(index).unwrap();
            advance(10).await;
            assert_eq!(page.toast().unwrap().message, "功能正在开发中");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_out_of_range() {
        let mut page = page();
        let err = page.click_cta(3).unwrap_err();
        assert!(err.to_string().contains("No plan card at index 3"));
        assert!(!page.toast_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_duration() {
        let config = PageConfig::from_query("toast_ms=500&toast_exit_ms=100");
        let mut page = PricingPage::new(&config).unwrap();
        page.select_plan("pro").unwrap();
        advance(500).await;
        assert!(!page.toast_displayed());
        advance(100).await;
        assert_eq!(page.closed_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_jump_keeps_deadlines() {
        let mut page = page();
        page.click_cta(1).unwrap();
        advance(2299).await;
        assert_eq!(page.toast_phase(), ToastPhase::Disappearing);
        assert_eq!(page.closed_count(), 0);
        advance(1).await;
        assert_eq!(page.closed_count(), 1);
    }
}
