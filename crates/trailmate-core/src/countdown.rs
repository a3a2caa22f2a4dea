//! Countdown runtime for SOS sessions.
//!
//! [`TickScheduler`] hands out repeating callbacks with a [`TimerHandle`]; cancelling or dropping
//! the handle stops the timer. [`LiveAlertSession`] drives an [`EmergencyAlertController`] from
//! one such timer and fires the dispatch notification when the countdown runs out.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use crate::alert::{AlertSession, ConfirmationPrompt, EmergencyAlertController, Transition};
use crate::contacts::EmergencyContact;
use crate::dispatch::{DispatchNotice, DispatchNotifier};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Returned by a tick callback to keep or stop its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

pub type TickCallback = Box<dyn FnMut() -> TickFlow + Send + 'static>;

/// Cancel handle for a scheduled callback. Dropping it cancels too.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.fire();
    }

    /// Forgets the cancel action, e.g. when the timer task is ending on its own.
    fn disarm(mut self) {
        self.cancel = None;
    }

    fn fire(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.fire();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

pub trait TickScheduler: Send + Sync {
    /// Calls `tick` every `period` (first call one period from now) until it returns
    /// [`TickFlow::Stop`] or the handle is cancelled.
    fn schedule_repeating(&self, period: Duration, tick: TickCallback) -> TimerHandle;
}

/// Runs each timer as a task on the current tokio runtime; cancel aborts the task.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TickScheduler for TokioScheduler {
    fn schedule_repeating(&self, period: Duration, mut tick: TickCallback) -> TimerHandle {
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if tick() == TickFlow::Stop {
                    break;
                }
            }
        });
        let abort = task.abort_handle();
        TimerHandle::new(move || abort.abort())
    }
}

struct SessionCore {
    controller: EmergencyAlertController,
    timer: Option<TimerHandle>,
    // Bumped whenever a timer is started or dropped so stale ticks can recognise themselves.
    generation: u64,
}

impl SessionCore {
    fn drop_timer(&mut self) {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

/// One device's SOS session with its countdown timer.
pub struct LiveAlertSession {
    device: String,
    core: Arc<Mutex<SessionCore>>,
    scheduler: Arc<dyn TickScheduler>,
    notifier: Arc<dyn DispatchNotifier>,
    contacts: Vec<EmergencyContact>,
}

impl LiveAlertSession {
    pub fn new(
        device: impl Into<String>,
        scheduler: Arc<dyn TickScheduler>,
        notifier: Arc<dyn DispatchNotifier>,
        contacts: Vec<EmergencyContact>,
    ) -> Self {
        Self {
            device: device.into(),
            core: Arc::new(Mutex::new(SessionCore {
                controller: EmergencyAlertController::new(),
                timer: None,
                generation: 0,
            })),
            scheduler,
            notifier,
            contacts,
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn snapshot(&self) -> AlertSession {
        lock(&self.core).controller.session()
    }

    pub fn has_timer(&self) -> bool {
        lock(&self.core).timer.is_some()
    }

    pub fn activate(&self, prompt: &dyn ConfirmationPrompt) -> Transition {
        let mut core = lock(&self.core);
        let transition = core.controller.activate(prompt);
        if !transition.applied() {
            return transition;
        }
        core.drop_timer();
        let generation = core.generation;
        let callback = self.tick_callback(Arc::downgrade(&self.core), generation);
        core.timer = Some(self.scheduler.schedule_repeating(TICK_PERIOD, callback));
        tracing::info!("[TRAILMATE SOS] {} countdown started", self.device);
        transition
    }

    pub fn cancel(&self) -> Transition {
        let mut core = lock(&self.core);
        let transition = core.controller.cancel();
        if transition.applied() {
            core.drop_timer();
            tracing::info!("[TRAILMATE SOS] {} alert cancelled", self.device);
        }
        transition
    }

    pub fn acknowledge(&self) -> Transition {
        let transition = lock(&self.core).controller.acknowledge();
        if transition.applied() {
            tracing::info!("[TRAILMATE SOS] {} acknowledged dispatched alert", self.device);
        }
        transition
    }

    pub fn share_location(&self) -> Transition {
        let transition = lock(&self.core).controller.share_location();
        tracing::info!("[TRAILMATE SOS] {} shared live location", self.device);
        transition
    }

    fn tick_callback(&self, core: Weak<Mutex<SessionCore>>, generation: u64) -> TickCallback {
        let device = self.device.clone();
        let notifier = Arc::clone(&self.notifier);
        let contacts = self.contacts.clone();
        Box::new(move || {
            let Some(core) = core.upgrade() else {
                return TickFlow::Stop;
            };
            let notice = {
                let mut guard = lock(&core);
                if guard.generation != generation {
                    return TickFlow::Stop;
                }
                let transition = guard.controller.tick();
                if !transition.dispatched() {
                    return if transition.applied() { TickFlow::Continue } else { TickFlow::Stop };
                }
                // The running task is the one being stopped; returning Stop ends it.
                guard.generation += 1;
                if let Some(timer) = guard.timer.take() {
                    timer.disarm();
                }
                DispatchNotice::new(&device, &guard.controller.session(), contacts.clone())
            };
            notifier.notify(&notice);
            TickFlow::Stop
        })
    }
}

impl Drop for LiveAlertSession {
    fn drop(&mut self) {
        lock(&self.core).drop_timer();
    }
}

fn lock(core: &Mutex<SessionCore>) -> MutexGuard<'_, SessionCore> {
    core.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingNotifier(AtomicUsize);

    impl DispatchNotifier for CountingNotifier {
        fn notify(&self, _notice: &DispatchNotice) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session(notifier: Arc<CountingNotifier>) -> LiveAlertSession {
        LiveAlertSession::new("test-device", Arc::new(TokioScheduler), notifier, Vec::new())
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_dispatches_once_after_ten_seconds() {
        let notifier = Arc::new(CountingNotifier::default());
        let s = session(Arc::clone(&notifier));
        assert!(s.activate(&true).applied());
        assert!(s.has_timer());

        tokio::time::sleep(Duration::from_millis(9_500)).await;
        assert_eq!(s.snapshot().status, AlertStatus::CountingDown);
        assert_eq!(s.snapshot().seconds_remaining, 1);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let snap = s.snapshot();
        assert_eq!(snap.status, AlertStatus::Dispatched);
        assert!(snap.location_shared);
        assert!(!s.has_timer());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking() {
        let notifier = Arc::new(CountingNotifier::default());
        let s = session(Arc::clone(&notifier));
        s.activate(&true);
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(s.snapshot().seconds_remaining, 7);

        assert!(s.cancel().applied());
        assert!(!s.has_timer());
        tokio::time::sleep(Duration::from_secs(20)).await;
        let snap = s.snapshot();
        assert_eq!(snap.status, AlertStatus::Idle);
        assert_eq!(snap.seconds_remaining, 0);
        assert_eq!(notifier.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reactivation_runs_a_single_timer() {
        let notifier = Arc::new(CountingNotifier::default());
        let s = session(Arc::clone(&notifier));
        s.activate(&true);
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        s.cancel();
        s.activate(&true);
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        assert_eq!(s.snapshot().seconds_remaining, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn declined_activation_schedules_nothing() {
        let s = session(Arc::new(CountingNotifier::default()));
        assert!(!s.activate(&false).applied());
        assert!(!s.has_timer());
    }

    #[test]
    fn dropped_handle_runs_cancel() {
        let fired = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&fired);
        drop(TimerHandle::new(move || {
            f.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
