//! The bookkeeping behind the delayed loading view.
//!
//! A [`LoadingGate`] decides whether the loading view of a [`RemoteView`](crate::component::RemoteView)
//! may be shown yet. It owns a single flag, which never goes back to `false` once
//! set, and at most one pending timer. It knows nothing about Dioxus: timers go
//! through a [`DelayScheduler`], so the same logic runs against Dioxus tasks in
//! the component and against a recording fake in tests.

use std::time::Duration;

/// Something able to run "set the flag and re-render" after a delay.
pub trait DelayScheduler {
    /// Identifies a scheduled timer so it can be cancelled
    type Handle;

    /// Arranges for [`LoadingGate::fire`] to be called once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Suppresses a scheduled timer. Its effect must never be observed afterward.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Gate state: `{flag=false, no timer}` → `{flag=false, timer pending}` → `{flag=true}`.
///
/// # Type Parameters
///
/// * `H` - The timer handle type of the [`DelayScheduler`] in use
#[derive(Debug)]
pub struct LoadingGate<H> {
    may_render_loading: bool,
    pending: Option<H>,
}

impl<H> LoadingGate<H> {
    /// A zero `delay` opens the gate immediately, so the very first `Loading`
    /// render already shows the loading view.
    pub fn new(delay: Duration) -> Self {
        Self {
            may_render_loading: delay.is_zero(),
            pending: None,
        }
    }

    pub fn may_render_loading(&self) -> bool {
        self.may_render_loading
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Called when the data is `Loading`. Returns `true` if the loading view may be
    /// rendered now.
    ///
    /// While the gate is closed, the first call schedules a timer for `delay`.
    /// Later calls made while that timer is pending schedule nothing.
    pub fn render_loading<S>(&mut self, delay: Duration, scheduler: &mut S) -> bool
    where
        S: DelayScheduler<Handle = H>,
    {
        if self.may_render_loading {
            return true;
        }
        if self.pending.is_none() {
            log::debug!("LoadingGate: loading view delayed by {delay:?}");
            self.pending = Some(scheduler.schedule(delay));
        }
        false
    }

    /// Called when a success or failure view is produced: the result is there, a
    /// pending "show loading" timer must not fire anymore.
    pub fn settle<S>(&mut self, scheduler: &mut S)
    where
        S: DelayScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            log::debug!("LoadingGate: settled before the delay elapsed, timer cancelled");
            scheduler.cancel(handle);
        }
    }

    /// Called by the timer once the delay elapsed.
    ///
    /// Opens the gate even if the data is no longer `Loading` by then.
    pub fn fire(&mut self) {
        log::debug!("LoadingGate: delay elapsed, loading view allowed");
        self.pending = None;
        self.may_render_loading = true;
    }

    /// Called when the owning component goes away.
    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: DelayScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            log::debug!("LoadingGate: torn down with a pending timer, timer cancelled");
            scheduler.cancel(handle);
        }
    }
}
