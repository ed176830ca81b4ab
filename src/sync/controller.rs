//! PriceSyncController - the live sync loop
//!
//! Keeps on-screen prices eventually consistent with server state. One
//! repeating timer fetches the current snapshot and applies three render
//! passes: stock cards, portfolio rows, and (on the dashboard route) the
//! aggregate portfolio value, which is a second independent request per
//! tick.
//!
//! Ticks are scheduled by wall-clock interval, never by completion of the
//! previous tick, so in-flight polls can overlap. Each tick carries a
//! sequence number and a response is discarded when a newer tick has already
//! applied, so a slow response never overwrites fresher data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use super::flash::FlashTracker;
use crate::api::{PriceSnapshot, StockerApi};
use crate::consts::{DEFAULT_POLL_INTERVAL_MS, FLASH_DURATION_MS, FLASH_THRESHOLD};
use crate::surface::Surface;
use crate::view::{render, PageView, Patch, Route};

/// Timing knobs for the sync loop
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Wall-clock spacing between polls
    pub poll_interval: Duration,
    /// Absolute price delta that counts as a change
    pub flash_threshold: f64,
    /// How long a flash stays on screen
    pub flash_duration: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            flash_threshold: FLASH_THRESHOLD,
            flash_duration: Duration::from_millis(FLASH_DURATION_MS),
        }
    }
}

/// Mutable state shared between the controller and its timer task
struct SyncState {
    view: PageView,
    surface: Box<dyn Surface>,
    flashes: FlashTracker,
    /// Sequence number of the newest snapshot applied so far
    last_applied_seq: u64,
    /// Sequence number of the newest portfolio value applied so far
    last_applied_portfolio_seq: u64,
}

type SharedState = Arc<Mutex<SyncState>>;

/// Owns the single repeating timer and the page view it keeps fresh
pub struct PriceSyncController {
    api: Arc<dyn StockerApi>,
    state: SharedState,
    cfg: SyncConfig,
    /// Monotonic tick counter; also orders overlapping in-flight polls
    seq: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
}

impl PriceSyncController {
    pub fn new(
        api: Arc<dyn StockerApi>,
        view: PageView,
        surface: Box<dyn Surface>,
        cfg: SyncConfig,
    ) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SyncState {
                view,
                surface,
                flashes: FlashTracker::new(),
                last_applied_seq: 0,
                last_applied_portfolio_seq: 0,
            })),
            cfg,
            seq: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    /// Begin live updates: an immediate fetch-and-render, then one every
    /// poll interval
    ///
    /// No-op when the page has nothing priced to update. Calling `start`
    /// while already running replaces the schedule, so at most one timer
    /// exists at any time.
    pub async fn start(&mut self) {
        if !self.state.lock().await.view.has_priced_elements() {
            debug!("no priced elements on page, live updates stay off");
            return;
        }

        self.stop();
        self.timer = Some(self.spawn_timer());
        info!(
            "live price sync started (every {:?})",
            self.cfg.poll_interval
        );
    }

    /// Cancel the recurring schedule; safe to call when not running
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
            debug!("live price sync stopped");
        }
    }

    /// Whether a timer is currently scheduled
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Page-visibility policy: hidden pauses the loop, visible resumes it
    /// (re-evaluating whether anything priced exists)
    pub async fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.stop();
        } else {
            self.start().await;
        }
    }

    /// Run one fetch-and-render cycle outside the schedule
    pub async fn tick(&self) {
        run_tick(
            Arc::clone(&self.api),
            Arc::clone(&self.state),
            Arc::clone(&self.seq),
            self.cfg,
        )
        .await;
    }

    /// Clone of the current view state
    pub async fn view(&self) -> PageView {
        self.state.lock().await.view.clone()
    }

    fn spawn_timer(&self) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let seq = Arc::clone(&self.seq);
        let cfg = self.cfg;

        tokio::spawn(async move {
            let mut ticker = interval(cfg.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // A slow fetch must not delay the next scheduled tick
                tokio::spawn(run_tick(
                    Arc::clone(&api),
                    Arc::clone(&state),
                    Arc::clone(&seq),
                    cfg,
                ));
            }
        })
    }
}

impl Drop for PriceSyncController {
    fn drop(&mut self) {
        // Page teardown cancels the timer
        self.stop();
    }
}

/// One fetch-and-render cycle
///
/// A failed poll is logged and swallowed; the prior render state stays
/// untouched until the next scheduled tick.
async fn run_tick(
    api: Arc<dyn StockerApi>,
    state: SharedState,
    seq: Arc<AtomicU64>,
    cfg: SyncConfig,
) {
    let tick_seq = seq.fetch_add(1, Ordering::SeqCst) + 1;

    let snapshot = match api.fetch_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("failed to update stock prices: {e}");
            return;
        }
    };

    if !apply_snapshot(&state, cfg, tick_seq, &snapshot).await {
        // A newer tick already applied; this one is fully superseded
        return;
    }

    // Dashboard stat: a second, independent request, only on that route
    let holder = {
        let s = state.lock().await;
        if s.view.route == Route::Dashboard {
            s.view.holder_id
        } else {
            None
        }
    };
    if let Some(holder_id) = holder {
        match api.fetch_portfolio_value(holder_id).await {
            Ok(value) => {
                let mut s = state.lock().await;
                if tick_seq <= s.last_applied_portfolio_seq {
                    debug!(
                        "discarding stale portfolio value from tick {tick_seq} (newest applied: {})",
                        s.last_applied_portfolio_seq
                    );
                    return;
                }
                s.last_applied_portfolio_seq = tick_seq;
                let patch = Patch::PortfolioValue { value };
                s.view.apply(&patch);
                s.surface.apply(&patch);
            }
            Err(e) => error!("failed to update portfolio value: {e}"),
        }
    }
}

/// Render a snapshot into patches and apply them
///
/// Discards the snapshot when a newer tick already applied (stale response
/// from an overlapping poll). Returns whether the snapshot was applied.
async fn apply_snapshot(
    state: &SharedState,
    cfg: SyncConfig,
    tick_seq: u64,
    snapshot: &PriceSnapshot,
) -> bool {
    let mut s = state.lock().await;
    if tick_seq <= s.last_applied_seq {
        debug!(
            "discarding stale snapshot from tick {tick_seq} (newest applied: {})",
            s.last_applied_seq
        );
        return false;
    }
    s.last_applied_seq = tick_seq;

    let mut patches = render::render_cards(snapshot, &s.view, cfg.flash_threshold, cfg.flash_duration);
    patches.extend(render::render_portfolio(snapshot, &s.view));

    let now = Instant::now();
    let mut fired = false;
    for patch in &patches {
        if let Patch::Flash {
            symbol, direction, ..
        } = patch
        {
            s.flashes
                .fire(symbol.clone(), *direction, now, cfg.flash_duration);
            fired = true;
        }
        s.view.apply(patch);
        s.surface.apply(patch);
    }
    drop(s);

    if fired {
        schedule_flash_clear(Arc::clone(state), cfg.flash_duration);
    }
    true
}

/// After the flash duration, sweep expired flashes and clear them
fn schedule_flash_clear(state: SharedState, after: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let mut s = state.lock().await;
        for symbol in s.flashes.sweep(Instant::now()) {
            let patch = Patch::ClearFlash { symbol };
            s.view.apply(&patch);
            s.surface.apply(&patch);
        }
    });
}
