//! Live polling session — `LiveController`.
//!
//! One background tokio task per session:
//! - recurring realtime poll on a fixed interval
//! - sliding window owned by the task, snapshots delivered via events
//! - at most one session per controller; starting a new one cancels the
//!   previous session before any new state is created

use std::pin::Pin;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::stream::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::window::SlidingWindow;
use super::{LiveConfig, LiveEvent, LiveUpdate, PricePoint};
use crate::domain::quote::Quote;
use crate::error::ClientError;
use crate::http::StockHttp;
use crate::shared::Symbol;

// ─── Session state ───────────────────────────────────────────────────────────

/// Lifecycle state of the live polling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SessionState {
    /// No session has been started.
    Idle = 0,
    /// Initial quote fetched, poll task being armed.
    Starting = 1,
    /// Recurring poll running.
    Polling = 2,
    /// Session torn down. Terminal for that session instance.
    Stopped = 3,
}

impl From<u8> for SessionState {
    fn from(v: u8) -> Self {
        match v {
            1 => SessionState::Starting,
            2 => SessionState::Polling,
            3 => SessionState::Stopped,
            _ => SessionState::Idle,
        }
    }
}

// ─── Commands from public API to session task ────────────────────────────────

enum Command {
    Stop,
}

// ─── Session task state ──────────────────────────────────────────────────────

struct TaskState {
    http: StockHttp,
    symbol: Symbol,
    window: SlidingWindow,
    poll_interval: Duration,
    event_tx: mpsc::Sender<LiveEvent>,
    cmd_rx: mpsc::Receiver<Command>,
    state: Arc<AtomicU8>,
}

impl TaskState {
    fn emit(&self, event: LiveEvent) {
        let _ = self.event_tx.try_send(event);
    }

    fn is_stopped(&self) -> bool {
        SessionState::from(self.state.load(Ordering::SeqCst)) == SessionState::Stopped
    }
}

// ─── Session handle ──────────────────────────────────────────────────────────

/// One active session: symbol, command channel, poll task, shared state.
struct LiveSession {
    symbol: Symbol,
    cmd_tx: mpsc::Sender<Command>,
    handle: JoinHandle<()>,
    state: Arc<AtomicU8>,
}

impl LiveSession {
    /// Cancel the session's poll task. Marks the session `Stopped` before
    /// aborting, so a tick already past its fetch cannot emit on behalf of
    /// a cancelled session.
    fn shutdown(&self) {
        let _ = self.cmd_tx.try_send(Command::Stop);
        self.state
            .store(SessionState::Stopped as u8, Ordering::SeqCst);
        self.handle.abort();
    }
}

// ─── LiveController ──────────────────────────────────────────────────────────

/// Owner of the single active live session.
///
/// The controller is the sole owner of the poll timer and window buffer;
/// there are no module-level session handles. Starting a session for a new
/// symbol (the same symbol re-submitted included) tears the previous one
/// down first.
pub struct LiveController {
    http: StockHttp,
    config: LiveConfig,
    event_tx: mpsc::Sender<LiveEvent>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<LiveEvent>>,
    session: Option<LiveSession>,
}

impl LiveController {
    pub fn new(http: StockHttp, config: LiveConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel(256);
        Self {
            http,
            config,
            event_tx,
            event_rx: tokio::sync::Mutex::new(event_rx),
            session: None,
        }
    }

    /// Start a live session for `symbol`.
    ///
    /// Fetches the initial quote first; on failure the previous session (if
    /// any) is left running untouched and the error surfaces to the caller.
    /// On success the previous session is cancelled before any new session
    /// state is created, a fresh window is seeded with the initial price,
    /// and the recurring poll is armed.
    ///
    /// Returns the initial quote so the caller can render immediately.
    pub async fn start(&mut self, symbol: Symbol) -> Result<Quote, ClientError> {
        let resp = self
            .http
            .get_realtime(symbol.as_str())
            .await
            .map_err(ClientError::Http)?;
        let quote = Quote::from(resp);

        // Exclusivity: cancel the old timer before creating any new state.
        self.stop_current();

        let state = Arc::new(AtomicU8::new(SessionState::Starting as u8));
        let (cmd_tx, cmd_rx) = mpsc::channel(8);

        let mut window = SlidingWindow::new(self.config.window_points);
        window.push(PricePoint {
            timestamp: Utc::now(),
            price: quote.current,
        });

        self.emit(LiveEvent::Started {
            symbol: symbol.clone(),
        });
        self.emit(LiveEvent::Update(LiveUpdate {
            symbol: symbol.clone(),
            quote,
            trend: quote.trend(),
            points: window.snapshot(),
        }));

        tracing::debug!("Starting live session for {}", symbol);

        let task = TaskState {
            http: self.http.clone(),
            symbol: symbol.clone(),
            window,
            poll_interval: self.config.poll_interval,
            event_tx: self.event_tx.clone(),
            cmd_rx,
            state: Arc::clone(&state),
        };
        let handle = tokio::spawn(run_session(task));

        self.session = Some(LiveSession {
            symbol,
            cmd_tx,
            handle,
            state,
        });
        Ok(quote)
    }

    /// Stop the active session, if any.
    pub fn stop(&mut self) {
        self.stop_current();
    }

    /// Current session state (`Idle` when no session has been started).
    pub fn state(&self) -> SessionState {
        match &self.session {
            Some(s) => SessionState::from(s.state.load(Ordering::SeqCst)),
            None => SessionState::Idle,
        }
    }

    /// Symbol of the current session, if one exists.
    pub fn active_symbol(&self) -> Option<&Symbol> {
        self.session.as_ref().map(|s| &s.symbol)
    }

    /// Stream of live events for the presentation layer.
    ///
    /// The returned stream borrows `self`, so it must be dropped before
    /// calling `start()` or `stop()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = LiveEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }

    fn emit(&self, event: LiveEvent) {
        let _ = self.event_tx.try_send(event);
    }

    fn stop_current(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Stopping live session for {}", session.symbol);
            session.shutdown();
            self.emit(LiveEvent::Stopped {
                symbol: session.symbol,
            });
        }
    }
}

impl Drop for LiveController {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.shutdown();
        }
    }
}

// ─── Session task ────────────────────────────────────────────────────────────

async fn run_session(mut task: TaskState) {
    task.state
        .store(SessionState::Polling as u8, Ordering::SeqCst);

    let mut interval = tokio::time::interval(task.poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.reset(); // skip immediate first tick; the window is already seeded

    loop {
        tokio::select! {
            // ── a) Poll tick ─────────────────────────────────────────────
            _ = interval.tick() => {
                // Awaiting the fetch inline keeps ticks strictly sequential:
                // a slow response delays the next update instead of racing it.
                match task.http.get_realtime(task.symbol.as_str()).await {
                    Ok(resp) => {
                        if task.is_stopped() {
                            return;
                        }
                        let quote = Quote::from(resp);
                        task.window.push(PricePoint {
                            timestamp: Utc::now(),
                            price: quote.current,
                        });
                        task.emit(LiveEvent::Update(LiveUpdate {
                            symbol: task.symbol.clone(),
                            quote,
                            trend: quote.trend(),
                            points: task.window.snapshot(),
                        }));
                    }
                    Err(e) => {
                        // Skip this tick and keep polling; no backoff.
                        tracing::warn!("Realtime poll failed for {}: {}", task.symbol, e);
                    }
                }
            }

            // ── b) Command from public API ───────────────────────────────
            cmd = task.cmd_rx.recv() => {
                match cmd {
                    Some(Command::Stop) | None => {
                        task.state.store(SessionState::Stopped as u8, Ordering::SeqCst);
                        return;
                    }
                }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
