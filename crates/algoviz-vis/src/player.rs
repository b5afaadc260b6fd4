//! Timed playback of a [`Session`] on the tokio runtime.
//!
//! All state sits behind one mutex. While playing, a single tick task sleeps
//! for the current speed and then applies exactly one step. Every command
//! that stops or replaces playback bumps the epoch and aborts the task; a
//! tick that was already waiting for the lock sees the new epoch and exits
//! without touching the session. The ticker lives outside the session lock
//! so dropping the player can always abort it.

use std::sync::{Arc, Mutex as SyncMutex, PoisonError};

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::catalog::AlgorithmKey;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::session::{Frame, Session};
use crate::timeline::PlaybackStatus;

/// Handle to the running tick task, if any.
#[derive(Debug, Default)]
struct Ticker(Option<JoinHandle<()>>);

impl Ticker {
    /// Abort the task. Safe to call any number of times.
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }

    fn is_running(&self) -> bool {
        self.0.as_ref().is_some_and(|h| !h.is_finished())
    }
}

#[derive(Debug)]
struct Shared {
    session: Session,
    epoch: u64,
}

/// Async front to a session with a cancellable ticker and a frame feed.
pub struct Player {
    shared: Arc<Mutex<Shared>>,
    frames: Arc<watch::Sender<Frame>>,
    ticker: SyncMutex<Ticker>,
}

impl Player {
    pub fn new(key: AlgorithmKey, config: SessionConfig) -> Result<Self> {
        Ok(Self::from_session(Session::new(key, config)?))
    }

    pub fn from_session(session: Session) -> Self {
        let (frames, _) = watch::channel(session.frame());
        Self {
            shared: Arc::new(Mutex::new(Shared { session, epoch: 0 })),
            frames: Arc::new(frames),
            ticker: SyncMutex::new(Ticker::default()),
        }
    }

    /// Receive a frame after every change.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.subscribe()
    }

    pub async fn frame(&self) -> Frame {
        self.shared.lock().await.session.frame()
    }

    pub async fn status(&self) -> PlaybackStatus {
        self.shared.lock().await.session.status()
    }

    pub async fn key(&self) -> AlgorithmKey {
        self.shared.lock().await.session.key()
    }

    /// Whether a tick task is alive.
    pub async fn is_ticking(&self) -> bool {
        let _shared = self.shared.lock().await;
        self.ticker().is_running()
    }

    pub async fn play(&self) {
        let mut shared = self.shared.lock().await;
        shared.session.play();
        self.restart(&mut shared);
        self.publish(&shared);
    }

    pub async fn pause(&self) {
        let mut shared = self.shared.lock().await;
        self.stop_ticking(&mut shared);
        shared.session.pause();
        self.publish(&shared);
    }

    /// Apply one step by hand. Playback keeps its state; while playing, the
    /// next automatic step comes one full interval later.
    pub async fn step(&self) -> bool {
        let mut shared = self.shared.lock().await;
        let stepped = shared.session.step();
        self.restart(&mut shared);
        self.publish(&shared);
        stepped
    }

    pub async fn step_back(&self) {
        let mut shared = self.shared.lock().await;
        self.stop_ticking(&mut shared);
        shared.session.step_back();
        self.publish(&shared);
    }

    pub async fn seek(&self, index: usize) {
        let mut shared = self.shared.lock().await;
        shared.session.seek(index);
        self.restart(&mut shared);
        self.publish(&shared);
    }

    /// A failed reset leaves the session and its playback as they were.
    pub async fn reset(&self) -> Result<()> {
        let mut shared = self.shared.lock().await;
        shared.session.reset()?;
        self.stop_ticking(&mut shared);
        self.publish(&shared);
        Ok(())
    }

    /// A refused key leaves the session and its playback as they were.
    pub async fn select(&self, key: AlgorithmKey) -> Result<()> {
        let mut shared = self.shared.lock().await;
        shared.session.select(key)?;
        self.stop_ticking(&mut shared);
        self.publish(&shared);
        Ok(())
    }

    /// New interval, used from the next scheduled sleep.
    pub async fn set_speed(&self, ms: u64) -> Result<()> {
        let mut shared = self.shared.lock().await;
        shared.session.set_speed(ms)?;
        self.publish(&shared);
        Ok(())
    }

    pub async fn insert(&self, value: i64) -> Result<()> {
        self.operate(|s| s.insert(value)).await
    }

    pub async fn search(&self, value: i64) -> Result<()> {
        self.operate(|s| s.search(value)).await
    }

    pub async fn traverse(&self) -> Result<()> {
        self.operate(Session::traverse).await
    }

    pub async fn push(&self, value: i64) -> Result<()> {
        self.operate(|s| s.push(value)).await
    }

    pub async fn pop(&self) -> Result<()> {
        self.operate(Session::pop).await
    }

    pub async fn enqueue(&self, value: i64) -> Result<()> {
        self.operate(|s| s.enqueue(value)).await
    }

    pub async fn dequeue(&self) -> Result<()> {
        self.operate(Session::dequeue).await
    }

    pub async fn append(&self, value: i64) -> Result<()> {
        self.operate(|s| s.append(value)).await
    }

    pub async fn remove_last(&self) -> Result<()> {
        self.operate(Session::remove_last).await
    }

    pub async fn run_demo(&self) -> Result<()> {
        self.operate(Session::run_demo).await
    }

    /// Run a session operation and drive the playback it starts. A refused
    /// operation leaves the current playback running.
    async fn operate(&self, operation: impl FnOnce(&mut Session) -> Result<()>) -> Result<()> {
        let mut shared = self.shared.lock().await;
        operation(&mut shared.session)?;
        self.restart(&mut shared);
        self.publish(&shared);
        Ok(())
    }

    fn ticker(&self) -> std::sync::MutexGuard<'_, Ticker> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Invalidate pending ticks and abort the task. Called with the session
    /// lock held.
    fn stop_ticking(&self, shared: &mut Shared) {
        shared.epoch += 1;
        self.ticker().cancel();
    }

    /// Replace the tick task, starting a new one only when playing.
    fn restart(&self, shared: &mut Shared) {
        self.stop_ticking(shared);
        if shared.session.is_playing() {
            let handle = tokio::spawn(tick(
                Arc::clone(&self.shared),
                Arc::clone(&self.frames),
                shared.epoch,
            ));
            self.ticker().0 = Some(handle);
        }
    }

    fn publish(&self, shared: &Shared) {
        self.frames.send_replace(shared.session.frame());
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.ticker().cancel();
    }
}

async fn tick(shared: Arc<Mutex<Shared>>, frames: Arc<watch::Sender<Frame>>, epoch: u64) {
    loop {
        let speed = {
            let shared = shared.lock().await;
            if shared.epoch != epoch || !shared.session.is_playing() {
                return;
            }
            shared.session.speed()
        };

        tokio::time::sleep(speed.as_duration()).await;

        let mut shared = shared.lock().await;
        if shared.epoch != epoch || !shared.session.is_playing() {
            tracing::trace!(epoch, "stale tick dropped");
            return;
        }
        shared.session.step();
        frames.send_replace(shared.session.frame());
        if !shared.session.is_playing() {
            tracing::debug!(key = %shared.session.key(), "Playback complete");
            return;
        }
    }
}
