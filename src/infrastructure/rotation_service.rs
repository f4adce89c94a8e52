use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{
    sync::{mpsc, Notify},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::{
        rotator::{RotatorError, SlideRotator},
        slide::Slide,
    },
};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Background timer that asks the hero banner to advance every `cadence`
///
/// The service never touches slide state itself. It only emits
/// [`RawMsg::RotationTick`] tagged with its generation, which the update loop
/// turns into an unconditional advance. Ticks come from a single timer, so
/// each cadence interval yields at most one advance.
pub struct RotationService {
    cadence: Duration,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    generation: u64,
}

impl RotationService {
    pub fn new(cadence: Duration, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            cadence,
            raw_tx,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Build the rotator and start its timer; the first tick fires one cadence from now
    pub fn mount(
        slides: Vec<Slide>,
        cadence: Duration,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Result<(SlideRotator, RotationHandle), RotatorError> {
        let rotator = SlideRotator::new(slides)?;
        let handle = Self::new(cadence, raw_tx).start();
        Ok((rotator, handle))
    }

    /// Spawn the timer task
    pub fn start(self) -> RotationHandle {
        let cancel_token = CancellationToken::new();
        let reset = Arc::new(Notify::new());

        let task = tokio::spawn(Self::run(
            self.cadence,
            self.generation,
            self.raw_tx,
            cancel_token.clone(),
            Arc::clone(&reset),
        ));

        log::debug!(
            "RotationService #{} started with cadence {:?}",
            self.generation,
            self.cadence
        );
        RotationHandle {
            generation: self.generation,
            cancel_token,
            reset,
            task: Some(task),
        }
    }

    async fn run(
        cadence: Duration,
        generation: u64,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
        cancel_token: CancellationToken,
        reset: Arc<Notify>,
    ) {
        let mut ticker = time::interval_at(Instant::now() + cadence, cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = cancel_token.cancelled() => {
                    log::debug!("RotationService received cancellation signal");
                    break;
                }

                _ = reset.notified() => {
                    ticker.reset();
                }

                _ = ticker.tick() => {
                    if raw_tx.send(RawMsg::RotationTick(generation)).is_err() {
                        log::debug!("RotationService: receiver dropped, stopping");
                        break;
                    }
                }
            }
        }
    }
}

/// Owner of a running rotation timer
///
/// Dropping the handle tears the timer down as well.
#[derive(Debug)]
pub struct RotationHandle {
    generation: u64,
    cancel_token: CancellationToken,
    reset: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl RotationHandle {
    /// Stop the timer; calling it again is a no-op
    ///
    /// Ticks already sitting in the raw channel are rejected by every
    /// [`RotationWatch`] of this handle from now on.
    pub fn teardown(&mut self) {
        self.cancel_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("RotationService torn down");
        }
    }

    /// Stop the timer and wait for the task to finish
    pub async fn shutdown(mut self) {
        self.cancel_token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    log::error!("RotationService task failed: {e}");
                }
            }
        }
    }

    /// Restart the countdown so the next tick is one full cadence away
    pub fn reset(&self) {
        if self.is_active() {
            self.reset.notify_one();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some() && !self.cancel_token.is_cancelled()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A view the consumer of ticks uses to tell live ticks from stale ones
    pub fn watch(&self) -> RotationWatch {
        RotationWatch {
            generation: self.generation,
            cancel_token: self.cancel_token.clone(),
        }
    }
}

/// Accepts only ticks from one running timer
#[derive(Debug, Clone)]
pub struct RotationWatch {
    generation: u64,
    cancel_token: CancellationToken,
}

impl RotationWatch {
    pub fn accepts(&self, generation: u64) -> bool {
        self.generation == generation && !self.cancel_token.is_cancelled()
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;
    use crate::domain::catalog::default_slides;

    const CADENCE: Duration = Duration::from_millis(5000);

    fn drain_ticks(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> usize {
        let mut ticks = 0;
        while let Ok(msg) = rx.try_recv() {
            if matches!(msg, RawMsg::RotationTick(_)) {
                ticks += 1;
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_cadence() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = RotationService::new(CADENCE, tx).start();

        time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(drain_ticks(&mut rx), 0);

        time::sleep(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(drain_ticks(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_per_cadence() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = RotationService::new(CADENCE, tx).start();

        time::sleep(CADENCE * 3 + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(drain_ticks(&mut rx), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut handle = RotationService::new(CADENCE, tx).start();
        assert!(handle.is_active());

        handle.teardown();
        handle.teardown();
        assert!(!handle.is_active());

        time::sleep(CADENCE * 4).await;
        assert_eq!(drain_ticks(&mut rx), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_closes_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RotationService::new(CADENCE, tx).start();

        handle.shutdown().await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_postpones_next_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RotationService::new(CADENCE, tx).start();

        time::sleep(Duration::from_millis(4000)).await;
        handle.reset();
        tokio::task::yield_now().await;

        time::sleep(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert_eq!(drain_ticks(&mut rx), 0);

        time::sleep(Duration::from_millis(3100)).await;
        tokio::task::yield_now().await;
        assert_eq!(drain_ticks(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_carry_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let first = RotationService::new(CADENCE, tx.clone()).start();
        let second = RotationService::new(CADENCE, tx).start();
        assert_ne!(first.generation(), second.generation());

        drop(second);
        time::sleep(CADENCE + Duration::from_millis(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            rx.try_recv().ok(),
            Some(RawMsg::RotationTick(first.generation()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_rejects_after_teardown() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut handle = RotationService::new(CADENCE, tx).start();
        let watch = handle.watch();
        assert!(watch.accepts(handle.generation()));
        assert!(!watch.accepts(handle.generation() + 1));

        handle.teardown();
        assert!(!watch.accepts(handle.generation()));
    }

    #[tokio::test]
    async fn test_mount_rejects_empty_slides() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let result = RotationService::mount(vec![], CADENCE, tx);
        assert!(matches!(result, Err(RotatorError::InvalidConfiguration)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_starts_on_first_slide() -> Result<(), RotatorError> {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (rotator, handle) = RotationService::mount(default_slides(), CADENCE, tx)?;
        assert_eq!(rotator.active_index(), 0);
        assert!(handle.is_active());
        Ok(())
    }
}
