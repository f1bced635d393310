//! Paced action replay
//!
//! Generated or recorded action batches can be played back step by step to
//! animate a truss build. The delay between steps is a single suspension
//! point that yields to the host runtime; a [`CancelHandle`] lets a later
//! edit or navigation abort an in-flight replay, leaving the scene at the
//! last applied action.

use std::time::Duration;

use log::debug;
use tokio::select;
use tokio::sync::watch;
use tokio::time;

use crate::action::Action;
use crate::error::SceneResult;
use crate::scene::Scene;

/// Owner side of a cancellation signal
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Listener side of a cancellation signal
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

/// Create a linked cancellation handle and token
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    /// Signal cancellation to every linked token
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelToken {
    /// Whether cancellation has been signalled
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve when cancellation is signalled
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // The handle was dropped without cancelling; cancellation can
            // never arrive, so stay pending.
            std::future::pending::<()>().await;
        }
    }
}

/// Suspend for `duration`, resuming early if cancelled.
///
/// Returns `true` when the full duration elapsed, `false` on cancellation.
pub async fn sleep(duration: Duration, cancel: &mut CancelToken) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    select! {
        () = time::sleep(duration) => true,
        () = cancel.cancelled() => false,
    }
}

/// Apply a batch of actions to the scene with a delay between steps.
///
/// Stops cleanly when cancelled; actions applied before the cancellation
/// remain applied (and undoable). Returns the number applied.
///
/// # Errors
///
/// Propagates the first [`crate::error::SceneError::ActionFailed`] from
/// the executor; earlier actions stay applied.
pub async fn replay(
    scene: &mut Scene,
    actions: Vec<Action>,
    step: Duration,
    cancel: &mut CancelToken,
) -> SceneResult<usize> {
    let total = actions.len();
    let mut applied = 0;
    for action in actions {
        if cancel.is_cancelled() {
            break;
        }
        scene.apply(action)?;
        applied += 1;
        if !sleep(step, cancel).await {
            break;
        }
    }
    debug!("replay finished: {applied}/{total} actions");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate, TrussKind, TrussSpec};

    fn spec() -> TrussSpec {
        TrussSpec {
            height: 3.0,
            member_length: 2.0,
            bridge_length: 8.0,
            bridge_width: 1.0,
            joint_load: 5.0,
            uniform_load: 0.0,
        }
    }

    #[tokio::test]
    async fn test_replay_matches_direct_application() {
        let actions = generate(&spec(), TrussKind::Warren).unwrap();
        let mut direct = Scene::new();
        direct.apply_all(actions.clone()).unwrap();

        let mut paced = Scene::new();
        let (_handle, mut token) = cancel_pair();
        let applied = replay(&mut paced, actions.clone(), Duration::ZERO, &mut token)
            .await
            .unwrap();
        assert_eq!(applied, actions.len());
        assert_eq!(paced.snapshot(), direct.snapshot());
    }

    #[tokio::test]
    async fn test_replay_cancelled_before_start_applies_nothing() {
        let actions = generate(&spec(), TrussKind::Pratt).unwrap();
        let mut scene = Scene::new();
        let (handle, mut token) = cancel_pair();
        handle.cancel();
        let applied = replay(&mut scene, actions, Duration::from_secs(30), &mut token)
            .await
            .unwrap();
        assert_eq!(applied, 0);
        assert_eq!(scene.joint_count(), 0);
    }

    #[tokio::test]
    async fn test_sleep_resumes_early_on_cancel() {
        let (handle, mut token) = cancel_pair();
        let sleeper = sleep(Duration::from_secs(30), &mut token);
        let canceller = async {
            time::sleep(Duration::from_millis(5)).await;
            handle.cancel();
        };
        let (finished, ()) = tokio::join!(sleeper, canceller);
        assert!(!finished);
    }

    #[tokio::test]
    async fn test_replay_stops_at_cancellation() {
        let actions = generate(&spec(), TrussKind::Howe).unwrap();
        let total = actions.len();
        let mut scene = Scene::new();
        let (handle, mut token) = cancel_pair();

        let replaying = replay(&mut scene, actions, Duration::from_secs(30), &mut token);
        let canceller = async {
            time::sleep(Duration::from_millis(5)).await;
            handle.cancel();
        };
        let (applied, ()) = tokio::join!(replaying, canceller);
        let applied = applied.unwrap();
        assert!(applied >= 1, "first action applies before the first delay");
        assert!(applied < total, "cancellation aborted the tail");
    }
}
