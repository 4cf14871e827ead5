//! Hover-intent and hover-image preload state machine for one card.
//!
//! Pointer state moves `Idle → HoverPending → HoverIntentional`; a mouse
//! leave drops straight back to `Idle`. The hover image's preload status is
//! tracked independently. The hover image is shown only once both sides
//! agree: the hover is intentional and the image has loaded.
//!
//! The delay timer and the preload run as Tokio tasks. Each is tied to a
//! child of the controller's lifetime token, and each re-checks a counter
//! under the state lock before writing, so a timer from an earlier hover or
//! a preload for an earlier image never lands. All operations that start
//! work must be called from within a Tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use swatchcard_core::ImageRef;
use tokio_util::sync::CancellationToken;

use crate::error::PreviewError;
use crate::loader::ImageLoader;

/// Delay before a hover counts as intentional.
pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverPhase {
    Idle,
    HoverPending,
    HoverIntentional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreloadStatus {
    /// No hover image for the current selection.
    Absent,
    Loading,
    Loaded,
    Failed,
}

/// Point-in-time view of a card's hover state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverSnapshot {
    pub phase: HoverPhase,
    pub preload: PreloadStatus,
    pub hover_image: Option<ImageRef>,
    pub is_hovering: bool,
    pub is_intentional_hover: bool,
    pub hover_image_loaded: bool,
    pub hover_image_error: bool,
    pub should_show_hover: bool,
}

#[derive(Debug)]
struct HoverState {
    phase: HoverPhase,
    /// Bumped on every enter and leave; a delay timer only fires for the
    /// episode that armed it.
    hover_epoch: u64,
    image: Option<ImageRef>,
    preload: PreloadStatus,
    /// Bumped whenever the hover image changes; a preload only lands for the
    /// generation that started it.
    load_generation: u64,
    torn_down: bool,
}

impl HoverState {
    fn new() -> Self {
        Self {
            phase: HoverPhase::Idle,
            hover_epoch: 0,
            image: None,
            preload: PreloadStatus::Absent,
            load_generation: 0,
            torn_down: false,
        }
    }

    fn should_show_hover(&self) -> bool {
        self.phase == HoverPhase::HoverIntentional
            && self.image.is_some()
            && self.preload == PreloadStatus::Loaded
    }

    fn snapshot(&self) -> HoverSnapshot {
        HoverSnapshot {
            phase: self.phase,
            preload: self.preload,
            hover_image: self.image.clone(),
            is_hovering: self.phase != HoverPhase::Idle,
            is_intentional_hover: self.phase == HoverPhase::HoverIntentional,
            hover_image_loaded: self.preload == PreloadStatus::Loaded,
            hover_image_error: self.preload == PreloadStatus::Failed,
            should_show_hover: self.should_show_hover(),
        }
    }
}

fn lock(state: &Mutex<HoverState>) -> MutexGuard<'_, HoverState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the hover intentional if the episode that armed the timer is still
/// the current one. Returns whether the state changed.
fn finish_hover_delay(state: &Mutex<HoverState>, epoch: u64) -> bool {
    let mut state = lock(state);
    if state.torn_down || state.hover_epoch != epoch || state.phase != HoverPhase::HoverPending {
        return false;
    }
    state.phase = HoverPhase::HoverIntentional;
    true
}

/// Records a preload outcome if `generation` is still current. Returns
/// whether the outcome was applied.
fn finish_preload(
    state: &Mutex<HoverState>,
    generation: u64,
    url: &str,
    outcome: Result<(), PreviewError>,
) -> bool {
    let mut state = lock(state);
    if state.torn_down || state.load_generation != generation {
        tracing::debug!(url, generation, "discarding stale hover image preload");
        return false;
    }
    state.preload = match outcome {
        Ok(()) => PreloadStatus::Loaded,
        Err(err) => {
            tracing::warn!(url, error = %err, "hover image preload failed; keeping base image");
            PreloadStatus::Failed
        }
    };
    true
}

/// Drives the base/hover image swap for one card.
#[derive(Debug)]
pub struct HoverPreviewController<L: ImageLoader> {
    state: Arc<Mutex<HoverState>>,
    loader: Arc<L>,
    hover_delay: Duration,
    lifetime: CancellationToken,
    timer: Option<CancellationToken>,
    preload: Option<CancellationToken>,
}

impl<L: ImageLoader> HoverPreviewController<L> {
    #[must_use]
    pub fn new(loader: Arc<L>, hover_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(HoverState::new())),
            loader,
            hover_delay,
            lifetime: CancellationToken::new(),
            timer: None,
            preload: None,
        }
    }

    #[must_use]
    pub fn with_default_delay(loader: Arc<L>) -> Self {
        Self::new(loader, DEFAULT_HOVER_DELAY)
    }

    #[must_use]
    pub fn hover_delay(&self) -> Duration {
        self.hover_delay
    }

    #[must_use]
    pub fn snapshot(&self) -> HoverSnapshot {
        lock(&self.state).snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        lock(&self.state).phase
    }

    #[must_use]
    pub fn preload_status(&self) -> PreloadStatus {
        lock(&self.state).preload
    }

    /// The only signal the rendering layer needs: show the hover image
    /// instead of the base image.
    #[must_use]
    pub fn should_show_hover(&self) -> bool {
        lock(&self.state).should_show_hover()
    }

    /// Pointer entered the card. Arms the intent timer.
    pub fn mouse_enter(&mut self) {
        let epoch = {
            let mut state = lock(&self.state);
            if state.torn_down || state.phase != HoverPhase::Idle {
                return;
            }
            state.phase = HoverPhase::HoverPending;
            state.hover_epoch += 1;
            state.hover_epoch
        };

        let token = self.lifetime.child_token();
        if let Some(previous) = self.timer.replace(token.clone()) {
            previous.cancel();
        }

        let state = Arc::clone(&self.state);
        let delay = self.hover_delay;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    if finish_hover_delay(&state, epoch) {
                        tracing::trace!(epoch, "hover became intentional");
                    }
                }
            }
        });
    }

    /// Pointer left the card. Cancels any pending timer and hides the hover
    /// image.
    pub fn mouse_leave(&mut self) {
        {
            let mut state = lock(&self.state);
            if state.torn_down {
                return;
            }
            state.phase = HoverPhase::Idle;
            state.hover_epoch += 1;
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// Points the controller at a new hover image and preloads it.
    ///
    /// Passing an image with the URL already in place refreshes its metadata
    /// without restarting the preload. Any preload still in
    /// flight for a previous image is cancelled, and its result is ignored
    /// should it land anyway.
    pub fn set_hover_image(&mut self, image: Option<ImageRef>) {
        let generation = {
            let mut state = lock(&self.state);
            if state.torn_down {
                return;
            }
            let unchanged = match (&state.image, &image) {
                (Some(current), Some(next)) => current.url == next.url,
                (None, None) => true,
                _ => false,
            };
            if unchanged {
                // Same URL: keep the preload, but take the fresh alt text and size.
                state.image.clone_from(&image);
                return;
            }
            state.load_generation += 1;
            state.image.clone_from(&image);
            state.preload = if image.is_some() {
                PreloadStatus::Loading
            } else {
                PreloadStatus::Absent
            };
            state.load_generation
        };

        if let Some(previous) = self.preload.take() {
            previous.cancel();
        }
        let Some(image) = image else {
            return;
        };

        let token = self.lifetime.child_token();
        self.preload = Some(token.clone());
        let state = Arc::clone(&self.state);
        let loader = Arc::clone(&self.loader);
        tokio::spawn(async move {
            let url = image.url;
            let outcome = tokio::select! {
                biased;
                () = token.cancelled() => return,
                outcome = loader.load(&url) => outcome,
            };
            finish_preload(&state, generation, &url, outcome);
        });
    }

    /// Tears the controller down: cancels the timer and any preload, and
    /// freezes the state. Nothing mutates it afterwards.
    pub fn shutdown(&mut self) {
        {
            let mut state = lock(&self.state);
            if state.torn_down {
                return;
            }
            state.torn_down = true;
            state.phase = HoverPhase::Idle;
        }
        self.lifetime.cancel();
        self.timer = None;
        self.preload = None;
    }
}

impl<L: ImageLoader> Drop for HoverPreviewController<L> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
