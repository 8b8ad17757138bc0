//! # Animation Scheduler
//!
//! Cooperative redraw loop: each tick runs [`Engine::draw_scene_if`] to
//! completion, then the host schedules the next tick (for example from
//! `requestAnimationFrame`). A [`CancelToken`] checked at the start of
//! every tick gives the loop a bounded lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::Engine;
use crate::error::RenderError;
use crate::renderer::RenderSurface;

/// Shared stop flag. Clones observe the same flag.
///
/// # Example
///
/// ```rust
/// use primitives_scene::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The scene was dirty and got drawn
    Drawn,
    /// Nothing changed since the last draw
    Idle,
    /// The token was cancelled; nothing was drawn
    Cancelled,
}

/// Drives conditional redraws until cancelled.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    token: CancelToken,
    ticks: u64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loop stopped by an existing token.
    pub fn with_token(token: CancelToken) -> Self {
        Self { token, ticks: 0 }
    }

    /// A handle that stops this loop.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Ticks that ran (drawn or idle).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick.
    pub fn tick<S: RenderSurface>(
        &mut self,
        engine: &mut Engine<S>,
    ) -> Result<TickOutcome, RenderError> {
        if self.token.is_cancelled() {
            return Ok(TickOutcome::Cancelled);
        }
        self.ticks += 1;
        if engine.draw_scene_if()? {
            Ok(TickOutcome::Drawn)
        } else {
            Ok(TickOutcome::Idle)
        }
    }

    /// Ticks until the token is cancelled, calling `next_frame` between
    /// ticks. A draw error stops the loop and is returned.
    ///
    /// Returns the number of ticks that ran.
    pub fn run<S, F>(
        &mut self,
        engine: &mut Engine<S>,
        mut next_frame: F,
    ) -> Result<u64, RenderError>
    where
        S: RenderSurface,
        F: FnMut(&mut Engine<S>),
    {
        loop {
            match self.tick(engine)? {
                TickOutcome::Cancelled => {
                    tracing::debug!(ticks = self.ticks, "animation loop cancelled");
                    return Ok(self.ticks);
                }
                TickOutcome::Drawn | TickOutcome::Idle => next_frame(engine),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;

    fn engine() -> Engine<HeadlessSurface> {
        Engine::with_defaults(HeadlessSurface::new()).unwrap()
    }

    #[test]
    fn test_tick_outcomes() {
        let mut engine = engine();
        let mut animation = AnimationLoop::new();

        assert_eq!(animation.tick(&mut engine).unwrap(), TickOutcome::Drawn);
        assert_eq!(animation.tick(&mut engine).unwrap(), TickOutcome::Idle);

        animation.token().cancel();
        assert_eq!(animation.tick(&mut engine).unwrap(), TickOutcome::Cancelled);
        assert_eq!(animation.ticks(), 2);
    }

    #[test]
    fn test_run_stops_when_cancelled() {
        let mut engine = engine();
        let mut animation = AnimationLoop::new();
        let token = animation.token();
        let mut frames = 0;

        let ticks = animation
            .run(&mut engine, |engine| {
                frames += 1;
                if frames == 3 {
                    engine.resize(1000, 1000);
                }
                if frames == 10 {
                    token.cancel();
                }
            })
            .unwrap();

        assert_eq!(ticks, 10);
        // Startup frame plus the resize
        assert_eq!(engine.renderer().draw_count(), 2);
    }

    #[test]
    fn test_run_propagates_draw_error() {
        let mut engine = engine();
        engine.surface_mut().fail_next("device lost");
        let mut animation = AnimationLoop::new();
        let err = animation.run(&mut engine, |_| {}).unwrap_err();
        assert_eq!(err, RenderError::surface("device lost"));
    }

    #[test]
    fn test_pre_cancelled_loop_never_draws() {
        let token = CancelToken::new();
        token.cancel();
        let mut engine = engine();
        let ticks = AnimationLoop::with_token(token).run(&mut engine, |_| {}).unwrap();
        assert_eq!(ticks, 0);
        assert_eq!(engine.renderer().draw_count(), 0);
    }
}
