//! Animation handler.

use crate::events::effects::{AnimCue, AnimEvent};
use crate::resources::transcript::{LineKind, Transcript};

/// Stateless sink for animation cues.
///
/// Playback is instantaneous; the returned [`AnimEvent::Finished`] is what a
/// real animation system would report when the clip ends. Durations live in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationComponent;

impl AnimationComponent {
    pub fn new() -> Self {
        AnimationComponent
    }

    /// Play `cue` and report it as finished.
    pub fn play(&self, cue: AnimCue, out: &mut Transcript) -> AnimEvent {
        out.push(LineKind::Animation, format!("Playing Animation: {}", cue));
        AnimEvent::Finished(cue)
    }
}
