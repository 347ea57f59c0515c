//! Sound effect handler.

use crate::events::effects::{SfxCue, SfxEvent};
use crate::resources::transcript::{LineKind, Transcript};

/// Stateless sink for sound cues.
///
/// Stands in for an audio engine: playing a cue narrates it and returns the
/// matching [`SfxEvent::Played`] so the caller can react to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfxComponent;

impl SfxComponent {
    pub fn new() -> Self {
        SfxComponent
    }

    /// Play `cue` and report it as played.
    pub fn play(&self, cue: SfxCue, out: &mut Transcript) -> SfxEvent {
        out.push(LineKind::Sound, format!("Playing Sound: {}", cue));
        SfxEvent::Played(cue)
    }
}
