//! Visual effect handler.

use crate::events::effects::{VfxCue, VfxEvent};
use crate::resources::transcript::{LineKind, Transcript};

/// Stateless sink for visual effect cues.
#[derive(Debug, Clone, Copy, Default)]
pub struct VfxComponent;

impl VfxComponent {
    pub fn new() -> Self {
        VfxComponent
    }

    /// Show `cue` and report it as played.
    pub fn show(&self, cue: VfxCue, out: &mut Transcript) -> VfxEvent {
        out.push(LineKind::Effect, format!("Showing Effect: {}", cue));
        VfxEvent::Played(cue)
    }
}
