//! Narration sink shared by every demo.
//!
//! Effect handlers do not talk to an audio device or a renderer; they write a
//! line describing what they would have done. The [`Transcript`] keeps those
//! lines in order so tests can assert on whole reaction chains, and can
//! optionally echo each line to stdout as it arrives (the binary's default).

use serde::{Deserialize, Serialize};

/// What produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A sound cue was played.
    Sound,
    /// A visual effect cue was shown.
    Effect,
    /// An animation cue was played.
    Animation,
    /// Free-form narration (refusals, state changes, diagnostics).
    Note,
    /// Empty separator line between top-level actions.
    Break,
}

/// One narrated line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered record of narration lines.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<Line>,
    echo: bool,
}

impl Transcript {
    /// Create a silent transcript that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript that also prints every line to stdout.
    pub fn echoing() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Append a line of the given kind.
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        let text = text.into();
        if self.echo {
            println!("{}", text);
        }
        self.lines.push(Line { kind, text });
    }

    /// Append a [`LineKind::Note`].
    pub fn note(&mut self, text: impl Into<String>) {
        self.push(LineKind::Note, text);
    }

    /// Append an empty [`LineKind::Break`] line.
    pub fn gap(&mut self) {
        self.push(LineKind::Break, "");
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Text of every line that is not a [`LineKind::Break`].
    pub fn texts(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.kind != LineKind::Break)
            .map(|l| l.text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop all recorded lines, keeping the echo setting.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Serialize the recorded lines as a pretty JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut t = Transcript::new();
        t.push(LineKind::Sound, "Playing Sound: SFX_Gunshot");
        t.note("Camera sway reduced.");
        assert_eq!(t.len(), 2);
        assert_eq!(t.lines()[0].kind, LineKind::Sound);
        assert_eq!(
            t.texts(),
            vec!["Playing Sound: SFX_Gunshot", "Camera sway reduced."]
        );
    }

    #[test]
    fn test_texts_skip_breaks() {
        let mut t = Transcript::new();
        t.note("a");
        t.gap();
        t.note("b");
        assert_eq!(t.len(), 3);
        assert_eq!(t.texts(), vec!["a", "b"]);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut t = Transcript::new();
        t.note("a");
        t.clear();
        assert!(t.is_empty());
    }

    #[test]
    fn test_to_json_uses_snake_case_kinds() {
        let mut t = Transcript::new();
        t.push(LineKind::Animation, "Playing Animation: ANIM_Gun_Aim");
        let json = t.to_json().unwrap();
        let parsed: Vec<Line> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t.lines());
        assert!(json.contains("\"animation\""));
    }
}
