use crate::types::Direction;
use colored::*;

pub const CALIBRATION_COMPLETE: &str = "calibration complete";

/// Spoken phrase for a direction cue.
pub fn direction_phrase(direction: Direction) -> &'static str {
    direction.label()
}

/// Fire-and-forget speech feedback. The engine never waits on playback;
/// `cancel` interrupts whatever is currently being spoken so a fresh
/// direction cue is not queued behind a stale one.
pub trait SpeechSink {
    fn speak(&mut self, phrase: &str);
    fn cancel(&mut self);
}

/// Prints cues to the console in place of a TTS backend.
#[derive(Debug, Default)]
pub struct ConsoleSpeech;

impl SpeechSink for ConsoleSpeech {
    fn speak(&mut self, phrase: &str) {
        println!("{} {}", "[speech]".cyan(), phrase);
    }

    fn cancel(&mut self) {}
}

/// Silent sink for tests; records what would have been spoken.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    pub spoken: Vec<String>,
    pub cancels: usize,
}

impl SpeechSink for RecordingSpeech {
    fn speak(&mut self, phrase: &str) {
        self.spoken.push(phrase.to_string());
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}
