//! Typewriter headline: types, pauses on, and deletes each phrase in turn.

use folio_core::Timer;

/// Timing for the typewriter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterOptions {
    /// Interval between typed characters.
    pub speed_ms: u64,
    /// Interval between deleted characters.
    pub delete_speed_ms: u64,
    /// Pause on a fully typed phrase before deleting it.
    pub delay_ms: u64,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            speed_ms: 80,
            delete_speed_ms: 40,
            delay_ms: 1200,
        }
    }
}

/// What the pending timer will do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Append the next character.
    Typing,
    /// Holding the full phrase; begin deleting.
    Paused,
    /// Remove the last character.
    Deleting,
}

/// Cycles through a fixed phrase list one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    options: TypewriterOptions,
    /// Index of the current phrase.
    index: usize,
    /// Number of characters of the current phrase on display.
    shown: usize,
    phase: Phase,
    timer: Timer,
    mounted: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, options: TypewriterOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            options,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timer: Timer::idle(),
            mounted: false,
        }
    }

    /// Arm the first timer. Does nothing for an empty phrase list.
    pub fn mount(&mut self, now_ms: u64) {
        self.mounted = true;
        self.arm(now_ms);
    }

    /// Cancel the pending timer; no mutation happens afterwards.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.timer.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fire every timer due at `now_ms`. Returns whether the text changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        let before = (self.index, self.shown);
        while let Some(due) = self.timer.fire(now_ms) {
            self.step(due);
        }
        (self.index, self.shown) != before
    }

    /// The text currently on display.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Time of the next scheduled mutation.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |phrase| phrase.chars().count())
    }

    fn step(&mut self, at: u64) {
        match self.phase {
            Phase::Typing => self.shown += 1,
            Phase::Paused => self.phase = Phase::Deleting,
            Phase::Deleting => self.shown -= 1,
        }
        self.arm(at);
    }

    /// Settle the phase for the current prefix and schedule the next step.
    fn arm(&mut self, from: u64) {
        if self.phrases.is_empty() {
            return;
        }
        let len = self.current_len();
        let delay = match self.phase {
            Phase::Typing if self.shown < len => self.options.speed_ms,
            Phase::Typing | Phase::Paused => {
                self.phase = Phase::Paused;
                self.options.delay_ms
            }
            Phase::Deleting if self.shown > 0 => self.options.delete_speed_ms,
            Phase::Deleting => {
                // Fully deleted: move on and start typing without waiting.
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                if self.current_len() > 0 {
                    self.options.speed_ms
                } else {
                    self.phase = Phase::Paused;
                    self.options.delay_ms
                }
            }
        };
        // A zero interval would fire forever within one update.
        self.timer.schedule(from, delay.max(1));
    }
}
