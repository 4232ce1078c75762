mod ticker;

pub use ticker::TypewriterLoop;

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("Typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    PausingAfterTyped,
    Erasing,
    AdvancingWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub erasing: Duration,
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            erasing: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypewriterState {
    pub current_text: String,
    pub active_word_index: usize,
    pub active_char_index: usize,
    pub is_typing: bool,
}

/// Types, pauses on, erases, and advances through a fixed list of phrases, forever.
///
/// Character indices count `char`s, so multi-byte phrases are typed one scalar
/// value at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    state: TypewriterState,
    phase: TypewriterPhase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(
        words: &[S],
        timing: TypewriterTiming,
    ) -> Result<Self, TypewriterError> {
        if words.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        let words = words
            .iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        Ok(Self {
            words,
            state: TypewriterState {
                is_typing: true,
                ..Default::default()
            },
            phase: TypewriterPhase::Typing,
            timing,
        })
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The phrase currently being typed or erased.
    pub fn active_word(&self) -> String {
        self.current_word().iter().collect()
    }

    /// Delay before the next [`Typewriter::tick`] is due.
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing | TypewriterPhase::AdvancingWord => self.timing.typing,
            TypewriterPhase::PausingAfterTyped => self.timing.pause,
            TypewriterPhase::Erasing => self.timing.erasing,
        }
    }

    /// Performs one transition and returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => self.type_char(),
            TypewriterPhase::PausingAfterTyped => {
                self.phase = TypewriterPhase::Erasing;
                self.state.is_typing = false;
            }
            TypewriterPhase::Erasing => self.erase_char(),
            TypewriterPhase::AdvancingWord => self.advance_word(),
        }
        self.next_delay()
    }

    fn current_word(&self) -> &[char] {
        &self.words[self.state.active_word_index]
    }

    fn type_char(&mut self) {
        let index = self.state.active_char_index;
        if let Some(&c) = self.current_word().get(index) {
            self.state.current_text.push(c);
            self.state.active_char_index += 1;
        }
        if self.state.active_char_index == self.current_word().len() {
            self.phase = TypewriterPhase::PausingAfterTyped;
        }
    }

    fn erase_char(&mut self) {
        if self.state.active_char_index > 0 {
            self.state.current_text.pop();
            self.state.active_char_index -= 1;
        }
        if self.state.active_char_index == 0 {
            self.phase = TypewriterPhase::AdvancingWord;
            // advancing never waits for a tick of its own
            self.advance_word();
        }
    }

    fn advance_word(&mut self) {
        self.state.active_word_index = (self.state.active_word_index + 1) % self.words.len();
        self.state.active_char_index = 0;
        self.state.current_text.clear();
        self.state.is_typing = true;
        self.phase = TypewriterPhase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(words: &[&str]) -> Typewriter {
        Typewriter::new(words, TypewriterTiming::default()).expect("non-empty phrase list")
    }

    fn assert_invariants(tw: &Typewriter) {
        let state = tw.state();
        let word = tw.active_word();
        assert!(word.starts_with(&state.current_text), "{:?} not a prefix of {word:?}", state);
        assert!(state.active_char_index <= word.chars().count());
        assert_eq!(state.current_text.chars().count(), state.active_char_index);
    }

    #[test]
    fn test_rejects_empty_phrase_list() {
        let words: [&str; 0] = [];
        let err = Typewriter::new(&words, TypewriterTiming::default()).unwrap_err();
        assert_eq!(err, TypewriterError::NoPhrases);
    }

    #[test]
    fn test_initial_state() {
        let tw = machine(&["Hello"]);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.state().current_text, "");
        assert_eq!(tw.state().active_word_index, 0);
        assert!(tw.state().is_typing);
        assert_eq!(tw.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_two_word_display_sequence() {
        let mut tw = machine(&["AB", "C"]);
        let timing = TypewriterTiming::default();

        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.state().current_text, "A");
        assert_eq!(tw.tick(), timing.pause);
        assert_eq!(tw.state().current_text, "AB");
        assert_eq!(tw.phase(), TypewriterPhase::PausingAfterTyped);

        // pause ends, text unchanged
        assert_eq!(tw.tick(), timing.erasing);
        assert_eq!(tw.phase(), TypewriterPhase::Erasing);
        assert_eq!(tw.state().current_text, "AB");
        assert!(!tw.state().is_typing);

        tw.tick();
        assert_eq!(tw.state().current_text, "A");
        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.state().current_text, "");
        assert_eq!(tw.state().active_word_index, 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        tw.tick();
        assert_eq!(tw.state().current_text, "C");
        assert_eq!(tw.phase(), TypewriterPhase::PausingAfterTyped);
        tw.tick();
        tw.tick();
        assert_eq!(tw.state().current_text, "");
        assert_eq!(tw.state().active_word_index, 0);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn test_phase_transitions_take_phrase_length_ticks() {
        let phrase = "Tech Enthusiast";
        let len = phrase.chars().count();
        let mut tw = machine(&[phrase, "Other"]);

        for _ in 0..len - 1 {
            tw.tick();
            assert_eq!(tw.phase(), TypewriterPhase::Typing);
        }
        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::PausingAfterTyped);
        assert_eq!(tw.state().current_text, phrase);

        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Erasing);
        for _ in 0..len - 1 {
            tw.tick();
            assert_eq!(tw.phase(), TypewriterPhase::Erasing);
        }
        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.state().active_word_index, 1);
        assert_eq!(tw.state().active_char_index, 0);
    }

    #[test]
    fn test_invariants_hold_over_many_cycles() {
        let mut tw = machine(&["Network & Telecom Student", "Tech Enthusiast", "é✓", ""]);
        let mut seen_words = std::collections::HashSet::new();
        for _ in 0..500 {
            tw.tick();
            assert_invariants(&tw);
            seen_words.insert(tw.state().active_word_index);
        }
        assert_eq!(seen_words.len(), tw.word_count());
    }

    #[test]
    fn test_single_word_wraps_to_itself() {
        let mut tw = machine(&["Go"]);
        for _ in 0..5 {
            tw.tick();
        }
        // typed 2, paused, erased 2 -> back to typing the same word
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.state().active_word_index, 0);
        tw.tick();
        assert_eq!(tw.state().current_text, "G");
    }

    #[test]
    fn test_empty_phrase_pauses_then_advances() {
        let mut tw = machine(&["", "X"]);
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.phase(), TypewriterPhase::PausingAfterTyped);
        tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Erasing);
        tw.tick();
        assert_eq!(tw.state().active_word_index, 1);
        assert_eq!(tw.state().current_text, "");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = machine(&["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.state().current_text, "hé");
        assert_eq!(tw.state().active_char_index, 2);
    }
}
