pub const DEFAULT_TYPING_DELAY_MS: u32 = 100;
const WORD_HOLD_MS: u32 = 2_000;
const WORD_SWITCH_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Types a word out one character at a time, holds it, deletes it at double
/// speed, then moves on to the next word.
#[derive(Clone, Debug)]
pub struct TypingEffect {
    words: Vec<Vec<char>>,
    delay_ms: u32,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingEffect {
    pub fn new(words: Vec<String>, delay_ms: u32) -> Option<Self> {
        let words = words
            .into_iter()
            .filter(|word| !word.is_empty())
            .map(|word| word.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        if words.is_empty() {
            return None;
        }

        Some(Self {
            words,
            delay_ms,
            word_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn step(&mut self) -> TypingFrame {
        let word = &self.words[self.word_index];

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(word.len());
        }

        let text = word[..self.char_index].iter().collect::<String>();
        let mut next_delay_ms = if self.deleting {
            self.delay_ms / 2
        } else {
            self.delay_ms
        };

        if !self.deleting && self.char_index == word.len() {
            next_delay_ms = WORD_HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            next_delay_ms = WORD_SWITCH_MS;
        }

        TypingFrame {
            text,
            next_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str, next_delay_ms: u32) -> TypingFrame {
        TypingFrame {
            text: text.to_string(),
            next_delay_ms,
        }
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut effect =
            TypingEffect::new(vec!["ab".to_string(), "c".to_string()], 100).expect("words");

        assert_eq!(effect.step(), frame("a", 100));
        assert_eq!(effect.step(), frame("ab", 2_000));
        assert_eq!(effect.step(), frame("a", 50));
        assert_eq!(effect.step(), frame("", 500));
        assert_eq!(effect.step(), frame("c", 2_000));
        assert_eq!(effect.step(), frame("", 500));
        assert_eq!(effect.step(), frame("a", 100));
    }

    #[test]
    fn multibyte_words_are_typed_per_character() {
        let mut effect = TypingEffect::new(vec!["né".to_string()], 80).expect("words");

        assert_eq!(effect.step().text, "n");
        assert_eq!(effect.step().text, "né");
    }

    #[test]
    fn empty_words_are_skipped() {
        let mut effect =
            TypingEffect::new(vec![String::new(), "x".to_string()], 100).expect("words");
        assert_eq!(effect.step(), frame("x", 2_000));
    }

    #[test]
    fn no_words_disables_the_effect() {
        assert!(TypingEffect::new(Vec::new(), 100).is_none());
        assert!(TypingEffect::new(vec![String::new()], 100).is_none());
    }
}
