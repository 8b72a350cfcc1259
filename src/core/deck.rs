use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Element whose text animates from zero up to a target value on entry.
///
/// `target` keeps the raw attribute text; it is parsed on every activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterElement {
    pub element: String,
    pub target: String,
}

impl CounterElement {
    #[must_use]
    pub fn new(element: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            target: target.into(),
        }
    }

    /// Reads the leading integer of `target`: optional whitespace, an
    /// optional sign, then digits. Anything after the digits is ignored, so
    /// `"4.5"` is 4 and `"85%"` is 85. No leading digits, or a value outside
    /// `i64`, is `InvalidTarget`.
    pub fn parse_target(&self) -> DeckResult<i64> {
        let invalid = || DeckError::InvalidTarget {
            element: self.element.clone(),
            raw: self.target.clone(),
        };

        let text = self.target.trim_start();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(invalid());
        }

        unsigned.as_bytes()[..digits_len]
            .iter()
            .try_fold(0i64, |value, digit| {
                let digit = i64::from(digit - b'0');
                let value = value.checked_mul(10)?;
                if negative {
                    value.checked_sub(digit)
                } else {
                    value.checked_add(digit)
                }
            })
            .ok_or_else(invalid)
    }
}

/// Static description of one slide and the elements the controller animates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub entry_elements: Vec<String>,
    #[serde(default)]
    pub counters: Vec<CounterElement>,
    #[serde(default)]
    pub density_widgets: Vec<String>,
}

impl Slide {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_entry_element(mut self, element: impl Into<String>) -> Self {
        self.entry_elements.push(element.into());
        self
    }

    #[must_use]
    pub fn with_counter(mut self, element: impl Into<String>, target: impl Into<String>) -> Self {
        self.counters.push(CounterElement::new(element, target));
        self
    }

    #[must_use]
    pub fn with_density_widget(mut self, element: impl Into<String>) -> Self {
        self.density_widgets.push(element.into());
        self
    }

    fn validate(&self, position: usize) -> DeckResult<()> {
        let ids = self
            .entry_elements
            .iter()
            .chain(self.counters.iter().map(|counter| &counter.element))
            .chain(self.density_widgets.iter());
        for id in ids {
            if id.trim().is_empty() {
                return Err(DeckError::InvalidManifest(format!(
                    "slide {position} has an element with an empty id"
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, immutable slide collection fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct DeckManifest {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> DeckResult<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for (position, slide) in slides.iter().enumerate() {
            slide.validate(position)?;
        }
        Ok(Self { slides })
    }

    /// Parses a `{ "slides": [...] }` manifest.
    pub fn from_json(input: &str) -> DeckResult<Self> {
        let manifest: DeckManifest = serde_json::from_str(input)
            .map_err(|err| DeckError::InvalidManifest(err.to_string()))?;
        Self::new(manifest.slides)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterElement, Deck, Slide};
    use crate::error::DeckError;

    #[test]
    fn counter_target_accepts_surrounding_whitespace() {
        let counter = CounterElement::new("co2", " 42 ");
        assert_eq!(counter.parse_target().expect("integer"), 42);
    }

    #[test]
    fn counter_target_reads_leading_integer() {
        for (raw, expected) in [
            ("4.5", 4),
            ("85%", 85),
            ("1500zł", 1500),
            ("  +12abc", 12),
            ("-300 t", -300),
            ("007", 7),
        ] {
            let counter = CounterElement::new("x", raw);
            assert_eq!(counter.parse_target().expect(raw), expected, "{raw}");
        }
    }

    #[test]
    fn counter_target_rejects_missing_digits_and_overflow() {
        for raw in ["abc", "", "-", "+ 5", ".5", "$10", "9223372036854775808"] {
            let err = CounterElement::new("x", raw)
                .parse_target()
                .expect_err("no usable integer");
            assert!(matches!(err, DeckError::InvalidTarget { .. }));
        }
        let min = CounterElement::new("x", "-9223372036854775808");
        assert_eq!(min.parse_target().expect("i64::MIN"), i64::MIN);
    }

    #[test]
    fn manifest_rejects_blank_element_ids() {
        let err = Deck::new(vec![Slide::new("a").with_entry_element("  ")])
            .expect_err("blank id");
        assert!(matches!(err, DeckError::InvalidManifest(_)));
    }
}
