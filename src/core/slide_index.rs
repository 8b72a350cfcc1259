use crate::error::{DeckError, DeckResult};

/// Cursor over a fixed, non-empty slide sequence.
///
/// The cursor never wraps: the first and last slides are hard stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> DeckResult<Self> {
        if len == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { current: 0, len })
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.current + 1 == self.len
    }

    /// Moves one slide forward unless already on the last slide.
    pub fn advance(&mut self) -> usize {
        if !self.is_last() {
            self.current += 1;
        }
        self.current
    }

    /// Moves one slide back unless already on the first slide.
    pub fn retreat(&mut self) -> usize {
        if !self.is_first() {
            self.current -= 1;
        }
        self.current
    }

    pub fn go_to(&mut self, index: i64) -> DeckResult<usize> {
        let target = self.resolve(index)?;
        self.current = target;
        Ok(target)
    }

    /// Validates `index` against the deck bounds without moving the cursor.
    pub fn resolve(self, index: i64) -> DeckResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|candidate| *candidate < self.len)
            .ok_or(DeckError::OutOfRange {
                index,
                len: self.len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::SlideIndex;
    use crate::error::DeckError;

    #[test]
    fn single_slide_deck_is_both_first_and_last() {
        let mut index = SlideIndex::new(1).expect("one slide");
        assert!(index.is_first());
        assert!(index.is_last());
        assert_eq!(index.advance(), 0);
        assert_eq!(index.retreat(), 0);
    }

    #[test]
    fn failed_go_to_keeps_cursor() {
        let mut index = SlideIndex::new(4).expect("four slides");
        index.go_to(2).expect("in range");
        let err = index.go_to(4).expect_err("past the end");
        assert!(matches!(err, DeckError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(index.current(), 2);
    }
}
