// Carousel state: current card index plus the single liked index.
// Owned by GistApp; the renderer and animator read it, and only the
// user-intent handlers in the frame loop mutate it.

use crate::types::Direction;

use super::animator::BoundaryGate;

/// Index state for the card deck.
///
/// `liked` is single-selection: at most one index is liked at a time, and
/// liking another card implicitly clears the previous one. Like state is
/// per-index and survives navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    liked: Option<usize>,
    len: usize,
}

impl CarouselState {
    /// `len` comes from the news store, which is non-empty by construction.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            current: 0,
            liked: None,
            len,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Step one card in `direction`. Moving past either end of the deck is
    /// silently ignored, not an error.
    pub fn navigate(&mut self, direction: Direction) {
        match direction {
            Direction::Previous => {
                if self.current > 0 {
                    self.current -= 1;
                }
            }
            Direction::Next => {
                if self.current + 1 < self.len {
                    self.current += 1;
                }
            }
        }
    }

    /// Like the current card, or clear the like if it already holds one.
    pub fn toggle_like(&mut self) {
        if self.liked == Some(self.current) {
            self.liked = None;
        } else {
            self.liked = Some(self.current);
        }
    }

    pub fn is_current_liked(&self) -> bool {
        self.liked == Some(self.current)
    }

    /// Which directions are open from the current index; the animator uses
    /// this to refuse a commit at the deck boundary.
    pub fn gate(&self) -> BoundaryGate {
        BoundaryGate {
            can_previous: self.current > 0,
            can_next: self.current + 1 < self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_a_no_op_at_the_boundaries() {
        let mut state = CarouselState::new(3);
        state.navigate(Direction::Previous);
        assert_eq!(state.current_index(), 0);

        state.navigate(Direction::Next);
        state.navigate(Direction::Next);
        assert_eq!(state.current_index(), 2);
        state.navigate(Direction::Next);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn toggle_like_round_trips() {
        let mut state = CarouselState::new(3);
        let before = state.clone();
        state.toggle_like();
        assert!(state.is_current_liked());
        state.toggle_like();
        assert_eq!(state, before);
    }

    #[test]
    fn liking_one_card_unlikes_the_other() {
        let mut state = CarouselState::new(3);
        state.toggle_like();
        state.navigate(Direction::Next);
        assert!(!state.is_current_liked());
        state.toggle_like();
        // Back on the first card, its like is gone.
        state.navigate(Direction::Previous);
        assert!(!state.is_current_liked());
        state.navigate(Direction::Next);
        assert!(state.is_current_liked());
    }

    #[test]
    fn like_survives_navigation() {
        let mut state = CarouselState::new(3);
        state.toggle_like();
        state.navigate(Direction::Next);
        state.navigate(Direction::Previous);
        assert!(state.is_current_liked());
    }

    #[test]
    fn gate_reflects_deck_position() {
        let mut state = CarouselState::new(2);
        let gate = state.gate();
        assert!(!gate.can_previous);
        assert!(gate.can_next);

        state.navigate(Direction::Next);
        let gate = state.gate();
        assert!(gate.can_previous);
        assert!(!gate.can_next);
    }
}
