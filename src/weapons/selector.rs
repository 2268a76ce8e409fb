use crate::input::FrameIntents;

/// Direction of a weapon switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    /// Towards the end of the roster.
    Next,
    /// Towards the start of the roster.
    Previous,
}

impl SwitchDirection {
    /// Signed index offset.
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Selected slot index over a fixed slot count. Switching past either end
/// is a no-op; there is no wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSelector {
    selected: usize,
    count: usize,
}

impl WeaponSelector {
    /// Selector over `count` slots starting at `selected`. An out-of-range
    /// start is pulled back to the last slot.
    #[must_use]
    pub fn new(count: usize, selected: usize) -> Self {
        let count = count.max(1);
        Self {
            selected: selected.min(count - 1),
            count,
        }
    }

    /// Selected slot index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Number of slots.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Move one slot in `direction`. Returns whether the selection changed.
    pub fn switch(&mut self, direction: SwitchDirection) -> bool {
        match self.selected.checked_add_signed(direction.offset()) {
            Some(candidate) if candidate < self.count => {
                self.selected = candidate;
                true
            }
            _ => false,
        }
    }

    /// Apply at most one switch for this frame's intents, checking previous
    /// before next. Returns the direction actually taken.
    pub fn dispatch(
        &mut self,
        intents: &FrameIntents,
    ) -> Option<SwitchDirection> {
        let direction = if intents.prev_weapon {
            SwitchDirection::Previous
        } else if intents.next_weapon {
            SwitchDirection::Next
        } else {
            return None;
        };
        self.switch(direction).then_some(direction)
    }

    /// Jump straight to `index`, ignored when out of range.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next() -> FrameIntents {
        FrameIntents {
            next_weapon: true,
            ..FrameIntents::default()
        }
    }

    fn prev() -> FrameIntents {
        FrameIntents {
            prev_weapon: true,
            ..FrameIntents::default()
        }
    }

    #[test]
    fn previous_at_start_is_a_no_op() {
        let mut selector = WeaponSelector::new(3, 0);
        assert!(!selector.switch(SwitchDirection::Previous));
        assert_eq!(selector.selected(), 0);
    }

    #[test]
    fn next_at_end_is_a_no_op() {
        let mut selector = WeaponSelector::new(3, 2);
        assert!(!selector.switch(SwitchDirection::Next));
        assert_eq!(selector.selected(), 2);
    }

    #[test]
    fn walks_the_roster_without_wrapping() {
        let mut selector = WeaponSelector::new(3, 0);
        let taken: Vec<_> = (0..4).map(|_| selector.dispatch(&next())).collect();
        assert_eq!(
            taken,
            [
                Some(SwitchDirection::Next),
                Some(SwitchDirection::Next),
                None,
                None
            ]
        );
        assert_eq!(selector.selected(), 2);

        for _ in 0..5 {
            let _ = selector.dispatch(&prev());
        }
        assert_eq!(selector.selected(), 0);
    }

    #[test]
    fn previous_wins_when_both_fire() {
        let both = FrameIntents {
            next_weapon: true,
            prev_weapon: true,
            ..FrameIntents::default()
        };
        let mut a = WeaponSelector::new(3, 1);
        let mut b = WeaponSelector::new(3, 1);
        let _ = a.dispatch(&both);
        let _ = b.dispatch(&prev());
        assert_eq!(a, b);
        assert_eq!(a.selected(), 0);
    }

    #[test]
    fn both_at_start_does_not_fall_through_to_next() {
        let both = FrameIntents {
            next_weapon: true,
            prev_weapon: true,
            ..FrameIntents::default()
        };
        let mut selector = WeaponSelector::new(3, 0);
        assert_eq!(selector.dispatch(&both), None);
        assert_eq!(selector.selected(), 0);
    }

    #[test]
    fn single_slot_never_moves() {
        let mut selector = WeaponSelector::new(1, 0);
        assert_eq!(selector.dispatch(&next()), None);
        assert_eq!(selector.dispatch(&prev()), None);
    }

    #[test]
    fn construction_and_select_stay_in_range() {
        let mut selector = WeaponSelector::new(2, 7);
        assert_eq!(selector.selected(), 1);
        selector.select(5);
        assert_eq!(selector.selected(), 1);
        selector.select(0);
        assert_eq!(selector.selected(), 0);
    }
}
