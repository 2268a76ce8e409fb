use crate::error::ArsenalError;

/// One selectable weapon: its position in the roster, HUD name, draw scale
/// and the backend model handle.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponSlot<M> {
    /// Position in the roster, in `[0, N)`.
    pub index: usize,
    /// Name shown in the HUD.
    pub name: String,
    /// Uniform scale applied when drawing.
    pub display_scale: f32,
    /// Backend model handle.
    pub model: M,
}

/// Ordered, fixed-size set of weapon slots. Never empty.
#[derive(Debug, Clone)]
pub struct WeaponSet<M> {
    slots: Vec<WeaponSlot<M>>,
}

impl<M> WeaponSet<M> {
    /// Build a set from `(name, scale, model)` entries in display order.
    /// Slot indices follow entry order.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::EmptyRoster`] when `entries` is empty.
    pub fn new<I>(entries: I) -> Result<Self, ArsenalError>
    where
        I: IntoIterator<Item = (String, f32, M)>,
    {
        let slots: Vec<_> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, display_scale, model))| WeaponSlot {
                index,
                name,
                display_scale,
                model,
            })
            .collect();
        if slots.is_empty() {
            return Err(ArsenalError::EmptyRoster);
        }
        Ok(Self { slots })
    }

    /// Number of slots (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the set has no slots (never true for a constructed set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WeaponSlot<M>> {
        self.slots.get(index)
    }

    /// Slots in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, WeaponSlot<M>> {
        self.slots.iter()
    }

    /// Consume the set, yielding the model handles in roster order.
    pub fn into_models(self) -> impl Iterator<Item = M> {
        self.slots.into_iter().map(|slot| slot.model)
    }
}

impl<'a, M> IntoIterator for &'a WeaponSet<M> {
    type Item = &'a WeaponSlot<M>;
    type IntoIter = std::slice::Iter<'a, WeaponSlot<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
