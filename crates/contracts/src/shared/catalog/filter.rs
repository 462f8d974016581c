use crate::domain::a001_cake::category::CakeCategory;

/// Active filter tag of the catalog section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CakeFilter {
    active: CakeCategory,
}

impl CakeFilter {
    pub fn new(active: CakeCategory) -> Self {
        Self { active }
    }

    pub fn active(&self) -> CakeCategory {
        self.active
    }

    pub fn select(&mut self, tag: CakeCategory) {
        self.active = tag;
    }

    /// A card is shown iff the filter is `all` or matches the card's category
    pub fn is_visible(&self, category: CakeCategory) -> bool {
        self.active == CakeCategory::All || self.active == category
    }
}
