use super::error::CatalogError;
use crate::domain::a001_cake::aggregate::Cake;

/// What the catalog section shows. Exactly one state is active; a load cycle
/// moves from `Loading` to one of the terminal states and stays there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    Populated(Vec<Cake>),
    Empty,
    Error,
}

impl DisplayState {
    /// Map a finished load cycle onto a terminal state
    pub fn from_load_result(result: Result<Vec<Cake>, CatalogError>) -> Self {
        match result {
            Ok(cakes) if cakes.is_empty() => DisplayState::Empty,
            Ok(cakes) => DisplayState::Populated(cakes),
            Err(CatalogError::CatalogUnavailable(_)) => DisplayState::Error,
            // a single item failure never decides the catalog-level state
            Err(CatalogError::ItemMetadataUnavailable { .. }) | Err(CatalogError::EmptyCatalog) => {
                DisplayState::Empty
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DisplayState::Loading)
    }

    /// Apply the outcome of the current cycle. Terminal states are final.
    pub fn finish(&mut self, result: Result<Vec<Cake>, CatalogError>) {
        if self.is_terminal() {
            log::warn!("Catalog already settled as `{}`, ignoring late result", self.code());
            return;
        }
        *self = DisplayState::from_load_result(result);
    }

    pub fn cakes(&self) -> &[Cake] {
        match self {
            DisplayState::Populated(cakes) => cakes,
            _ => &[],
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DisplayState::Loading => "loading",
            DisplayState::Populated(_) => "populated",
            DisplayState::Empty => "empty",
            DisplayState::Error => "error",
        }
    }
}
