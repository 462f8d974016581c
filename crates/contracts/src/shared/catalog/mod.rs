pub mod aggregator;
pub mod display_state;
pub mod error;
pub mod filter;
pub mod listing;
pub mod source;
