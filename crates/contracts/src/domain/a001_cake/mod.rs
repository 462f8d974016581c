pub mod aggregate;
pub mod category;
pub mod metadata;
