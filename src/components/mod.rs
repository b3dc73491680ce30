// UI Components
// This module contains all reusable UI components

pub mod artwork_card;
pub mod icons;
pub mod search_input;

pub use artwork_card::{ArtworkCard, ArtworkCardSkeleton};
pub use search_input::SearchInput;
