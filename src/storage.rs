//! Persisting a wardrobe to disk.

pub mod history;
pub mod wardrobe;

pub use history::WornOutfit;
pub use wardrobe::{Error, Loaded, Unloaded, Wardrobe};
