//! Flashcard collection for Flashdeck
//!
//! This module provides:
//! - The card model and form validation
//! - The `CardStore` seam used by the review carousel
//! - File-backed and in-memory store implementations

pub mod memory;
pub mod models;
pub mod storage;
pub mod store;

pub use memory::MemoryCardStore;
pub use models::*;
pub use storage::{FlashcardStorage, FlashcardStorageError};
pub use store::CardStore;
