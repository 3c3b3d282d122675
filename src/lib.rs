pub mod carousel;
pub mod flashcards;
pub mod settings;
