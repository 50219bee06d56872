pub mod editor;
pub mod grid;
pub mod notes;
pub mod partition;
