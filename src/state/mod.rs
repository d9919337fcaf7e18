/// State management module
///
/// This module handles all application state, including:
/// - Book records and vocabularies (data.rs)
/// - The form's view state and submit flow (form.rs)
/// - Appending records to the CSV files (storage.rs)

pub mod data;
pub mod form;
pub mod storage;
