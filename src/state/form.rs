//! Form state and the submit flow.
//!
//! The form is either in Read mode or To Be Read mode. Each mode carries
//! only its own fields, and every mode switch starts from a fresh field set.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::data::{BookType, Genre, Rating, ReadBook, ReadMonth, ToBeReadBook};
use super::storage::BookStore;
use crate::error::{SubmitError, ValidationError};

/// Which list the form is adding to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    ToBeRead,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Read, Mode::ToBeRead];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Read => "Read",
            Mode::ToBeRead => "To Be Read",
        }
    }
}

/// Raw input for a finished book
#[derive(Debug, Clone, PartialEq)]
pub struct ReadFields {
    pub title: String,
    pub author: String,
    pub rating: String,
    pub book_type: Option<BookType>,
    pub genres: BTreeSet<Genre>,
    pub month: Option<ReadMonth>,
}

impl Default for ReadFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            rating: String::new(),
            book_type: None,
            genres: BTreeSet::new(),
            month: Some(ReadMonth::default()),
        }
    }
}

impl ReadFields {
    /// Check every field and build the record.
    ///
    /// Missing fields are reported before a bad rating.
    pub fn validate(&self) -> Result<ReadBook, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        let rating = self.rating.trim();

        let (Some(book_type), Some(month)) = (self.book_type, self.month) else {
            return Err(ValidationError::MissingFields);
        };
        if title.is_empty() || author.is_empty() || rating.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let rating = Rating::parse(rating).ok_or(ValidationError::InvalidRating)?;

        Ok(ReadBook {
            title: title.to_string(),
            author: author.to_string(),
            rating,
            book_type,
            genres: self.genres.clone(),
            month,
        })
    }
}

/// Raw input for a to-be-read book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToBeReadFields {
    pub title: String,
    pub author: String,
    pub book_type: Option<BookType>,
}

impl ToBeReadFields {
    pub fn validate(&self) -> Result<ToBeReadBook, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();

        match self.book_type {
            Some(book_type) if !title.is_empty() && !author.is_empty() => Ok(ToBeReadBook {
                title: title.to_string(),
                author: author.to_string(),
                book_type,
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// The field set for the active mode
#[derive(Debug, Clone, PartialEq)]
pub enum FormFields {
    Read(ReadFields),
    ToBeRead(ToBeReadFields),
}

impl FormFields {
    /// Empty field set for `mode`
    pub fn fresh(mode: Mode) -> Self {
        match mode {
            Mode::Read => FormFields::Read(ReadFields::default()),
            Mode::ToBeRead => FormFields::ToBeRead(ToBeReadFields::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            FormFields::Read(_) => Mode::Read,
            FormFields::ToBeRead(_) => Mode::ToBeRead,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FormFields::Read(fields) => &fields.title,
            FormFields::ToBeRead(fields) => &fields.title,
        }
    }

    pub fn author(&self) -> &str {
        match self {
            FormFields::Read(fields) => &fields.author,
            FormFields::ToBeRead(fields) => &fields.author,
        }
    }

    pub fn book_type(&self) -> Option<BookType> {
        match self {
            FormFields::Read(fields) => fields.book_type,
            FormFields::ToBeRead(fields) => fields.book_type,
        }
    }
}

/// Status line under the mode selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Saved,
    Failed(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Status::Idle => "",
            Status::Saved => "Saved!",
            Status::Failed(message) => message,
        }
    }
}

/// Owns the view state of the form and forwards valid records to the store
#[derive(Debug)]
pub struct FormController {
    fields: FormFields,
    status: Status,
    store: BookStore,
}

impl FormController {
    /// Start in To Be Read mode with empty fields
    pub fn new(store: BookStore) -> Self {
        Self {
            fields: FormFields::fresh(Mode::ToBeRead),
            status: Status::Idle,
            store,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn mode(&self) -> Mode {
        self.fields.mode()
    }

    /// Replace the field set with a fresh one for `mode` and clear the status
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(mode = mode.label(), "switching form mode");
        self.fields = FormFields::fresh(mode);
        self.status = Status::Idle;
    }

    pub fn set_title(&mut self, value: String) {
        match &mut self.fields {
            FormFields::Read(fields) => fields.title = value,
            FormFields::ToBeRead(fields) => fields.title = value,
        }
    }

    pub fn set_author(&mut self, value: String) {
        match &mut self.fields {
            FormFields::Read(fields) => fields.author = value,
            FormFields::ToBeRead(fields) => fields.author = value,
        }
    }

    pub fn set_book_type(&mut self, book_type: BookType) {
        match &mut self.fields {
            FormFields::Read(fields) => fields.book_type = Some(book_type),
            FormFields::ToBeRead(fields) => fields.book_type = Some(book_type),
        }
    }

    // The remaining fields only exist in Read mode; edits are dropped otherwise

    pub fn set_rating(&mut self, value: String) {
        if let FormFields::Read(fields) = &mut self.fields {
            fields.rating = value;
        }
    }

    pub fn toggle_genre(&mut self, genre: Genre, checked: bool) {
        if let FormFields::Read(fields) = &mut self.fields {
            if checked {
                fields.genres.insert(genre);
            } else {
                fields.genres.remove(&genre);
            }
        }
    }

    pub fn set_month(&mut self, month: ReadMonth) {
        if let FormFields::Read(fields) = &mut self.fields {
            fields.month = Some(month);
        }
    }

    /// Validate the current fields and append the record.
    ///
    /// On success the fields are reset and the status shows "Saved!".
    /// On any failure the entered values are left in place for a retry.
    pub fn submit(&mut self) -> Result<PathBuf, SubmitError> {
        match self.save() {
            Ok(path) => {
                self.fields = FormFields::fresh(self.fields.mode());
                self.status = Status::Saved;
                Ok(path)
            }
            Err(err) => {
                self.status = Status::Failed(err.to_string());
                Err(err)
            }
        }
    }

    fn save(&self) -> Result<PathBuf, SubmitError> {
        let path = match &self.fields {
            FormFields::Read(fields) => self.store.append_read(&fields.validate()?)?,
            FormFields::ToBeRead(fields) => self.store.append_to_be_read(&fields.validate()?)?,
        };
        Ok(path)
    }
}
