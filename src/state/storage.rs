use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::data::{ReadBook, ToBeReadBook};
use crate::config::Settings;
use crate::error::StorageError;

/// The BookStore owns the two append-only CSV files.
/// Finished books go to one file, the to-be-read pile to the other.
#[derive(Debug)]
pub struct BookStore {
    read_path: PathBuf,
    to_be_read_path: PathBuf,
}

impl BookStore {
    /// Create a BookStore writing into the directory named by `settings`.
    ///
    /// Nothing is created on disk until the first append.
    pub fn new(settings: &Settings) -> Self {
        BookStore {
            read_path: settings.read_path(),
            to_be_read_path: settings.to_be_read_path(),
        }
    }

    /// Path of the finished-books file
    pub fn read_path(&self) -> &Path {
        &self.read_path
    }

    /// Path of the to-be-read file
    pub fn to_be_read_path(&self) -> &Path {
        &self.to_be_read_path
    }

    /// Append a finished book and return the file it went to
    pub fn append_read(&self, book: &ReadBook) -> Result<PathBuf, StorageError> {
        append(&self.read_path, &ReadBook::HEADER, book)?;
        Ok(self.read_path.clone())
    }

    /// Append a to-be-read book and return the file it went to
    pub fn append_to_be_read(&self, book: &ToBeReadBook) -> Result<PathBuf, StorageError> {
        append(&self.to_be_read_path, &ToBeReadBook::HEADER, book)?;
        Ok(self.to_be_read_path.clone())
    }
}

/// Append one record to a CSV file, writing `header` first if the file
/// is missing or empty.
///
/// Header and row are encoded into one buffer and written with a single
/// call, so a failure never leaves a header without its row.
///
/// Returns whether the header was written.
pub fn append<R: Serialize>(path: &Path, header: &[&str], record: &R) -> Result<bool, StorageError> {
    let is_new = is_new_file(path)?;

    // Encode everything in memory first
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    if is_new {
        writer.write_record(header)?;
    }
    writer.serialize(record)?;

    let buffer = writer.into_inner().map_err(|e| e.into_error())?;

    // Then a single append to the file
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(&buffer)?;
    file.flush()?;

    tracing::info!(
        path = %path.display(),
        header_written = is_new,
        "📚 Appended record"
    );

    Ok(is_new)
}

/// A file counts as new when it does not exist or has zero length
fn is_new_file(path: &Path) -> Result<bool, io::Error> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len() == 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{BookType, Genre, Rating, ReadMonth};
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn tbr(title: &str) -> ToBeReadBook {
        ToBeReadBook {
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            book_type: BookType::Standalone,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tbr.csv");

        assert!(append(&path, &ToBeReadBook::HEADER, &tbr("The Dispossessed")).unwrap());
        assert!(!append(&path, &ToBeReadBook::HEADER, &tbr("The Lathe of Heaven")).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Title,Author,Type\r\n\
             The Dispossessed,Ursula K. Le Guin,Standalone\r\n\
             The Lathe of Heaven,Ursula K. Le Guin,Standalone\r\n"
        );
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tbr.csv");
        fs::write(&path, "").unwrap();

        assert!(append(&path, &ToBeReadBook::HEADER, &tbr("Lavinia")).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Title,Author,Type\r\n"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_embedded_delimiters_are_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tbr.csv");

        let book = ToBeReadBook {
            title: "Sorry, \"Wrong\" Number".to_string(),
            author: "Someone".to_string(),
            book_type: BookType::Series,
        };
        append(&path, &ToBeReadBook::HEADER, &book).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "Sorry, \"Wrong\" Number");
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_read_row_has_six_fields() {
        let dir = TempDir::new().unwrap();
        let store = BookStore::new(&Settings::with_data_dir(dir.path()));

        let book = ReadBook {
            title: "Hyperion".to_string(),
            author: "Dan Simmons".to_string(),
            rating: Rating::parse("8.5").unwrap(),
            book_type: BookType::Series,
            genres: [Genre::SciFi, Genre::Mystery, Genre::Drama].into_iter().collect(),
            month: ReadMonth(chrono::Month::July),
        };
        let path = store.append_read(&book).unwrap();
        assert_eq!(path, store.read_path());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 6);

        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.len(), 6);
        assert_eq!(&row[2], "8.5");
        assert_eq!(&row[4], "Sci-Fi, Mystery, Drama");

        let labels: BTreeSet<&str> = Genre::ALL.iter().map(Genre::label).collect();
        assert!(row[4].split(", ").all(|genre| labels.contains(genre)));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = BookStore::new(&Settings::with_data_dir(dir.path().join("gone")));

        let err = store.append_to_be_read(&tbr("Always Coming Home")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(err.to_string().starts_with("Error saving file: "));
    }
}
