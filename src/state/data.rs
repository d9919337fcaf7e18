//! Book records and the fixed vocabularies the form offers.
//!
//! These structs represent the data model that flows between
//! the form and the CSV files.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Whether a book belongs to a series or stands alone
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookType {
    Series,
    Standalone,
}

impl BookType {
    pub const ALL: [BookType; 2] = [BookType::Series, BookType::Standalone];

    pub fn label(&self) -> &'static str {
        match self {
            BookType::Series => "Series",
            BookType::Standalone => "Standalone",
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selectable genres.
///
/// Variant order is the display order, so a `BTreeSet<Genre>` always
/// iterates the way the checkboxes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    SciFi,
    Action,
    Fantasy,
    Mystery,
    Thriller,
    Horror,
    Romance,
    Drama,
    YoungAdult,
    Dystopian,
    Crime,
    Biography,
    Memoir,
    SelfHelp,
    Health,
    Travel,
    Business,
}

impl Genre {
    pub const ALL: [Genre; 17] = [
        Genre::SciFi,
        Genre::Action,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Horror,
        Genre::Romance,
        Genre::Drama,
        Genre::YoungAdult,
        Genre::Dystopian,
        Genre::Crime,
        Genre::Biography,
        Genre::Memoir,
        Genre::SelfHelp,
        Genre::Health,
        Genre::Travel,
        Genre::Business,
    ];

    /// Name shown on the checkbox and written to the CSV
    pub fn label(&self) -> &'static str {
        match self {
            Genre::SciFi => "Sci-Fi",
            Genre::Action => "Action",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Drama => "Drama",
            Genre::YoungAdult => "YA",
            Genre::Dystopian => "Dystopian",
            Genre::Crime => "Crime",
            Genre::Biography => "Biography",
            Genre::Memoir => "Memoir",
            Genre::SelfHelp => "Self-Help",
            Genre::Health => "Health",
            Genre::Travel => "Travel",
            Genre::Business => "Business",
        }
    }

    /// Join genres into the single CSV field, e.g. "Sci-Fi, Drama"
    pub fn join(genres: &BTreeSet<Genre>) -> String {
        genres
            .iter()
            .map(Genre::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Month a book was finished, shown in the drop-down by its English name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadMonth(pub chrono::Month);

impl ReadMonth {
    pub const ALL: [ReadMonth; 12] = [
        ReadMonth(chrono::Month::January),
        ReadMonth(chrono::Month::February),
        ReadMonth(chrono::Month::March),
        ReadMonth(chrono::Month::April),
        ReadMonth(chrono::Month::May),
        ReadMonth(chrono::Month::June),
        ReadMonth(chrono::Month::July),
        ReadMonth(chrono::Month::August),
        ReadMonth(chrono::Month::September),
        ReadMonth(chrono::Month::October),
        ReadMonth(chrono::Month::November),
        ReadMonth(chrono::Month::December),
    ];
}

impl Default for ReadMonth {
    fn default() -> Self {
        ReadMonth(chrono::Month::January)
    }
}

impl fmt::Display for ReadMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Serialize for ReadMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A rating between 0 and 10 inclusive.
///
/// Keeps the trimmed text as typed; that text is what gets written.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    value: f64,
    text: String,
}

impl Rating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// Parse user input. Returns None for anything that is not a real
    /// number in range (NaN and infinities included).
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        let value: f64 = text.parse().ok()?;
        (Self::MIN..=Self::MAX).contains(&value).then(|| Rating {
            value,
            text: text.to_string(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

fn serialize_genres<S: Serializer>(
    genres: &BTreeSet<Genre>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&Genre::join(genres))
}

/// A book that has been read
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReadBook {
    pub title: String,
    pub author: String,
    pub rating: Rating,
    pub book_type: BookType,
    #[serde(serialize_with = "serialize_genres")]
    pub genres: BTreeSet<Genre>,
    pub month: ReadMonth,
}

impl ReadBook {
    pub const HEADER: [&'static str; 6] = ["Title", "Author", "Rating", "Type", "Genres", "Month"];
}

/// A book waiting on the to-be-read pile
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ToBeReadBook {
    pub title: String,
    pub author: String,
    pub book_type: BookType,
}

impl ToBeReadBook {
    pub const HEADER: [&'static str; 3] = ["Title", "Author", "Type"];
}
