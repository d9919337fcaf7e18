use iced::widget::{column, container, horizontal_rule, Column};
use iced::{Alignment, Element, Length, Pixels, Size, Task, Theme};

mod config;
mod error;
mod state;
mod ui;

use config::Settings;
use error::SubmitError;
use state::data::{BookType, Genre, ReadMonth};
use state::form::{FormController, Mode};
use state::storage::BookStore;

/// Main application state
struct ReadingLists {
    /// The form and the files it appends to
    form: FormController,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked "Read" or "To Be Read"
    ModeSelected(Mode),
    TitleChanged(String),
    AuthorChanged(String),
    RatingChanged(String),
    TypeSelected(BookType),
    GenreToggled(Genre, bool),
    MonthSelected(ReadMonth),
    /// User clicked "Save"
    Save,
}

impl ReadingLists {
    /// Create a new instance of the application
    fn new(settings: &Settings) -> (Self, Task<Message>) {
        let store = BookStore::new(settings);

        tracing::info!(
            read = %store.read_path().display(),
            to_be_read = %store.to_be_read_path().display(),
            "📖 Reading Lists ready"
        );

        (
            ReadingLists {
                form: FormController::new(store),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => self.form.set_mode(mode),
            Message::TitleChanged(value) => self.form.set_title(value),
            Message::AuthorChanged(value) => self.form.set_author(value),
            Message::RatingChanged(value) => self.form.set_rating(value),
            Message::TypeSelected(book_type) => self.form.set_book_type(book_type),
            Message::GenreToggled(genre, checked) => self.form.toggle_genre(genre, checked),
            Message::MonthSelected(month) => self.form.set_month(month),
            Message::Save => match self.form.submit() {
                Ok(path) => {
                    tracing::debug!(path = %path.display(), "book saved");
                }
                Err(SubmitError::Validation(reason)) => {
                    tracing::warn!(mode = self.form.mode().label(), "rejected submission: {reason}");
                }
                Err(SubmitError::Storage(cause)) => {
                    tracing::error!(mode = self.form.mode().label(), "failed to save book: {cause}");
                }
            },
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content: Column<Message> = column![
            ui::form::mode_selector(self.form.mode()),
            horizontal_rule(Pixels(1.0)),
            ui::form::status_line(self.form.status()),
            ui::form::fields_view(self.form.fields()),
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let settings = Settings::default();
    let (width, height) = settings.window_size;

    iced::application(settings.title, ReadingLists::update, ReadingLists::view)
        .theme(ReadingLists::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || ReadingLists::new(&settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> ReadingLists {
        ReadingLists::new(&Settings::with_data_dir(dir.path())).0
    }

    #[test]
    fn test_read_book_through_messages() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        for message in [
            Message::ModeSelected(Mode::Read),
            Message::TitleChanged("Dune".to_string()),
            Message::AuthorChanged("Frank Herbert".to_string()),
            Message::RatingChanged("9".to_string()),
            Message::TypeSelected(BookType::Series),
            Message::GenreToggled(Genre::SciFi, true),
            Message::MonthSelected(ReadMonth(chrono::Month::March)),
            Message::Save,
        ] {
            let _ = app.update(message);
        }

        assert_eq!(app.form.status().message(), "Saved!");
        let contents = std::fs::read_to_string(dir.path().join("read_books.csv")).unwrap();
        assert_eq!(
            contents,
            "Title,Author,Rating,Type,Genres,Month\r\nDune,Frank Herbert,9,Series,Sci-Fi,March\r\n"
        );
    }

    #[test]
    fn test_to_be_read_without_author_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        let _ = app.update(Message::TitleChanged("Piranesi".to_string()));
        let _ = app.update(Message::TypeSelected(BookType::Standalone));
        let _ = app.update(Message::Save);

        assert_eq!(app.form.status().message(), "Fill in all fields.");
        assert!(!dir.path().join("tbr.csv").exists());
    }

    #[test]
    fn test_save_failure_is_reported_and_input_kept() {
        let dir = TempDir::new().unwrap();
        let mut app = ReadingLists::new(&Settings::with_data_dir(dir.path().join("missing"))).0;

        let _ = app.update(Message::TitleChanged("Piranesi".to_string()));
        let _ = app.update(Message::AuthorChanged("Susanna Clarke".to_string()));
        let _ = app.update(Message::TypeSelected(BookType::Standalone));
        let _ = app.update(Message::Save);

        assert!(app.form.status().message().starts_with("Error saving file: "));
        assert_eq!(app.form.fields().title(), "Piranesi");
        assert_eq!(app.form.fields().author(), "Susanna Clarke");
    }
}
