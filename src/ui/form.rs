//! Widgets for the book form
//! Builds the field set for whichever mode is active
use iced::widget::{button, checkbox, column, pick_list, radio, text, text_input, Column, Row};
use iced::{Color, Element, Length};

use crate::state::data::{BookType, Genre, ReadMonth};
use crate::state::form::{FormFields, Mode, ReadFields, Status};
use crate::Message;

const SUCCESS: Color = Color { r: 0.2, g: 0.7, b: 0.3, a: 1.0 };
const FAILURE: Color = Color { r: 0.9, g: 0.25, b: 0.25, a: 1.0 };

const GENRES_PER_ROW: usize = 4;

/// "Read" / "To Be Read" radio buttons
pub fn mode_selector<'a>(mode: Mode) -> Element<'a, Message> {
    Row::with_children(
        Mode::ALL
            .iter()
            .map(|&option| radio(option.label(), option, Some(mode), Message::ModeSelected).into()),
    )
    .spacing(20)
    .into()
}

/// Status line, green on success and red on failure
pub fn status_line(status: &Status) -> Element<'_, Message> {
    let color = match status {
        Status::Saved => SUCCESS,
        Status::Idle | Status::Failed(_) => FAILURE,
    };

    text(status.message()).size(16).color(color).into()
}

/// Fields for the active mode followed by the Save button
pub fn fields_view(fields: &FormFields) -> Element<'_, Message> {
    let mut content: Column<Message> = column![
        labeled_input("Title:", fields.title(), Message::TitleChanged),
        labeled_input("Author:", fields.author(), Message::AuthorChanged),
        type_selector(fields.book_type()),
    ]
    .spacing(8);

    // Read mode adds rating, genres and month
    if let FormFields::Read(read) = fields {
        content = content.push(read_fields(read));
    }

    content
        .push(button("Save").on_press(Message::Save).padding(10))
        .width(Length::Fill)
        .into()
}

fn read_fields(fields: &ReadFields) -> Element<'_, Message> {
    column![
        labeled_input("Rating (0-10):", &fields.rating, Message::RatingChanged),
        genre_grid(fields),
        text("Month:"),
        pick_list(ReadMonth::ALL, fields.month, Message::MonthSelected).width(Length::Fill),
    ]
    .spacing(8)
    .into()
}

fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![text(label), text_input("", value).on_input(on_input).padding(6)]
        .spacing(4)
        .into()
}

fn type_selector<'a>(selected: Option<BookType>) -> Element<'a, Message> {
    Row::with_children(
        BookType::ALL
            .iter()
            .map(|&book_type| {
                radio(book_type.label(), book_type, selected, Message::TypeSelected).into()
            }),
    )
    .spacing(16)
    .into()
}

/// Genre checkboxes, four per row
fn genre_grid(fields: &ReadFields) -> Element<'_, Message> {
    Column::with_children(genre_rows().into_iter().map(|genres| {
        Row::with_children(genres.into_iter().map(|genre| {
            checkbox(genre.label(), fields.genres.contains(&genre))
                .on_toggle(move |checked| Message::GenreToggled(genre, checked))
                .width(Length::FillPortion(1))
                .into()
        }))
        .spacing(6)
        .width(Length::Fill)
        .into()
    }))
    .spacing(6)
    .into()
}

/// Genres split into checkbox rows, in display order
fn genre_rows() -> Vec<Vec<Genre>> {
    Genre::ALL
        .chunks(GENRES_PER_ROW)
        .map(<[Genre]>::to_vec)
        .collect()
}
