/// Hero header, artwork card grid, and contact footer

use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use crate::content::data::{ArtistRecord, ArtworkRecord, ContentStore};
use crate::Message;

/// Width of one artwork card in the grid.
const CARD_WIDTH: f32 = 380.0;

/// Artist photo, name, and bio.
pub fn header<'a>(artist: &'a ArtistRecord, photo: &image::Handle) -> Element<'a, Message> {
    let content = column![
        image(photo.clone())
            .width(Length::Fixed(160.0))
            .height(Length::Fixed(160.0)),
        text(artist.name.as_str()).size(40),
        text(artist.bio.as_str()).size(20),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// The responsive card grid, in display order. Clicking a card selects
/// that artwork.
pub fn cards<'a>(
    store: &'a ContentStore,
    thumbnails: &[image::Handle],
) -> Element<'a, Message> {
    let cards = store
        .artworks()
        .iter()
        .zip(thumbnails)
        .map(|(artwork, thumbnail)| card(artwork, thumbnail))
        .collect();

    let grid = Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0);

    container(grid)
        .width(Length::Fill)
        .max_width(1200)
        .center_x(Length::Fill)
        .into()
}

fn card<'a>(artwork: &'a ArtworkRecord, thumbnail: &image::Handle) -> Element<'a, Message> {
    let price = if artwork.is_sold() {
        text(artwork.price.as_str())
            .size(16)
            .color(Color::from_rgb(0.70, 0.15, 0.15))
    } else {
        text(artwork.price.as_str()).size(16)
    };

    let details = column![
        text(artwork.title.as_str()).size(20),
        text(artwork.description.as_str()).size(14),
        price,
    ]
    .spacing(4)
    .padding(12);

    let content = column![image(thumbnail.clone()).width(Length::Fill), details];

    mouse_area(container(content).width(Length::Fixed(CARD_WIDTH)))
        .on_press(Message::ArtworkSelected(artwork.id))
        .into()
}

/// Contact block with the fixed social link.
pub fn footer<'a>(artist: &'a ArtistRecord, social_url: &'a str) -> Element<'a, Message> {
    let content = column![
        text("Contact the Artist").size(28),
        text(format!("Email: {}", artist.email)).size(16),
        text(format!("Phone: {}", artist.phone)).size(16),
        text(social_url).size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(32)
        .center_x(Length::Fill)
        .into()
}
