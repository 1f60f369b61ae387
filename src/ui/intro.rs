/// Intro burst overlay
///
/// A fullscreen canvas that paints the black backdrop and each burst
/// thumbnail at the pose sampled from the sequencer. The canvas swallows
/// clicks so the grid underneath stays inert while the intro runs; a
/// click also skips the rest of the burst.

use std::time::Instant;

use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::state::intro::IntroSequencer;
use crate::state::viewport::BurstLayout;
use crate::Message;

/// Canvas program for the burst. Borrows the sequencer and the thumbnail
/// handles for the participating artworks, in display order.
pub struct IntroOverlay<'a> {
    pub intro: &'a IntroSequencer,
    pub thumbnails: &'a [iced::widget::image::Handle],
    pub layout: BurstLayout,
    /// Angular slots the circle is divided into
    pub divisor: usize,
    /// Render-time clock, fed from the tick subscription
    pub now: Instant,
}

impl Program<Message> for IntroOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let alpha = self.intro.overlay_alpha(self.now);
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgba(0.0, 0.0, 0.0, alpha),
        );

        let center = frame.center();
        for (index, handle) in self.thumbnails.iter().enumerate() {
            let pose = self
                .intro
                .item_frame(self.now, index, self.divisor, self.layout.radius);

            let size = self.layout.thumb_size * pose.scale;
            if size <= 0.0 {
                continue;
            }

            let top_left = Point::new(
                center.x + pose.x - size / 2.0,
                center.y + pose.y - size / 2.0,
            );
            frame.draw_image(
                Rectangle::new(top_left, Size::new(size, size)),
                canvas::Image::new(handle.clone())
                    .rotation(pose.rotation)
                    .opacity(alpha),
            );
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Swallow the press so it never reaches the grid; skip the burst
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (canvas::event::Status::Captured, Some(Message::IntroSkipped))
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }
}
