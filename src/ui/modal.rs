/// Lightbox modal for the selected artwork
///
/// A dimmed fullscreen backdrop that dismisses on click, under a centered
/// canvas that draws the enlarged image with the current zoom/pan
/// transform and turns wheel and drag input into messages. In the stepped
/// zoom mode the wheel and drag are inert and +/- buttons are shown
/// instead.

use cgmath::Vector2;
use iced::advanced::image::Renderer as _;
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::widget::{
    button, canvas as canvas_widget, container, image, mouse_area, row, stack, text, Space,
};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::config::ZoomMode;
use crate::state::selection::SelectionController;
use crate::state::viewport::ViewportTracker;
use crate::Message;

/// Canvas program that renders the enlarged image and captures zoom/pan
/// input over it.
pub struct ZoomViewer {
    pub handle: image::Handle,
    pub scale: f32,
    pub offset: Vector2<f32>,
    pub mode: ZoomMode,
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    /// Pointer position minus the pan offset, captured at press
    pub anchor: Option<Point>,
}

impl Program<Message> for ZoomViewer {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let image_size = renderer.measure_image(&self.handle);
        let width = image_size.width as f32;
        let height = image_size.height as f32;
        if width <= 0.0 || height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Aspect-preserving fit, then the user transform on top: scale
        // about the center, translate by the pan offset
        let fit = (bounds.width / width).min(bounds.height / height);
        let drawn = Size::new(
            width * fit * self.scale,
            height * fit * self.scale,
        );
        let top_left = Point::new(
            bounds.width / 2.0 + self.offset.x - drawn.width / 2.0,
            bounds.height / 2.0 + self.offset.y - drawn.height / 2.0,
        );

        frame.draw_image(
            Rectangle::new(top_left, drawn),
            canvas::Image::new(self.handle.clone()),
        );

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        // The canvas sees every mouse event, not just those over it.
        // Anything outside its bounds is left alone so the press can
        // reach the backdrop and dismiss the modal.
        match event {
            // Mouse wheel for zooming (wheel-drag mode only)
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if self.mode != ZoomMode::WheelDrag || cursor.position_over(bounds).is_none() {
                    return (canvas::event::Status::Ignored, None);
                }
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y.round() as i32,
                    // Trackpads report pixels; one event counts as one notch
                    mouse::ScrollDelta::Pixels { y, .. } => y.signum() as i32,
                };
                if notches == 0 {
                    return (canvas::event::Status::Captured, None);
                }
                return (
                    canvas::event::Status::Captured,
                    Some(Message::WheelZoomed(notches)),
                );
            }

            // Mouse button press - start dragging. Captured in both modes
            // so a click on the image never falls through to the backdrop
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_over(bounds) {
                    if self.mode == ZoomMode::WheelDrag {
                        state.is_dragging = true;
                        state.anchor =
                            Some(Point::new(pos.x - self.offset.x, pos.y - self.offset.y));
                    }
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    state.anchor = None;
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Pointer left the window - stop dragging
            canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                state.is_dragging = false;
                state.anchor = None;
            }

            // Mouse move - pan while dragging; leaving the canvas ends
            // the drag
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    match (cursor.position_over(bounds), state.anchor) {
                        (Some(pos), Some(anchor)) => {
                            let offset = Vector2::new(pos.x - anchor.x, pos.y - anchor.y);
                            return (
                                canvas::event::Status::Captured,
                                Some(Message::ImagePanned(offset)),
                            );
                        }
                        _ => {
                            state.is_dragging = false;
                            state.anchor = None;
                        }
                    }
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// Build the whole modal layer: backdrop, viewer, and (in stepped mode)
/// the zoom buttons.
pub fn view<'a>(
    handle: &image::Handle,
    lightbox: &SelectionController,
    viewport: &ViewportTracker,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::ModalDismissed);

    let viewer = canvas_widget(ZoomViewer {
        handle: handle.clone(),
        scale: lightbox.zoom().scale(),
        offset: lightbox.zoom().offset(),
        mode: lightbox.mode(),
    })
    .width(Length::Fixed((viewport.width() * 0.8).max(320.0)))
    .height(Length::Fixed((viewport.height() * 0.85).max(240.0)));

    let mut layers = stack![
        backdrop,
        container(viewer)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ];

    if lightbox.mode() == ZoomMode::Stepped {
        let controls = row![
            button(text("+").size(24)).on_press(Message::ZoomIn).padding(10),
            button(text("−").size(24)).on_press(Message::ZoomOut).padding(10),
        ]
        .spacing(8);

        layers = layers.push(
            container(controls)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Right)
                .align_y(iced::alignment::Vertical::Bottom)
                .padding(24),
        );
    }

    layers.into()
}
