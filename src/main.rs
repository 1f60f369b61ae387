use std::time::{Duration, Instant};

use cgmath::Vector2;
use iced::widget::{column, container, image, scrollable, stack};
use iced::{event, time, window};
use iced::{Element, Event, Length, Size, Subscription, Task, Theme};

mod config;
mod content;
mod state;
mod ui;

use config::ViewOptions;
use content::data::ContentStore;
use content::manifest::{self, ManifestError};
use state::intro::IntroSequencer;
use state::selection::{Selection, SelectionController};
use state::viewport::ViewportTracker;

/// Interval of the animation tick while the intro is running.
const TICK: Duration = Duration::from_millis(16);

/// Main application state
struct PortfolioView {
    /// The portfolio content, fixed once the startup load resolves
    content: ContentStore,
    options: ViewOptions,
    /// Image handles parallel to the artwork list, in display order
    thumbnails: Vec<image::Handle>,
    artist_photo: image::Handle,
    /// One-shot intro burst state machine
    intro: IntroSequencer,
    /// Tracked window size; unmeasured until the startup query lands
    viewport: ViewportTracker,
    /// Selection and zoom/pan of the enlarged artwork
    lightbox: SelectionController,
    /// Render-time clock, advanced by the tick subscription
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Startup manifest override load finished (None: no override file)
    ManifestLoaded(Option<Result<(ContentStore, ViewOptions), ManifestError>>),
    /// Initial window size query completed
    Measured(Size),
    /// The window was resized
    Resized(Size),
    /// Animation tick while the intro is running
    Tick(Instant),
    /// User clicked the intro overlay
    IntroSkipped,
    /// User clicked a grid card
    ArtworkSelected(u32),
    /// User clicked the modal backdrop
    ModalDismissed,
    /// Stepped-mode zoom buttons
    ZoomIn,
    ZoomOut,
    /// Wheel notches over the enlarged image (positive = in)
    WheelZoomed(i32),
    /// Drag moved the enlarged image to a new offset
    ImagePanned(Vector2<f32>),
}

impl PortfolioView {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let (content, options) = manifest::embedded();
        let now = Instant::now();

        println!("🎨 Atelier initialized with {} artworks", content.len());

        let app = PortfolioView {
            thumbnails: thumbnail_handles(&content),
            artist_photo: image::Handle::from_path(&content.artist().photo),
            intro: IntroSequencer::new(now),
            viewport: ViewportTracker::new(),
            lightbox: SelectionController::new(options.zoom_mode),
            now,
            content,
            options,
        };

        // Measure the window once at mount; until this lands the viewport
        // is unknown and desktop-only behavior stays off. The manifest
        // override is read in the background.
        let measure = window::get_latest()
            .and_then(window::get_size)
            .map(Message::Measured);
        let load = Task::perform(manifest::load_override(), Message::ManifestLoaded);

        (app, Task::batch([measure, load]))
    }

    fn title(&self) -> String {
        format!("{} | Portfolio", self.content.artist().name)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded(Some(Ok((content, options)))) => {
                println!(
                    "🖼️  Loaded portfolio override with {} artworks",
                    content.len()
                );
                self.thumbnails = thumbnail_handles(&content);
                self.artist_photo = image::Handle::from_path(&content.artist().photo);
                self.lightbox = SelectionController::new(options.zoom_mode);
                self.options = options;
                self.content = content;
            }
            Message::ManifestLoaded(Some(Err(e))) => {
                eprintln!("⚠️  Ignoring portfolio override: {e}");
            }
            Message::ManifestLoaded(None) => {}
            Message::Measured(size) | Message::Resized(size) => {
                self.viewport.resize(size.width, size.height);
            }
            Message::Tick(now) => {
                self.now = now;
                self.intro.poll(now);
            }
            Message::IntroSkipped => {
                self.intro.cancel();
            }
            Message::ArtworkSelected(id) => {
                // Recorded even below the breakpoint; visibility is
                // gated in view()
                self.lightbox.open(id);
            }
            Message::ModalDismissed => {
                self.lightbox.close();
            }
            Message::ZoomIn => {
                self.lightbox.zoom_in();
            }
            Message::ZoomOut => {
                self.lightbox.zoom_out();
            }
            Message::WheelZoomed(notches) => {
                self.lightbox.zoom_by(notches);
            }
            Message::ImagePanned(offset) => {
                self.lightbox.pan_to(offset);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = scrollable(
            column![
                ui::grid::header(self.content.artist(), &self.artist_photo),
                ui::grid::cards(&self.content, &self.thumbnails),
                ui::grid::footer(self.content.artist(), self.content.social_url()),
            ]
            .spacing(48)
            .padding(32)
            .width(Length::Fill),
        );

        let mut layers = stack![container(page).width(Length::Fill).height(Length::Fill)];

        if let Selection::Open(id) = self.lightbox.selection() {
            let visible = !self.options.modal_desktop_only || self.viewport.modal_enabled();
            if visible {
                if let Some(handle) = self.thumbnail_for(id) {
                    layers = layers.push(ui::modal::view(handle, &self.lightbox, &self.viewport));
                }
            }
        }

        if !self.content.is_empty() && !self.intro.is_retired(self.now) {
            let count = self.options.intro_items.count(self.content.len());
            let overlay = ui::intro::IntroOverlay {
                intro: &self.intro,
                thumbnails: &self.thumbnails[..count],
                layout: self.viewport.burst_layout(),
                divisor: self.options.intro_items.angle_divisor(self.content.len()),
                now: self.now,
            };
            layers = layers.push(
                iced::widget::canvas(overlay)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The resize listener lives for the whole app; the animation tick
        // is dropped (cancelling its timer) once the intro has retired
        let resize = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
            _ => None,
        });

        if self.intro.is_retired(self.now) {
            resize
        } else {
            Subscription::batch([resize, time::every(TICK).map(Message::Tick)])
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Image handle for artwork `id`, if it exists in the store.
    fn thumbnail_for(&self, id: u32) -> Option<&image::Handle> {
        let index = self
            .content
            .artworks()
            .iter()
            .position(|artwork| artwork.id == id)?;
        self.thumbnails.get(index)
    }
}

/// Build image handles for every artwork, in display order.
fn thumbnail_handles(content: &ContentStore) -> Vec<image::Handle> {
    content
        .artworks()
        .iter()
        .map(|artwork| image::Handle::from_path(&artwork.image))
        .collect()
}

fn main() -> iced::Result {
    iced::application(
        PortfolioView::title,
        PortfolioView::update,
        PortfolioView::view,
    )
    .subscription(PortfolioView::subscription)
    .theme(PortfolioView::theme)
    .centered()
    .run_with(PortfolioView::new)
}
