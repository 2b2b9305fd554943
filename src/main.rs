use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::{time, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

mod camera;
mod config;
mod error;
mod net;
mod state;
mod ui;

use camera::{CaptureOptions, DesktopCamera};
use config::Config;
use error::{CaptureError, FetchError};
use net::PicsumClient;
use state::alert::{Alert, AlertQueue};
use state::data::{PhotoEntry, ProfilePhoto};
use state::gallery::{FetchOutcome, FetchTicket, Gallery, ListGeneration};
use state::screen::Screen;
use state::session::{Field, Session};

/// Spinner animation step per tick
const SPINNER_STEP: f32 = 0.02;

/// Main application state
struct PhotoGate {
    config: Config,
    /// Picsum API client shared by every request
    client: PicsumClient,
    camera: DesktopCamera,
    session: Session,
    screen: Screen,
    gallery: Gallery,
    profile: ProfilePhoto,
    /// A capture flow is running; further requests are ignored
    capturing: bool,
    alerts: AlertQueue,
    /// Blurred image behind the progress screen
    backdrop: Option<Handle>,
    /// Spinner animation phase, 0.0..1.0
    spinner: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited a login field
    FieldChanged(Field, String),
    /// User pressed the login button or Enter
    Submit,
    /// Photo listing request resolved
    PhotosFetched(FetchTicket, Result<Vec<PhotoEntry>, FetchError>),
    /// One gallery thumbnail resolved
    ThumbnailFetched(ListGeneration, String, Result<Vec<u8>, FetchError>),
    /// Progress screen backdrop resolved
    BackdropFetched(Result<Vec<u8>, FetchError>),
    /// User asked to reload the listing
    Refresh,
    /// User clicked "Take Profile Photo"
    TakePhoto,
    /// Capture flow finished
    CaptureFinished(Result<Option<PathBuf>, CaptureError>),
    /// User closed the displayed alert
    DismissAlert,
    /// Spinner animation frame
    Tick,
}

impl PhotoGate {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load();
        (Self::with_config(config), Task::none())
    }

    fn with_config(config: Config) -> Self {
        // Without an HTTP client the app cannot do anything past the login
        let client = PicsumClient::new(config.api.clone())
            .expect("Failed to initialize HTTP client");
        let camera = DesktopCamera::new(config.camera.pre_granted);

        PhotoGate {
            config,
            client,
            camera,
            session: Session::new(),
            screen: Screen::default(),
            gallery: Gallery::new(),
            profile: ProfilePhoto::default(),
            capturing: false,
            alerts: AlertQueue::default(),
            backdrop: None,
            spinner: 0.0,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                if self.screen == Screen::LoggedOut {
                    self.session.edit(field, value);
                }
                Task::none()
            }
            Message::Submit => {
                if self.session.is_authenticated() {
                    return Task::none();
                }

                match self.session.submit() {
                    Ok(()) => {
                        log::info!("Logged in as {}", self.session.display_name());
                        self.screen = self.screen.login_succeeded();
                        Task::batch([self.start_fetch(), self.fetch_backdrop()])
                    }
                    Err(e) => {
                        log::info!("Login rejected: {}", e);
                        self.alerts.push(Alert::error(e.to_string()));
                        Task::none()
                    }
                }
            }
            Message::Refresh => {
                if !self.screen.shows_gallery() {
                    return Task::none();
                }
                self.screen = self.screen.refresh_started();
                self.start_fetch()
            }
            Message::PhotosFetched(ticket, result) => {
                match self.gallery.finish_fetch(ticket, result) {
                    FetchOutcome::Stale => {
                        log::debug!("Discarding response of superseded fetch {:?}", ticket);
                        Task::none()
                    }
                    FetchOutcome::Replaced(count) => {
                        self.screen = self.screen.fetch_finished();
                        log::info!("Gallery now shows {} photos", count);
                        self.fetch_thumbnails()
                    }
                    FetchOutcome::Failed(e) => {
                        self.screen = self.screen.fetch_finished();
                        log::warn!("Photo fetch failed: {}", e);
                        self.alerts.push(Alert::error("Could not load the photos"));
                        Task::none()
                    }
                }
            }
            Message::ThumbnailFetched(generation, id, result) => {
                match result {
                    Ok(bytes) => {
                        if !self.gallery.store_thumbnail(generation, id, Handle::from_bytes(bytes)) {
                            log::debug!("Dropping thumbnail of a replaced list");
                        }
                    }
                    Err(e) => log::debug!("Thumbnail {} failed: {}", id, e),
                }
                Task::none()
            }
            Message::BackdropFetched(result) => {
                match result {
                    Ok(bytes) => self.backdrop = Some(Handle::from_bytes(bytes)),
                    Err(e) => log::warn!("Backdrop download failed: {}", e),
                }
                Task::none()
            }
            Message::TakePhoto => {
                if self.capturing {
                    return Task::none();
                }
                self.capturing = true;

                let device = self.camera.clone();
                let options = CaptureOptions::profile(self.config.camera.quality);
                Task::perform(
                    async move { camera::capture(&device, options).await },
                    Message::CaptureFinished,
                )
            }
            Message::CaptureFinished(result) => {
                self.capturing = false;
                match result {
                    Ok(Some(path)) => {
                        self.profile.replace(path);
                        self.alerts.push(Alert::new("Success", "Profile photo updated"));
                    }
                    // Cancelled: nothing changes
                    Ok(None) => {}
                    Err(CaptureError::PermissionDenied) => {
                        self.alerts.push(Alert::new(
                            "Permission required",
                            "We need camera access to take photos",
                        ));
                    }
                    Err(e) => {
                        log::warn!("Profile photo capture failed: {}", e);
                        self.alerts.push(Alert::error("Could not take the photo"));
                    }
                }
                Task::none()
            }
            Message::DismissAlert => {
                self.alerts.dismiss();
                Task::none()
            }
            Message::Tick => {
                self.spinner = (self.spinner + SPINNER_STEP) % 1.0;
                Task::none()
            }
        }
    }

    /// Issue a new fetch ticket and request the listing
    fn start_fetch(&mut self) -> Task<Message> {
        let ticket = self.gallery.begin_fetch();
        Task::perform(self.client.clone().fetch_photos(), move |result| {
            Message::PhotosFetched(ticket, result)
        })
    }

    /// Download a thumbnail for every photo of the current list
    fn fetch_thumbnails(&self) -> Task<Message> {
        let generation = self.gallery.generation();
        let tasks = self.gallery.photos().iter().map(|photo| {
            let client = self.client.clone();
            let url = client.thumbnail_url(photo);
            let id = photo.id.clone();
            Task::perform(
                async move { (id, client.fetch_image(url).await) },
                move |(id, result)| Message::ThumbnailFetched(generation, id, result),
            )
        });
        Task::batch(tasks)
    }

    fn fetch_backdrop(&self) -> Task<Message> {
        let client = self.client.clone();
        let url = client.backdrop_url();
        Task::perform(client.fetch_image(url), Message::BackdropFetched)
    }

    /// Build the user interface for the current screen
    fn view(&self) -> Element<Message> {
        let screen = match self.screen {
            Screen::LoggedOut => ui::login::view(&self.session),
            Screen::Progress => ui::progress::view(self.backdrop.as_ref(), self.spinner),
            Screen::LoadingList | Screen::Gallery => ui::gallery::view(
                &self.session,
                &self.profile,
                &self.gallery,
                self.capturing,
                self.screen == Screen::LoadingList,
                self.spinner,
            ),
        };

        ui::alert::overlay(screen, self.alerts.current())
    }

    fn subscription(&self) -> Subscription<Message> {
        // F5 stands in for pull-to-refresh
        let refresh = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::F5) => Some(Message::Refresh),
            _ => None,
        });

        if self.screen.is_fetching() {
            Subscription::batch([
                refresh,
                time::every(Duration::from_millis(30)).map(|_| Message::Tick),
            ])
        } else {
            refresh
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    iced::application("Photo Gate", PhotoGate::update, PhotoGate::view)
        .subscription(PhotoGate::subscription)
        .theme(PhotoGate::theme)
        .window_size(Size::new(420.0, 820.0))
        .centered()
        .run_with(PhotoGate::new)
}
