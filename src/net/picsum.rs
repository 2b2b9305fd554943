use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::state::data::PhotoEntry;

/// The gallery always shows the first page of fifty photos
const LIST_PAGE: u32 = 1;
const LIST_LIMIT: u32 = 50;

/// HTTP client for the Picsum listing and image endpoints
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct PicsumClient {
    http: Client,
    api: ApiConfig,
}

impl PicsumClient {
    pub fn new(api: ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(api.timeout())
            .user_agent(concat!("photo-gate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, api })
    }

    /// Fetch one page of the photo listing
    ///
    /// The entries come back in server order; the gallery sorts them.
    pub async fn fetch_photos(self) -> Result<Vec<PhotoEntry>, FetchError> {
        log::info!(
            "Fetching {} (page {}, limit {})",
            self.api.list_url,
            LIST_PAGE,
            LIST_LIMIT
        );

        let body = self
            .http
            .get(&self.api.list_url)
            .query(&[("page", LIST_PAGE), ("limit", LIST_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let photos = parse_listing(&body)?;
        log::info!("Fetched {} photos", photos.len());
        Ok(photos)
    }

    /// Download the raw bytes of an image
    pub async fn fetch_image(self, url: String) -> Result<Vec<u8>, FetchError> {
        let bytes = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }

    /// URL of the rendition shown in a gallery card
    pub fn thumbnail_url(&self, photo: &PhotoEntry) -> String {
        resized_url(
            &photo.image_url,
            self.api.thumbnail_width,
            self.api.thumbnail_height,
        )
    }

    pub fn backdrop_url(&self) -> String {
        self.api.backdrop_url.clone()
    }
}

/// Swap the trailing `/{width}/{height}` of a download URL for the given
/// size; URLs without that suffix are returned as they are
pub fn resized_url(image_url: &str, width: u32, height: u32) -> String {
    let mut segments = image_url.rsplitn(3, '/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(h), Some(w), Some(base)) if is_dimension(w) && is_dimension(h) => {
            format!("{}/{}/{}", base, width, height)
        }
        _ => image_url.to_string(),
    }
}

fn is_dimension(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the JSON array returned by the listing endpoint
pub fn parse_listing(body: &[u8]) -> Result<Vec<PhotoEntry>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
