/// Gallery state: the sorted photo list and its thumbnails
///
/// Each fetch is identified by a ticket. Only the newest ticket may
/// replace the list or clear the in-progress flag, so a slow request that
/// resolves after a newer one is dropped instead of overwriting fresh data.

use iced::widget::image::Handle;
use std::collections::HashMap;

use super::data::{sort_by_author, PhotoEntry};
use crate::error::FetchError;

/// Identifies one fetch of the photo list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Identifies one version of the held list, used to drop thumbnails that
/// arrive after the list they belong to was replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGeneration(u64);

/// What a resolved fetch did to the gallery
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The list was replaced with this many entries
    Replaced(usize),
    /// The fetch failed; the previous list is untouched
    Failed(FetchError),
    /// A newer fetch was issued since; the result was discarded
    Stale,
}

#[derive(Debug, Default)]
pub struct Gallery {
    photos: Vec<PhotoEntry>,
    thumbnails: HashMap<String, Handle>,
    generation: u64,
    issued: u64,
    pending: Option<FetchTicket>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photos in display order (author A-Z)
    pub fn photos(&self) -> &[PhotoEntry] {
        &self.photos
    }

    pub fn thumbnail(&self, id: &str) -> Option<&Handle> {
        self.thumbnails.get(id)
    }

    pub fn generation(&self) -> ListGeneration {
        ListGeneration(self.generation)
    }

    /// True while the newest issued fetch has not resolved
    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<FetchTicket> {
        self.pending
    }

    /// Issue a ticket for a new fetch, superseding any fetch in flight
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Apply the result of a fetch
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<PhotoEntry>, FetchError>,
    ) -> FetchOutcome {
        if self.pending != Some(ticket) {
            return FetchOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(mut photos) => {
                sort_by_author(&mut photos);
                let count = photos.len();
                self.photos = photos;
                self.thumbnails.clear();
                self.generation += 1;
                FetchOutcome::Replaced(count)
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Store a downloaded thumbnail if its list is still the one displayed
    pub fn store_thumbnail(&mut self, generation: ListGeneration, id: String, handle: Handle) -> bool {
        if generation != self.generation() {
            return false;
        }
        self.thumbnails.insert(id, handle);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, author: &str) -> PhotoEntry {
        PhotoEntry {
            id: id.to_string(),
            author: author.to_string(),
            width: 10,
            height: 10,
            image_url: String::new(),
        }
    }

    fn authors(gallery: &Gallery) -> Vec<&str> {
        gallery.photos().iter().map(|p| p.author.as_str()).collect()
    }

    #[test]
    fn test_successful_fetch_sorts_and_replaces() {
        let mut gallery = Gallery::new();
        let ticket = gallery.begin_fetch();
        assert!(gallery.is_fetching());

        let outcome = gallery.finish_fetch(ticket, Ok(vec![entry("2", "Bob"), entry("1", "Alice")]));

        assert_eq!(outcome, FetchOutcome::Replaced(2));
        assert_eq!(authors(&gallery), ["Alice", "Bob"]);
        assert!(!gallery.is_fetching());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_list() {
        let mut gallery = Gallery::new();
        let ticket = gallery.begin_fetch();
        gallery.finish_fetch(ticket, Ok(vec![entry("1", "Alice")]));

        let ticket = gallery.begin_fetch();
        let outcome = gallery.finish_fetch(ticket, Err(FetchError::Timeout));

        assert_eq!(outcome, FetchOutcome::Failed(FetchError::Timeout));
        assert_eq!(authors(&gallery), ["Alice"]);
        assert!(!gallery.is_fetching());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut gallery = Gallery::new();
        let slow = gallery.begin_fetch();
        let fast = gallery.begin_fetch();

        let outcome = gallery.finish_fetch(fast, Ok(vec![entry("2", "New")]));
        assert_eq!(outcome, FetchOutcome::Replaced(1));

        let outcome = gallery.finish_fetch(slow, Ok(vec![entry("1", "Old")]));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(authors(&gallery), ["New"]);
    }

    #[test]
    fn test_stale_response_does_not_clear_newer_fetch() {
        let mut gallery = Gallery::new();
        let slow = gallery.begin_fetch();
        let _fast = gallery.begin_fetch();

        assert_eq!(gallery.finish_fetch(slow, Err(FetchError::Timeout)), FetchOutcome::Stale);
        assert!(gallery.is_fetching());
    }

    #[test]
    fn test_thumbnail_for_replaced_list_is_dropped() {
        let mut gallery = Gallery::new();
        let ticket = gallery.begin_fetch();
        gallery.finish_fetch(ticket, Ok(vec![entry("1", "Alice")]));
        let old_generation = gallery.generation();

        let ticket = gallery.begin_fetch();
        gallery.finish_fetch(ticket, Ok(vec![entry("1", "Alice")]));

        let handle = Handle::from_bytes(vec![0u8; 4]);
        assert!(!gallery.store_thumbnail(old_generation, "1".to_string(), handle.clone()));
        assert!(gallery.thumbnail("1").is_none());

        assert!(gallery.store_thumbnail(gallery.generation(), "1".to_string(), handle));
        assert!(gallery.thumbnail("1").is_some());
    }
}
