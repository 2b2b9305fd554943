/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer and the UI layer. Nothing here is persisted.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A single record of the photo listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoEntry {
    /// Picsum photo ID (numeric, but sent as a string)
    pub id: String,
    /// Photographer name, the gallery sort key
    pub author: String,
    /// Original width in pixels
    pub width: u32,
    /// Original height in pixels
    pub height: u32,
    /// Full-size download URL
    #[serde(rename = "download_url")]
    pub image_url: String,
}

/// Sort a listing A-Z by author
///
/// Plain lexicographic comparison; entries with the same author keep no
/// guaranteed relative order.
pub fn sort_by_author(photos: &mut [PhotoEntry]) {
    photos.sort_unstable_by(|a, b| a.author.cmp(&b.author));
}

/// Reference to the locally captured profile photo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePhoto {
    path: Option<PathBuf>,
}

impl ProfilePhoto {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the current reference with a new capture
    pub fn replace(&mut self, path: PathBuf) {
        self.path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, author: &str) -> PhotoEntry {
        PhotoEntry {
            id: id.to_string(),
            author: author.to_string(),
            width: 100,
            height: 100,
            image_url: format!("https://picsum.photos/id/{id}/100/100"),
        }
    }

    #[test]
    fn test_deserialize_listing_record() {
        let json = r#"{
            "id": "0",
            "author": "Alejandro Escamilla",
            "width": 5616,
            "height": 3744,
            "url": "https://unsplash.com/photos/yC-Yzbqy7PY",
            "download_url": "https://picsum.photos/id/0/5616/3744"
        }"#;
        let photo: PhotoEntry = serde_json::from_str(json).unwrap();

        assert_eq!(photo.id, "0");
        assert_eq!(photo.author, "Alejandro Escamilla");
        assert_eq!((photo.width, photo.height), (5616, 3744));
        assert_eq!(photo.image_url, "https://picsum.photos/id/0/5616/3744");
    }

    #[test]
    fn test_sort_by_author() {
        let mut photos = vec![entry("2", "Bob"), entry("1", "Alice"), entry("3", "Carol")];
        sort_by_author(&mut photos);

        let authors: Vec<&str> = photos.iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_profile_photo_replace() {
        let mut profile = ProfilePhoto::default();
        assert!(profile.path().is_none());

        profile.replace(PathBuf::from("/tmp/a.jpg"));
        profile.replace(PathBuf::from("/tmp/b.jpg"));
        assert_eq!(profile.path(), Some(Path::new("/tmp/b.jpg")));
    }
}
