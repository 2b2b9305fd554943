/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Login form and session flag (session.rs)
/// - Screen selection (screen.rs)
/// - Photo list, fetch tickets and thumbnails (gallery.rs)
/// - Modal alerts (alert.rs)

pub mod alert;
pub mod data;
pub mod gallery;
pub mod screen;
pub mod session;
