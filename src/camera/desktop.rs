/// Desktop capture adapter
///
/// Desktops have no camera permission model or crop UI of their own, so:
/// - permission is a yes/no dialog, asked once per session
/// - the capture UI is an image picker
/// - the picked image is centre-cropped to the requested aspect and saved
///   as JPEG in the cache directory
///
/// The picked file itself is never modified.

use image::codecs::jpeg::JpegEncoder;
use image::GenericImageView;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task;

use super::{CameraDevice, CaptureOptions, Permission};
use crate::error::CaptureError;

/// Extensions offered by the picker
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "bmp", "tiff"];

#[derive(Debug, Clone)]
pub struct DesktopCamera {
    granted: Arc<AtomicBool>,
    output_dir: PathBuf,
}

impl DesktopCamera {
    pub fn new(pre_granted: bool) -> Self {
        Self::with_output_dir(pre_granted, default_output_dir())
    }

    pub fn with_output_dir(pre_granted: bool, output_dir: PathBuf) -> Self {
        Self {
            granted: Arc::new(AtomicBool::new(pre_granted)),
            output_dir,
        }
    }
}

impl CameraDevice for DesktopCamera {
    async fn request_permission(&self) -> Permission {
        if self.granted.load(Ordering::SeqCst) {
            return Permission::Granted;
        }

        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Camera access")
            .set_description("Allow photo-gate to take a profile photo?")
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        if matches!(answer, MessageDialogResult::Yes) {
            self.granted.store(true, Ordering::SeqCst);
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    async fn launch_capture(
        &self,
        options: CaptureOptions,
    ) -> Result<Option<PathBuf>, CaptureError> {
        let picked = AsyncFileDialog::new()
            .set_title("Take Profile Photo")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
            .await;

        let Some(handle) = picked else {
            return Ok(None);
        };

        let source = handle.path().to_path_buf();
        let destination = self.output_dir.join(photo_file_name());

        // Decoding and encoding are CPU-bound
        let saved = task::spawn_blocking(move || save_cropped(&source, &destination, options))
            .await
            .map_err(|e| CaptureError::Failed(format!("Task join error: {}", e)))??;

        Ok(Some(saved))
    }
}

/// Cache directory for captured photos
/// Returns ~/.cache/photo-gate/profile on Linux
fn default_output_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("photo-gate");
    path.push("profile");
    path
}

/// Timestamped name so every capture gets a fresh file
fn photo_file_name() -> String {
    format!("profile-{}.jpg", chrono::Local::now().format("%Y%m%d-%H%M%S%3f"))
}

/// Largest centred rectangle of the given aspect inside `width` x `height`
///
/// Returns `(x, y, w, h)`.
pub fn crop_rect(width: u32, height: u32, aspect: (u32, u32)) -> (u32, u32, u32, u32) {
    let (aw, ah) = (aspect.0.max(1) as u64, aspect.1.max(1) as u64);
    let (w, h) = (width as u64, height as u64);

    // Fit to the limiting side
    let (crop_w, crop_h) = if w * ah > h * aw {
        (h * aw / ah, h)
    } else {
        (w, w * ah / aw)
    };

    let x = (w - crop_w) / 2;
    let y = (h - crop_h) / 2;
    (x as u32, y as u32, crop_w as u32, crop_h as u32)
}

/// Map a 0.0-1.0 quality to the encoder's 1-100 scale
fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Crop `source` to the requested aspect and write it as JPEG
fn save_cropped(
    source: &Path,
    destination: &Path,
    options: CaptureOptions,
) -> Result<PathBuf, CaptureError> {
    let img = image::open(source)?;
    let (width, height) = img.dimensions();

    let img = if options.allows_editing {
        let (x, y, w, h) = crop_rect(width, height, options.aspect);
        img.crop_imm(x, y, w, h)
    } else {
        img
    };

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut writer = BufWriter::new(File::create(destination)?);
    rgb.write_with_encoder(JpegEncoder::new_with_quality(
        &mut writer,
        jpeg_quality(options.quality),
    ))?;

    log::debug!(
        "Saved {}x{} profile photo to {}",
        rgb.width(),
        rgb.height(),
        destination.display()
    );
    Ok(destination.to_path_buf())
}
