/// Profile photo capture
///
/// The flow is platform independent: ask the host for permission, then
/// open its capture UI. The host side sits behind `CameraDevice`; the
/// desktop implementation lives in `desktop.rs`.

pub mod desktop;

use std::future::Future;
use std::path::PathBuf;

use crate::error::CaptureError;

pub use desktop::DesktopCamera;

/// Answer to a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Constraints passed to the capture UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Let the user crop before confirming
    pub allows_editing: bool,
    /// Width:height ratio of the result
    pub aspect: (u32, u32),
    /// JPEG quality, 0.0 to 1.0
    pub quality: f32,
}

impl CaptureOptions {
    /// Square profile photo at the given quality
    pub fn profile(quality: f32) -> Self {
        Self {
            allows_editing: true,
            aspect: (1, 1),
            quality,
        }
    }
}

/// Host capabilities used by the capture flow
pub trait CameraDevice: Send + Sync {
    fn request_permission(&self) -> impl Future<Output = Permission> + Send;

    /// Open the capture UI; `Ok(None)` means the user cancelled
    fn launch_capture(
        &self,
        options: CaptureOptions,
    ) -> impl Future<Output = Result<Option<PathBuf>, CaptureError>> + Send;
}

/// Take a profile photo
///
/// Returns the local path of the new photo, or `None` if the user
/// cancelled. The capture UI is never opened without permission.
pub async fn capture<D: CameraDevice>(
    device: &D,
    options: CaptureOptions,
) -> Result<Option<PathBuf>, CaptureError> {
    if device.request_permission().await == Permission::Denied {
        log::info!("Camera permission denied");
        return Err(CaptureError::PermissionDenied);
    }

    let result = device.launch_capture(options).await?;
    match &result {
        Some(path) => log::info!("Captured profile photo: {}", path.display()),
        None => log::info!("Capture cancelled"),
    }
    Ok(result)
}
