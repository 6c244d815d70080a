use thiserror::Error;

/// Failure kinds surfaced by source acquisition and surface setup.
///
/// All of these are recoverable: a later start action re-attempts acquisition
/// from scratch, no backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("no usable audio input device")]
    DeviceUnavailable,
    #[error("audio resource could not be decoded")]
    DecodeError,
    #[error("2d drawing context unavailable")]
    SurfaceUnavailable,
}

impl ErrorKind {
    /// Stable identifier for surfacing to UI chrome.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PermissionDenied => "permission-denied",
            ErrorKind::DeviceUnavailable => "device-unavailable",
            ErrorKind::DecodeError => "decode-error",
            ErrorKind::SurfaceUnavailable => "surface-unavailable",
        }
    }
}
