//! Error types for the renderer and the chat proxy.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// The surface reported no supported texture formats.
    NoSurfaceFormat,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            GpuError::NoSurfaceFormat => write!(f, "Surface supports no texture formats"),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter | GpuError::NoSurfaceFormat => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Why an upstream completion could not be used. Logged, never shown to
/// the chat caller.
#[derive(Debug)]
pub enum UpstreamError {
    /// Connection, TLS, timeout or body decoding failure.
    Transport(reqwest::Error),
    /// Upstream answered with a non-success status.
    Status(u16),
    /// Reply parsed but had no `choices[0].message.content`.
    MissingContent,
    /// Any other backend failure (used by non-HTTP backends).
    Other(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(e) => write!(f, "upstream transport failure: {}", e),
            UpstreamError::Status(code) => write!(f, "upstream returned status {}", code),
            UpstreamError::MissingContent => write!(f, "upstream reply had no completion text"),
            UpstreamError::Other(msg) => write!(f, "upstream failure: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        // Drop the URL so logs only carry the failure kind
        UpstreamError::Transport(e.without_url())
    }
}

/// Errors surfaced by the chat endpoint.
#[derive(Debug)]
pub enum ChatError {
    /// Request used a method other than POST; no upstream call was made.
    MethodNotAllowed,
    /// Body was not `{ "message": string }` or the message was blank.
    BadRequest,
    /// The upstream call failed.
    Upstream(UpstreamError),
}

impl ChatError {
    /// Text returned to the caller. Fixed per kind so upstream detail never leaks.
    pub fn public_message(&self) -> &'static str {
        match self {
            ChatError::MethodNotAllowed => "Method not allowed",
            ChatError::BadRequest => "Message is required",
            ChatError::Upstream(_) => "Failed to get response from AI",
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::MethodNotAllowed => write!(f, "method not allowed"),
            ChatError::BadRequest => write!(f, "missing or blank message"),
            ChatError::Upstream(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UpstreamError> for ChatError {
    fn from(e: UpstreamError) -> Self {
        ChatError::Upstream(e)
    }
}
