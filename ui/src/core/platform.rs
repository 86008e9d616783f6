//! Platform detection and environment helpers.

use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Web => "platform-web",
            Self::Native => "platform-native",
        }
    }
}

/// Origin used when no API base URL is configured.
///
/// In the browser this is the page origin, so `/api/...` hits the server that
/// served the bundle. Native builds talk to a local backend.
#[cfg(target_arch = "wasm32")]
pub fn default_api_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| NATIVE_API_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_api_origin() -> String {
    NATIVE_API_ORIGIN.to_string()
}

const NATIVE_API_ORIGIN: &str = "http://127.0.0.1:5000";

/// Today's calendar date for the viewer.
///
/// Uses the local UTC offset when it can be determined and UTC otherwise
/// (`time` refuses to read the offset in some multi-threaded native contexts).
pub fn today_local() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
