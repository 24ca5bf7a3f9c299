//! Browser external URL adapter.

use host_services::{ExternalUrlService, HostError, HostFuture};

#[derive(Debug, Clone, Copy, Default)]
/// External URL adapter backed by `window.open`.
pub struct WebExternalUrls;

impl ExternalUrlService for WebExternalUrls {
    fn open_url<'a>(&'a self, url: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(async move {
                let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
                window
                    .open_with_url_and_target(url, "_blank")
                    .map(|_| ())
                    .map_err(crate::interop_error)
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Box::pin(async { Err(HostError::Unavailable("external urls")) })
        }
    }
}
