//! Browser clipboard adapter backed by the async Clipboard API.

use host_services::{ClipboardService, HostError, HostFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard adapter for `navigator.clipboard`.
pub struct WebClipboard;

#[cfg(target_arch = "wasm32")]
fn navigator_clipboard() -> Result<web_sys::Clipboard, HostError> {
    web_sys::window()
        .map(|window| window.navigator().clipboard())
        .ok_or(HostError::Unavailable("clipboard"))
}

impl ClipboardService for WebClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(async move {
                let clipboard = navigator_clipboard()?;
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                    .await
                    .map(|_| ())
                    .map_err(crate::interop_error)
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            Box::pin(async { Err(HostError::Unavailable("clipboard")) })
        }
    }

    fn read_text(&self) -> HostFuture<'_, Result<String, HostError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(async move {
                let clipboard = navigator_clipboard()?;
                let value = wasm_bindgen_futures::JsFuture::from(clipboard.read_text())
                    .await
                    .map_err(crate::interop_error)?;
                Ok(value.as_string().unwrap_or_default())
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async { Err(HostError::Unavailable("clipboard")) })
        }
    }
}
