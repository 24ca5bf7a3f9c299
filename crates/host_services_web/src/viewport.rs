//! Browser viewport probe.

use host_services::{ViewportProbe, ViewportSize};

#[derive(Debug, Clone, Copy, Default)]
/// Viewport probe backed by `window.innerWidth`/`window.innerHeight`.
pub struct DomViewport;

impl ViewportProbe for DomViewport {
    fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            let fallback = ViewportSize::default();
            let Some(window) = web_sys::window() else {
                return fallback;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(fallback.width as f64);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(fallback.height as f64);
            ViewportSize {
                width: width as i32,
                height: height as i32,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ViewportSize::default()
        }
    }
}
