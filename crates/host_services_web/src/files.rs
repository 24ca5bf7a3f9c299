//! Browser text-file adapters: anchor-download save and input-picker open.

use host_services::{HostError, HostFuture, TextDocument, TextFileService};

#[derive(Debug, Clone, Copy, Default)]
/// Text-file adapter backed by Blob downloads and a transient file input.
pub struct WebTextFiles;

#[cfg(target_arch = "wasm32")]
fn dom_document() -> Result<web_sys::Document, HostError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(HostError::Unavailable("document"))
}

#[cfg(target_arch = "wasm32")]
fn save_through_anchor(name: &str, contents: &str) -> Result<(), HostError> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = dom_document()?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(parts.as_ref(), &options)
        .map_err(crate::interop_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(crate::interop_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(crate::interop_error)?
        .dyn_into()
        .map_err(|_| HostError::Unavailable("anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(crate::interop_error)?;
    Ok(())
}

/// Reads the first selected file of `input` and resolves `sender` with it.
///
/// The closures are `forget`-leaked: they must outlive this call and die with
/// the transient input element, which is never attached to the DOM.
#[cfg(target_arch = "wasm32")]
fn read_selected_file(
    input: &web_sys::HtmlInputElement,
    sender: std::rc::Rc<
        std::cell::RefCell<
            Option<futures::channel::oneshot::Sender<Result<Option<TextDocument>, HostError>>>,
        >,
    >,
) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let deliver = move |result: Result<Option<TextDocument>, HostError>| {
        if let Some(sender) = sender.borrow_mut().take() {
            let _ = sender.send(result);
        }
    };

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        deliver(Ok(None));
        return;
    };

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            deliver(Err(crate::interop_error(err)));
            return;
        }
    };

    let name = file.name();
    let onload = {
        let reader = reader.clone();
        let deliver = deliver.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_event: web_sys::ProgressEvent| {
            let contents = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default();
            deliver(Ok(Some(TextDocument {
                name: name.clone(),
                contents,
            })));
        })
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(err) = reader.read_as_text(&file) {
        deliver(Err(crate::interop_error(err)));
    }
}

impl TextFileService for WebTextFiles {
    fn save_text<'a>(
        &'a self,
        name: &'a str,
        contents: &'a str,
    ) -> HostFuture<'a, Result<(), HostError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(async move { save_through_anchor(name, contents) })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, contents);
            Box::pin(async { Err(HostError::Unavailable("text files")) })
        }
    }

    fn open_text(&self) -> HostFuture<'_, Result<Option<TextDocument>, HostError>> {
        #[cfg(target_arch = "wasm32")]
        {
            use std::{cell::RefCell, rc::Rc};

            use wasm_bindgen::{closure::Closure, JsCast};

            Box::pin(async move {
                let document = dom_document()?;
                let input: web_sys::HtmlInputElement = document
                    .create_element("input")
                    .map_err(crate::interop_error)?
                    .dyn_into()
                    .map_err(|_| HostError::Unavailable("file input"))?;
                input.set_type("file");
                input.set_accept(".txt,text/plain");

                let (sender, receiver) = futures::channel::oneshot::channel();
                let sender = Rc::new(RefCell::new(Some(sender)));
                let onchange = {
                    let input = input.clone();
                    let sender = sender.clone();
                    Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                        read_selected_file(&input, sender.clone());
                    })
                };
                input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
                onchange.forget();
                input.click();

                // A cancelled picker never fires `change`; the pending future
                // dies with its owner, matching the transient-input flow.
                receiver
                    .await
                    .map_err(|_| HostError::Interop("file picker dropped".to_string()))?
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async { Err(HostError::Unavailable("text files")) })
        }
    }
}
