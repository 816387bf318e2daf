//! Browser file handles for the image import flow.
//!
//! In the browser the import state holds real `web_sys::File` values. SSR
//! and native test builds have no DOM, so `BrowserFile` falls back to the
//! plain `FileMeta` description there.

#[cfg(feature = "hydrate")]
use crate::state::file_import::FileInfo;

#[cfg(feature = "hydrate")]
pub type BrowserFile = web_sys::File;

#[cfg(not(feature = "hydrate"))]
pub type BrowserFile = crate::state::file_import::FileMeta;

#[cfg(feature = "hydrate")]
impl FileInfo for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size_bytes(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        web_sys::Blob::type_(self)
    }
}

/// Collect the files of an input or drop event, in order.
#[cfg(feature = "hydrate")]
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Decode `file` into a `data:` URL for the thumbnail.
///
/// Resolves `None` if the reader cannot be created or yields no string.
#[cfg(feature = "hydrate")]
pub async fn read_data_url(file: &web_sys::File) -> Option<String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().ok()?;
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let mut tx = Some(tx);
    let on_load_end = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.take() {
            let _ = tx.send(());
        }
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).ok()?;

    let loaded = rx.await.is_ok();
    reader.set_onloadend(None);
    drop(on_load_end);
    if !loaded {
        return None;
    }
    reader.result().ok()?.as_string()
}
