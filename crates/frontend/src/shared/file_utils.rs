use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Largest payment receipt accepted by the backend
pub const MAX_PROOF_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

/// First file picked in an `<input type="file">`
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// File contents as a `data:<mime>;base64,...` URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let r = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = r.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let onerror = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("{e:?}"))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "No se pudo leer el archivo".to_string())?;
    value
        .as_string()
        .ok_or_else(|| "No se pudo leer el archivo".to_string())
}
