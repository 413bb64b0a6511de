use chrono::{DateTime, Utc};

/// Date part of `created_at` in the browser's locale.
#[cfg(target_arch = "wasm32")]
pub fn format_post_date(created_at: &DateTime<Utc>) -> String {
    use wasm_bindgen::JsValue;

    let millis = created_at.timestamp_millis() as f64;
    let date = js_sys::Date::new(&JsValue::from_f64(millis));
    date.to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Date part of `created_at`, en-US numeric form (`M/D/YYYY`, UTC).
#[cfg(not(target_arch = "wasm32"))]
pub fn format_post_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%-m/%-d/%Y").to_string()
}
