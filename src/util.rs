// Console helpers shared by the components.

use wasm_bindgen::{JsCast, JsValue};

/// Debug log, only emitted when `enabled` (wired to `StickerConfig::debug_log`).
pub fn clog(enabled: bool, msg: &str) {
    if enabled {
        gloo::console::debug!(msg);
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Short `1.5`-style formatting for log lines; drops the trailing `.0` on whole numbers.
pub fn fmt_px(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(fmt_px(200.0), "200");
        assert_eq!(fmt_px(-350.0), "-350");
    }

    #[test]
    fn fractions_use_two_places() {
        assert_eq!(fmt_px(99.9999), "100.00");
        assert_eq!(fmt_px(12.5), "12.50");
        assert_eq!(fmt_px(7.891), "7.89");
    }
}
