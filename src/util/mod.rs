use crate::viewer::PAGING_BREAKPOINT_PX;

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Current `window.innerWidth`, or a desktop width when it can't be read.
pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(PAGING_BREAKPOINT_PX + 1.0)
}

/// Stop the page behind a modal from scrolling.
pub(crate) fn lock_body_scroll() {
    set_body_overflow("hidden");
}

pub(crate) fn unlock_body_scroll() {
    set_body_overflow("");
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}
