use std::panic::{self, PanicHookInfo};

use log::Level;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Element};

use crate::boundary::{
    crash_detail, CrashLatch, DETAILS_SUMMARY, FALLBACK_BODY, FALLBACK_ICON, FALLBACK_TITLE,
    RELOAD_LABEL,
};
use crate::telemetry::log_event;

static LATCH: CrashLatch = CrashLatch::new();

/// Replaces the page with a recovery screen on the first panic.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if !LATCH.trip() {
            return;
        }

        let detail = crash_detail(
            panic_message(info),
            info.location()
                .map(|location| (location.file(), location.line(), location.column())),
        );
        log_event(Level::Error, "app_crashed", json!({ "detail": detail }));
        render_fallback(&detail);
    }));
}

fn panic_message<'a>(info: &'a PanicHookInfo<'_>) -> &'a str {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn render_fallback(detail: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(host) = document
        .get_element_by_id("app")
        .or_else(|| document.body().map(Element::from))
    else {
        return;
    };

    if let Ok(panel) = build_fallback(&document, detail) {
        host.set_inner_html("");
        let _ = host.append_child(&panel);
    }
}

fn build_fallback(document: &Document, detail: &str) -> Result<Element, wasm_bindgen::JsValue> {
    let panel = document.create_element("div")?;
    panel.set_class_name("crash-screen");
    panel.set_attribute("role", "alert")?;

    let card = document.create_element("div")?;
    card.set_class_name("glass-card crash-card");

    let icon = text_element(document, "div", FALLBACK_ICON)?;
    icon.set_class_name("crash-icon");
    icon.set_attribute("aria-hidden", "true")?;
    card.append_child(&icon)?;
    card.append_child(&text_element(document, "h1", FALLBACK_TITLE)?)?;

    let body = text_element(document, "p", FALLBACK_BODY)?;
    body.set_class_name("muted");
    card.append_child(&body)?;

    let reload = text_element(document, "button", RELOAD_LABEL)?;
    reload.set_class_name("btn-primary");
    reload.set_attribute("type", "button")?;
    let on_reload = Closure::<dyn FnMut()>::new(|| {
        if let Some(win) = window() {
            let _ = win.location().reload();
        }
    });
    reload.add_event_listener_with_callback("click", on_reload.as_ref().unchecked_ref())?;
    // The page is reloaded or left as is; the listener lives as long as the document.
    on_reload.forget();
    card.append_child(&reload)?;

    let details = document.create_element("details")?;
    details.append_child(&text_element(document, "summary", DETAILS_SUMMARY)?)?;
    details.append_child(&text_element(document, "pre", detail)?)?;
    card.append_child(&details)?;

    panel.append_child(&card)?;
    Ok(panel)
}

fn text_element(document: &Document, tag: &str, text: &str) -> Result<Element, wasm_bindgen::JsValue> {
    let element = document.create_element(tag)?;
    element.set_text_content(Some(text));
    Ok(element)
}
