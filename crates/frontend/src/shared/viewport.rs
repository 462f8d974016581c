//! Scroll-into-view detection via `IntersectionObserver`

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the element that must be on screen
const VISIBLE_THRESHOLD: f64 = 0.1;
/// Fire a little before the element reaches the bottom edge
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Run `on_visible` once, the first time `target` scrolls into view
///
/// # Errors
/// Returns the JS error if the observer could not be created; the caller decides
/// what to show instead.
pub fn on_first_intersection(
    target: &Element,
    on_visible: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let on_visible = RefCell::new(Some(on_visible));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_visible.borrow_mut().take() {
                f();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    // the observer keeps calling back until it disconnects itself
    callback.forget();
    Ok(())
}
