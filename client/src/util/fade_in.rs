//! Reveal `.fade-in` sections as they scroll into view.

#[cfg(feature = "hydrate")]
const FADE_IN_ROOT_MARGIN: &str = "0px 0px -60px 0px";
#[cfg(feature = "hydrate")]
const FADE_IN_THRESHOLD: f64 = 0.05;

/// Observe every `.fade-in` element and add `visible` once it intersects.
///
/// The observer lives for the rest of the page.
pub fn observe_fade_ins() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = doc.query_selector_all(".fade-in") else {
            return;
        };
        if nodes.length() == 0 {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("visible");
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(FADE_IN_ROOT_MARGIN);
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(FADE_IN_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            return;
        };

        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
        callback.forget();
    }
}
