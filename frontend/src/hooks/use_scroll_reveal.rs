use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{
    IntersectionListener, IntersectionSample, IntersectionSource, Observation, RevealConfig,
    ScrollReveal,
};

/// [`IntersectionSource`] backed by the browser's `IntersectionObserver`.
pub struct DomIntersectionSource {
    element: Element,
    config: RevealConfig,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl DomIntersectionSource {
    pub fn new(element: Element, config: RevealConfig) -> Self {
        Self {
            element,
            config,
            observer: None,
            callback: None,
        }
    }
}

impl IntersectionSource for DomIntersectionSource {
    fn observe(&mut self, mut listener: IntersectionListener) {
        self.disconnect();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if listener(sample) == Observation::Stop {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.config.threshold));
        init.set_root_margin(&self.config.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&self.element);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(e) => log::error!("Failed to create IntersectionObserver: {:?}", e),
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

/// Returns true once the element behind `node_ref` has scrolled into view,
/// and stays true for the life of the component.
#[hook]
pub fn use_scroll_reveal(node_ref: NodeRef, config: RevealConfig) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                let mut source = node_ref
                    .cast::<Element>()
                    .map(|element| DomIntersectionSource::new(element, config.clone()));
                if let Some(source) = source.as_mut() {
                    let reveal = ScrollReveal::new(&config);
                    reveal.attach(source, move || visible.set(true));
                }
                move || {
                    if let Some(mut source) = source {
                        source.disconnect();
                    }
                }
            },
            node_ref,
        );
    }
    *visible
}
