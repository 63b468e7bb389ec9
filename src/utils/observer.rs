use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{LandingError, Result};
use crate::state::reveal::{RevealController, RevealState, RevealTransition};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching one element, together with the JS
/// closure it calls. Dropping it disconnects the observer.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityWatch {
    /// `on_entry` receives `(is_intersecting, intersection_ratio)` for each
    /// report and returns `true` once it no longer needs reports.
    pub fn start<F>(element: &Element, threshold: f64, mut on_entry: F) -> Result<Self>
    where
        F: FnMut(bool, f64) -> bool + 'static,
    {
        let callback = EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if on_entry(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.disconnect();
                        break;
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(LandingError::observer)?;
        observer.observe(element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_reveal(node: &NodeRef, mut controller: RevealController, state: UseStateHandle<RevealState>) -> Result<VisibilityWatch> {
    let element = node.cast::<Element>().ok_or(LandingError::Detached)?;
    let threshold = controller.threshold();
    VisibilityWatch::start(&element, threshold, move |is_intersecting, ratio| {
        if controller.observe(is_intersecting, ratio) == RevealTransition::Fired {
            log::debug!("Revealed element at {:.0}% visible", ratio * 100.0);
            state.set(controller.state());
        }
        !controller.is_observing()
    })
}

/// State to show when no observer could be attached. Content is never left
/// invisible.
fn reveal_without_observer(initial: RevealController) -> RevealState {
    let mut fallback = initial;
    fallback.force_visible();
    fallback.state()
}

/// Reveal state for the element behind `node`. Starts from `initial` and
/// flips to visible once, the first time the element crosses the
/// controller's threshold.
#[hook]
pub fn use_reveal(node: NodeRef, initial: RevealController) -> RevealState {
    let state = use_state(|| initial.state());
    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = if initial.is_observing() && *state == RevealState::Hidden {
                    match watch_reveal(node, initial, state.clone()) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            log::warn!("Reveal observer unavailable, showing immediately: {}", e);
                            state.set(reveal_without_observer(initial));
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(watch)
            },
            node,
        );
    }
    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;

    #[test]
    fn missing_observer_reveals_hidden_sections() {
        for section in [SectionId::Features, SectionId::Testimonials, SectionId::Pricing, SectionId::Footer] {
            let initial = RevealController::for_section(section);
            assert_eq!(initial.state(), RevealState::Hidden);
            assert_eq!(reveal_without_observer(initial), RevealState::Visible);
        }
    }

    #[test]
    fn missing_observer_keeps_hero_visible() {
        assert_eq!(reveal_without_observer(RevealController::visible()), RevealState::Visible);
    }
}
