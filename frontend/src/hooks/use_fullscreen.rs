use gloo_events::EventListener;
use web_sys::{window, Element};
use yew::prelude::*;

#[derive(Clone)]
pub struct FullscreenState {
    pub active: bool,
    pub toggle: Callback<MouseEvent>,
}

/// Tracks whether `target` is the fullscreen element and toggles it.
#[hook]
pub fn use_fullscreen(target: NodeRef) -> FullscreenState {
    let active = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                let doc = document.clone();
                EventListener::new(&document, "fullscreenchange", move |_| {
                    active.set(doc.fullscreen_element().is_some());
                })
            });
            move || drop(listener)
        });
    }

    let toggle = Callback::from(move |_: MouseEvent| {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        } else if let Some(element) = target.cast::<Element>() {
            if let Err(e) = element.request_fullscreen() {
                log::warn!("Fullscreen request refused: {:?}", e);
            }
        }
    });

    FullscreenState {
        active: *active,
        toggle,
    }
}
