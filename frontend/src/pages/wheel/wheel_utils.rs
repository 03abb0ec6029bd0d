use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<AttrValue>,
    #[prop_or_default]
    pub color: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(winner) = props.winner.clone() else {
        return html! {};
    };
    let border = props
        .color
        .as_ref()
        .map(|color| format!("border-color: {};", color))
        .unwrap_or_default();

    html! {
        <div role="status" class="flex flex-col items-center justify-center">
            <div
                style={border}
                class="flex items-center gap-3 px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 text-white font-bold text-xl shadow-lg border-4 animate-pulse"
            >
                <span class="font-medium">{"Winner:"}</span>
                <strong>{winner}</strong>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_entries: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin!" };
    let is_disabled = props.is_spinning || !props.has_entries;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", "max-w-xs", button_class)}>
            <button
                type="button"
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerModalProps {
    pub winner: AttrValue,
    pub on_close: Callback<()>,
}

/// Announces the winner over the page. Closes on the button, a backdrop
/// click or Escape.
#[function_component(WinnerModal)]
pub fn winner_modal(props: &WinnerModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|e| e.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div
                role="dialog"
                aria-modal="true"
                class={styles::MODAL_CARD}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <p class="text-sm uppercase tracking-widest text-yellow-300 mb-2">{"We have a winner"}</p>
                <h3 class="text-4xl font-bold text-white mb-6 break-words">{props.winner.clone()}</h3>
                <button type="button" class={styles::BUTTON_PRIMARY} onclick={close}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
