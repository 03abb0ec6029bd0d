use shared::geometry::segment_color;
use shared::EntryList;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct EntryPanelProps {
    pub entries: EntryList,
    pub disabled: bool,
    /// Returns whether the name made it onto the wheel.
    pub on_add: Callback<String, bool>,
    /// Returns how many names were imported.
    pub on_import: Callback<String, usize>,
    pub on_remove: Callback<String>,
}

#[function_component(EntryPanel)]
pub fn entry_panel(props: &EntryPanelProps) -> Html {
    let name_input = use_state(String::new);
    let bulk_input = use_state(String::new);

    let on_name_input = {
        let name_input = name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name_input.set(input.value());
        })
    };

    let on_bulk_input = {
        let bulk_input = bulk_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            bulk_input.set(input.value());
        })
    };

    let on_submit = {
        let name_input = name_input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A rejected duplicate stays in the field so it can be corrected.
            if on_add.emit((*name_input).clone()) {
                name_input.set(String::new());
            }
        })
    };

    let on_import = {
        let bulk_input = bulk_input.clone();
        let on_import = props.on_import.clone();
        Callback::from(move |_: MouseEvent| {
            if on_import.emit((*bulk_input).clone()) > 0 {
                bulk_input.set(String::new());
            }
        })
    };

    let entries = props.entries.as_slice();

    html! {
        <section class={styles::CARD}>
            <form class={styles::FORM} onsubmit={on_submit}>
                <label for="nameInput" class={styles::TEXT_LABEL}>{"Add a single participant"}</label>
                <div class="flex gap-2">
                    <input
                        id="nameInput"
                        class={styles::INPUT}
                        value={(*name_input).clone()}
                        placeholder="e.g. Taylor"
                        oninput={on_name_input}
                        disabled={props.disabled}
                    />
                    <button
                        type="submit"
                        class={styles::BUTTON_PRIMARY}
                        disabled={name_input.trim().is_empty() || props.disabled}
                    >
                        {"Add"}
                    </button>
                </div>
            </form>

            <div class={styles::FORM}>
                <label for="bulkInput" class={styles::TEXT_LABEL}>{"Import multiple participants"}</label>
                <textarea
                    id="bulkInput"
                    rows="4"
                    class={styles::INPUT}
                    value={(*bulk_input).clone()}
                    placeholder={"Taylor\nMorgan\nKai"}
                    oninput={on_bulk_input}
                    disabled={props.disabled}
                />
                <button
                    type="button"
                    class={styles::BUTTON_SECONDARY}
                    onclick={on_import}
                    disabled={bulk_input.trim().is_empty() || props.disabled}
                >
                    {"Import list"}
                </button>
            </div>

            <div class="mt-6">
                <h2 class={styles::TEXT_H2}>{format!("Participants ({})", entries.len())}</h2>
                if entries.is_empty() {
                    <p class={classes!("mt-2", styles::TEXT_SMALL)}>{"No names yet. Add a few to get started."}</p>
                } else {
                    <ul class="mt-2">
                        { for entries.iter().enumerate().map(|(index, entry)| {
                            let on_remove = {
                                let on_remove = props.on_remove.clone();
                                let entry = entry.clone();
                                Callback::from(move |_: MouseEvent| on_remove.emit(entry.clone()))
                            };
                            html! {
                                <li key={entry.clone()} class={styles::ENTRY_ROW}>
                                    <span class="flex items-center min-w-0">
                                        <span
                                            class={styles::COLOR_DOT}
                                            style={format!("background-color: {};", segment_color(index))}
                                        />
                                        <span class={classes!("truncate", styles::TEXT_BODY)}>{entry.clone()}</span>
                                    </span>
                                    <button
                                        type="button"
                                        class={styles::BUTTON_REMOVE}
                                        onclick={on_remove}
                                        disabled={props.disabled}
                                    >
                                        {"Remove"}
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        </section>
    }
}
