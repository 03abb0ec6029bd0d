mod curved_wheel;
mod entry_panel;
mod wheel_canvas;
mod wheel_utils;

use gloo_timers::callback::Timeout;
use shared::geometry::segment_color;
use shared::{SessionError, WheelConfig, WheelSession, WheelVariant};
use yew::prelude::*;

use crate::hooks::use_fullscreen;
use crate::styles;

use curved_wheel::CurvedWheel;
use entry_panel::EntryPanel;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton, WinnerModal};

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub config: WheelConfig,
}

fn log_rejection(action: &str, error: &SessionError) {
    log::debug!("{} ignored: {}", action, error);
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let session = {
        let config = props.config.clone();
        use_state(move || WheelSession::from_config(&config))
    };
    let show_modal = use_state(|| false);
    let panel_ref = use_node_ref();
    let fullscreen = use_fullscreen(panel_ref.clone());

    // Reveal the winner once the spin animation has had time to finish.
    // Dropping the timeout cancels it if the page goes away first.
    {
        let session = session.clone();
        use_effect_with(session.pending(), move |ticket| {
            let timeout = ticket.map(|ticket| {
                Timeout::new(ticket.duration_ms(), move || {
                    let mut next = (*session).clone();
                    if let Some(winner) = next.reveal(ticket.id) {
                        log::info!("Winner: {}", winner);
                    }
                    session.set(next);
                })
            });
            move || drop(timeout)
        });
    }

    // Follow the inline readout with the modal announcement.
    {
        let show_modal = show_modal.clone();
        let enabled = props.config.show_winner_modal;
        let delay = props.config.announce_delay_ms;
        use_effect_with(session.winner_index(), move |winner| {
            let timeout = match winner {
                Some(_) if enabled => Some(Timeout::new(delay, move || show_modal.set(true))),
                _ => {
                    show_modal.set(false);
                    None
                }
            };
            move || drop(timeout)
        });
    }

    let on_add = {
        let session = session.clone();
        Callback::from(move |raw: String| {
            let mut next = (*session).clone();
            match next.add_single(&raw) {
                Ok(()) => {
                    session.set(next);
                    true
                }
                Err(e) => {
                    log_rejection("Add", &e);
                    false
                }
            }
        })
    };

    let on_import = {
        let session = session.clone();
        Callback::from(move |raw: String| {
            let mut next = (*session).clone();
            match next.add_bulk(&raw) {
                Ok(added) => {
                    log::info!("Imported {} participants", added);
                    session.set(next);
                    added
                }
                Err(e) => {
                    log_rejection("Import", &e);
                    0
                }
            }
        })
    };

    let on_remove = {
        let session = session.clone();
        Callback::from(move |value: String| {
            let mut next = (*session).clone();
            match next.remove(&value) {
                Ok(true) => session.set(next),
                Ok(false) => {}
                Err(e) => log_rejection("Remove", &e),
            }
        })
    };

    let on_spin = {
        let session = session.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            match next.spin(js_sys::Date::now(), &mut rand::thread_rng()) {
                Ok(_) => {
                    show_modal.set(false);
                    session.set(next);
                }
                Err(e) => log_rejection("Spin", &e),
            }
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let entries: Vec<String> = session.entries().as_slice().to_vec();
    let spin_settings = *session.controller().settings();
    let winner = session.winner().map(|name| AttrValue::from(name.to_string()));
    let winner_color = session.winner_index().map(segment_color);

    let wheel = match props.config.variant {
        WheelVariant::Classic => html! {
            <WheelCanvas
                entries={entries.clone()}
                rotation={session.rotation()}
                is_spinning={session.is_spinning()}
                duration_ms={spin_settings.spin_duration_ms}
                pointer_angle_deg={spin_settings.pointer_angle_deg}
                winner_index={session.winner_index()}
            />
        },
        WheelVariant::Curved => html! {
            <CurvedWheel
                entries={entries.clone()}
                rotation={session.rotation()}
                is_spinning={session.is_spinning()}
                duration_ms={spin_settings.spin_duration_ms}
                pointer_angle_deg={spin_settings.pointer_angle_deg}
                winner_index={session.winner_index()}
            />
        },
    };

    let panel_class = if fullscreen.active {
        styles::WHEEL_PANEL_FULLSCREEN
    } else {
        styles::WHEEL_PANEL
    };

    html! {
        <div class={styles::PAGE_GRID}>
            <EntryPanel
                entries={session.entries().clone()}
                disabled={session.is_spinning()}
                {on_add}
                {on_import}
                {on_remove}
            />

            <section ref={panel_ref} class={panel_class}>
                if props.config.allow_fullscreen {
                    <div class="self-end">
                        <button type="button" class={styles::BUTTON_SECONDARY} onclick={fullscreen.toggle.clone()}>
                            {if fullscreen.active { "Exit fullscreen" } else { "Fullscreen" }}
                        </button>
                    </div>
                }
                {wheel}
                <SpinButton
                    is_spinning={session.is_spinning()}
                    has_entries={!entries.is_empty()}
                    onclick={on_spin}
                />
                <ResultDisplay winner={winner.clone()} color={winner_color} />
            </section>

            if *show_modal {
                if let Some(winner) = winner {
                    <WinnerModal {winner} on_close={on_close_modal} />
                }
            }
        </div>
    }
}
