pub mod base;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::base::Base;
use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config::load_wheel_config());

    html! {
        <Base title={config.title.clone()} tagline={config.tagline.clone()}>
            <WheelPage config={(*config).clone()} />
        </Base>
    }
}
