use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub tagline: AttrValue,
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <header class="mb-8">
                    <h1 class={styles::TEXT_H1}>{props.title.clone()}</h1>
                    if !props.tagline.is_empty() {
                        <p class={classes!("mt-2", styles::TEXT_BODY)}>{props.tagline.clone()}</p>
                    }
                </header>
                <main>
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
