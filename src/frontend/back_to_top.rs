use super::dom::{self, WindowListener};
use crate::layout;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| layout::back_to_top_visible(dom::scroll_y()));

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("scroll", move |_: Event| {
                visible.set(layout::back_to_top_visible(dom::scroll_y()));
            });
            move || drop(listener)
        });
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", (*visible).then_some("show"))}
            type="button"
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}
