use super::dom::{self, WindowListener};
use super::theme_toggle::ThemeToggle;
use crate::layout;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

const SITE_OWNER: &str = "Muhammad";

const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state_eq(|| layout::navbar_is_scrolled(dom::scroll_y()));
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("scroll", move |_: Event| {
                let scroll_y = dom::scroll_y();
                scrolled.set(layout::navbar_is_scrolled(scroll_y));

                let sections = dom::section_bounds();
                if let Some(id) = layout::active_section(scroll_y, &sections) {
                    let matching = NAV_ITEMS
                        .iter()
                        .map(|(item_id, _)| *item_id)
                        .find(|item_id| *item_id == id);
                    active.set(matching);
                }
            });
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |(event, id): (MouseEvent, &'static str)| {
            menu_open.set(false);
            if dom::scroll_to_anchor(id) {
                event.prevent_default();
            }
        })
    };

    let links = NAV_ITEMS.iter().map(|&(id, label)| {
        let onclick = {
            let on_link = on_link.clone();
            Callback::from(move |event: MouseEvent| on_link.emit((event, id)))
        };
        let is_active = *active == Some(id);

        html! {
            <li class="nav-item">
                <a
                    href={format!("#{id}")}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    aria-current={is_active.then_some("page")}
                    onclick={onclick}
                >
                    {label}
                </a>
            </li>
        }
    });

    let on_logo = {
        let on_link = on_link.clone();
        Callback::from(move |event: MouseEvent| on_link.emit((event, "home")))
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={on_logo}>{SITE_OWNER}</a>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for links }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        id="navToggle"
                        class={classes!("nav-toggle", (*menu_open).then_some("active"))}
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-controls="navMenu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
