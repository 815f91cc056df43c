mod back_to_top;
mod contact_form;
mod decor;
mod dom;
mod effects;
mod monitor;
mod navigation;
mod newsletter_form;
mod theme_toggle;
mod toasts;

use crate::config::{self, SiteConfig};
use crate::telemetry::{self, log_event};
use back_to_top::BackToTop;
use contact_form::{ContactForm, ContactFormProps};
use log::Level;
use navigation::Navbar;
use newsletter_form::NewsletterForm;
use yew::prelude::{AttrValue, BaseComponent};

const NAVBAR_ROOT: &str = "navbar-root";
const BACK_TO_TOP_ROOT: &str = "back-to-top-root";
const CONTACT_ROOT: &str = "contact-root";
const NEWSLETTER_ROOT: &str = "newsletter-root";

fn mount<C>(root_id: &str, props: C::Properties) -> bool
where
    C: BaseComponent,
{
    let Some(root) = dom::element_by_id(root_id) else {
        log_event(
            Level::Debug,
            "mount_skipped",
            serde_json::json!({ "root": root_id }),
        );
        return false;
    };

    yew::Renderer::<C>::with_root_and_props(root, props).render();
    true
}

fn contact_endpoint(config: &SiteConfig) -> String {
    let resolved = dom::page_url()
        .and_then(|page| config::resolve_endpoint(&page, &config.contact_endpoint));

    match resolved {
        Some(url) => url.to_string(),
        None => {
            log_event(
                Level::Warn,
                "contact_endpoint_unresolved",
                serde_json::json!({ "endpoint": config.contact_endpoint.as_str() }),
            );
            config.contact_endpoint.clone()
        }
    }
}

pub fn run() {
    let config = dom::read_site_config();
    telemetry::init(config.log_level);
    dom::inject_toast_keyframes();
    theme_toggle::apply_stored_theme();

    effects::attach_smooth_anchors();
    effects::attach_scroll_reveal();
    effects::attach_skill_bars();
    effects::attach_lazy_images();
    if config.parallax_effect {
        effects::attach_parallax();
    }
    if config.cursor_effect {
        decor::attach_cursor_follower();
    }
    if config.typing_effect {
        decor::start_typing(config.typing_words.clone(), config.typing_delay_ms);
    }

    monitor::attach_page_load_timing();
    monitor::attach_connectivity_logging();
    monitor::attach_error_logging();

    let endpoint = contact_endpoint(&config);
    let mounted = serde_json::json!({
        "navbar": mount::<Navbar>(NAVBAR_ROOT, ()),
        "back_to_top": mount::<BackToTop>(BACK_TO_TOP_ROOT, ()),
        "contact": mount::<ContactForm>(
            CONTACT_ROOT,
            ContactFormProps { endpoint: AttrValue::from(endpoint) },
        ),
        "newsletter": mount::<NewsletterForm>(NEWSLETTER_ROOT, ()),
    });

    monitor::print_welcome_banner();
    log_event(
        Level::Info,
        "site_ready",
        serde_json::json!({
            "mounted": mounted,
            "typing_effect": config.typing_effect,
            "cursor_effect": config.cursor_effect,
            "parallax_effect": config.parallax_effect,
        }),
    );
}
