mod contact_form;
mod crash;
mod navbar;
mod sections;

use std::rc::Rc;

use log::Level;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::section::{SectionBounds, SectionId, SectionTracker};
use crate::subscription::Subscription;
use crate::telemetry::{self, log_event};
use crate::theme::{Theme, ThemePreference, ThemeStore};

use contact_form::Contact;
use navbar::{Navbar, ScrollToTop};
use sections::{About, Experience, Hero, Projects, Skills};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

struct BrowserThemeStore {
    key: &'static str,
}

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(self.key, value);
        }
    }
}

fn system_prefers_dark() -> Option<bool> {
    window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

fn load_theme_preference(key: &'static str) -> ThemePreference<BrowserThemeStore> {
    ThemePreference::load(BrowserThemeStore { key }, system_prefers_dark())
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Registers `handler` for a window event until the returned subscription is released.
fn listen_window(event: &'static str, handler: impl FnMut() + 'static) -> Subscription {
    let Some(win) = window() else {
        return Subscription::empty();
    };

    let callback = Closure::<dyn FnMut()>::new(handler);
    if win
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        return Subscription::empty();
    }

    Subscription::new(move || {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    })
}

pub(crate) fn scroll_to_section(section: SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub enum TrackerEvent {
    Intersections(Vec<(SectionId, bool)>),
    Layout {
        scroll_y: f64,
        viewport_height: f64,
        sections: Vec<SectionBounds>,
    },
}

impl Reducible for SectionTracker {
    type Action = TrackerEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TrackerEvent::Intersections(entries) => next.observe_intersections(entries),
            TrackerEvent::Layout {
                scroll_y,
                viewport_height,
                sections,
            } => next.observe_layout(scroll_y, viewport_height, &sections),
        };

        match changed {
            Some(section) => {
                log_event(
                    Level::Debug,
                    "active_section_changed",
                    json!({ "section": section }),
                );
                Rc::new(next)
            }
            None => self,
        }
    }
}

fn observe_sections(
    root_margin: &str,
    dispatcher: UseReducerDispatcher<SectionTracker>,
) -> Subscription {
    match observe_with_intersections(root_margin, dispatcher.clone()) {
        Ok(subscription) => subscription,
        Err(_) => {
            log_event(Level::Warn, "section_observer_fallback", json!({}));
            dispatch_layout(&dispatcher);
            let mut on_scroll = {
                let dispatcher = dispatcher.clone();
                listen_window("scroll", move || dispatch_layout(&dispatcher))
            };
            let mut on_resize = listen_window("resize", move || dispatch_layout(&dispatcher));
            Subscription::new(move || {
                on_scroll.release();
                on_resize.release();
            })
        }
    }
}

fn observe_with_intersections(
    root_margin: &str,
    dispatcher: UseReducerDispatcher<SectionTracker>,
) -> Result<Subscription, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    SectionId::from_id(&entry.target().id())
                        .map(|section| (section, entry.is_intersecting()))
                })
                .collect();
            dispatcher.dispatch(TrackerEvent::Intersections(entries));
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for section in SectionId::ALL {
        if let Some(element) = document.get_element_by_id(section.id()) {
            observer.observe(&element);
        }
    }

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

fn dispatch_layout(dispatcher: &UseReducerDispatcher<SectionTracker>) {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let sections = SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                section,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect();

    dispatcher.dispatch(TrackerEvent::Layout {
        scroll_y: current_scroll_y(),
        viewport_height,
        sections,
    });
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let preference = {
        let theme_key = config.theme_key;
        use_mut_ref(move || load_theme_preference(theme_key))
    };
    let theme = {
        let preference = preference.clone();
        use_state(move || {
            let current = preference.borrow().current();
            current
        })
    };
    let tracker = use_reducer(SectionTracker::new);

    {
        let dispatcher = tracker.dispatcher();
        let root_margin = config.focus_band_root_margin;
        use_effect_with((), move |_| {
            let mut subscription = observe_sections(root_margin, dispatcher);
            move || subscription.release()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = preference.borrow_mut().toggle();
            apply_theme(next);
            log_event(Level::Info, "theme_toggled", json!({ "theme": next }));
            theme.set(next);
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="backdrop" aria-hidden="true">
                <div class="orb orb-primary"></div>
                <div class="orb orb-accent"></div>
            </div>

            <Navbar
                active={tracker.active()}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                scroll_threshold={config.scroll_threshold_px}
            />

            <main id="content">
                <section id={SectionId::Home.id()}><Hero /></section>
                <section id={SectionId::About.id()}><About /></section>
                <section id={SectionId::Skills.id()}><Skills /></section>
                <section id={SectionId::Projects.id()}><Projects /></section>
                <section id={SectionId::Experience.id()}><Experience /></section>
                <section id={SectionId::Contact.id()}>
                    <Contact send_delay={config.send_delay} reset_delay={config.reset_delay} />
                </section>
            </main>

            if tracker.scroll_to_top_visible() {
                <ScrollToTop />
            }
        </>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    telemetry::init(config.log_level);
    crash::install();
    // Applied before mounting; App only re-applies on toggle.
    apply_theme(load_theme_preference(config.theme_key).current());

    log_event(
        Level::Info,
        "app_started",
        json!({
            "sendDelayMs": config.send_delay.as_millis() as u64,
            "resetDelayMs": config.reset_delay.as_millis() as u64,
            "scrollThresholdPx": config.scroll_threshold_px,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
