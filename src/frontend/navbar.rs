use std::rc::Rc;

use log::Level;
use serde_json::json;
use yew::prelude::*;

use super::{current_scroll_y, listen_window, scroll_to_section, scroll_to_top};
use crate::nav::{nav_entries, NavState};
use crate::section::SectionId;
use crate::telemetry::log_event;
use crate::theme::Theme;

pub enum NavAction {
    Scrolled { scroll_y: f64, threshold_px: f64 },
    ToggleMenu,
    Navigated,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled {
                scroll_y,
                threshold_px,
            } => self.on_scroll(scroll_y, threshold_px),
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::Navigated => self.navigate(),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: SectionId,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub scroll_threshold: f64,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(props.scroll_threshold, move |threshold| {
            let threshold_px = *threshold;
            let report = move || {
                dispatcher.dispatch(NavAction::Scrolled {
                    scroll_y: current_scroll_y(),
                    threshold_px,
                })
            };
            report();
            let mut subscription = listen_window("scroll", report);
            move || subscription.release()
        });
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |target: SectionId| {
            dispatcher.dispatch(NavAction::Navigated);
            log_event(Level::Debug, "nav_requested", json!({ "section": target }));
            scroll_to_section(target);
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_brand = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Home))
    };

    html! {
        <nav class={classes!("navbar", state.chrome_opaque().then_some("is-opaque"))}>
            <div class="navbar-inner">
                <button class="brand gradient-text" type="button" onclick={on_brand}>
                    {"Portfolio"}
                </button>

                <ul
                    id="nav-links"
                    class={classes!("nav-links", state.menu_open().then_some("is-open"))}
                >
                    { for nav_entries(props.active).into_iter().map(|entry| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            let target = entry.section;
                            Callback::from(move |_: MouseEvent| on_navigate.emit(target))
                        };
                        html! {
                            <li key={entry.section.id()}>
                                <button
                                    type="button"
                                    class={classes!("nav-link", entry.highlighted.then_some("is-active"))}
                                    aria-current={entry.highlighted.then_some("page")}
                                    onclick={onclick}
                                >
                                    {entry.label}
                                </button>
                            </li>
                        }
                    }) }
                </ul>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-controls="nav-links"
                        aria-expanded={state.menu_open().to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{"☰"}</span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    html! {
        <button
            class="scroll-top"
            type="button"
            aria-label="Scroll to top"
            onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
        >
            <span aria-hidden="true">{"↑"}</span>
        </button>
    }
}
