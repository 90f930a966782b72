use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::Level;
use serde_json::json;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::sections::social_links;
use crate::contact::{ContactForm, Field, Scheduler, Step, SubmissionState};
use crate::content::{CONTACT_CHANNELS, CONTACT_SOCIALS, FOOTER};
use crate::telemetry::log_event;

/// Browser timers that hand due steps back to the component.
pub struct BrowserScheduler {
    notify: Callback<Step>,
}

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay: Duration, step: Step) -> Timeout {
        let notify = self.notify.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || notify.emit(step))
    }

    fn cancel(&mut self, handle: Timeout) {
        // Clearing an already-fired timeout is a no-op in the browser.
        drop(handle.cancel());
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub send_delay: Duration,
    pub reset_delay: Duration,
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Timer(Step),
}

pub struct Contact {
    form: ContactForm<BrowserScheduler>,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = BrowserScheduler {
            notify: ctx.link().callback(ContactMsg::Timer),
        };
        let props = ctx.props();

        Self {
            form: ContactForm::new(scheduler, props.send_delay, props.reset_delay),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.submit() {
                Ok(()) => {
                    log_state_change(self.form.state());
                    true
                }
                Err(error) => {
                    log_event(
                        Level::Warn,
                        "contact_submit_rejected",
                        json!({ "reason": error.to_string() }),
                    );
                    false
                }
            },
            ContactMsg::Timer(step) => match self.form.fire(step) {
                Some(state) => {
                    log_state_change(state);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.form.state();
        let sending = state == SubmissionState::Sending;
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <div class="section-container contact">
                <header class="section-heading">
                    <h2>{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
                    <p class="muted">{"Have a project in mind? Let's build something amazing together"}</p>
                </header>

                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="glass-card">
                            <h3>{"Contact Information"}</h3>
                            <p class="muted">
                                {"Feel free to reach out through any of these channels. I'm always open to new opportunities and collaborations."}
                            </p>
                            <ul class="channel-list">
                                { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                    <li>
                                        <a class="channel" href={channel.href}>
                                            <span class="channel-icon" aria-hidden="true">{channel.icon}</span>
                                            <span>
                                                <span class="channel-label muted">{channel.label}</span>
                                                <span class="channel-value">{channel.value}</span>
                                            </span>
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="glass-card">
                            <h3>{"Follow Me"}</h3>
                            {social_links(&CONTACT_SOCIALS)}
                        </div>
                    </div>

                    <form class="glass-card contact-form" onsubmit={onsubmit}>
                        { for Field::ALL.into_iter().map(|field| self.field_view(ctx, field)) }
                        <button
                            type="submit"
                            class={classes!("btn-primary", sending.then_some("is-busy"))}
                            disabled={sending}
                            aria-live="polite"
                        >
                            {state.button_label()}
                        </button>
                    </form>
                </div>

                <footer class="site-footer muted">{FOOTER}</footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.form.teardown();
    }
}

impl Contact {
    fn field_view(&self, ctx: &Context<Self>, field: Field) -> Html {
        let value = self.form.fields().get(field).to_string();
        let control = match field {
            Field::Message => {
                let oninput = ctx.link().callback(move |event: InputEvent| {
                    let input: HtmlTextAreaElement = event.target_unchecked_into();
                    ContactMsg::Edit(field, input.value())
                });
                html! {
                    <textarea
                        id={field.name()}
                        name={field.name()}
                        rows="5"
                        required=true
                        placeholder={field.placeholder()}
                        value={value}
                        oninput={oninput}
                    />
                }
            }
            _ => {
                let oninput = ctx.link().callback(move |event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    ContactMsg::Edit(field, input.value())
                });
                let input_type = if field == Field::Email { "email" } else { "text" };
                html! {
                    <input
                        type={input_type}
                        id={field.name()}
                        name={field.name()}
                        required=true
                        placeholder={field.placeholder()}
                        value={value}
                        oninput={oninput}
                    />
                }
            }
        };

        html! {
            <div class="form-field">
                <label for={field.name()}>{field.label()}</label>
                {control}
            </div>
        }
    }
}

fn log_state_change(state: SubmissionState) {
    log_event(
        Level::Info,
        "contact_state_changed",
        json!({ "state": state }),
    );
}
