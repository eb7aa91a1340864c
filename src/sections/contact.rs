use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::animation::tween::Pose;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, TextArea, TextInput};
use crate::config::{self, CONTACT, SITE, SOCIALS};
use crate::contact::form::{ContactState, Field, SubmitBlocked};
use crate::contact::relay::{self, RelayConfig, FAILURE_MESSAGE};

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors in the form";

#[function_component(Contact)]
pub fn contact() -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let form_ref = use_node_ref();
    let info_ref = use_node_ref();
    let state = use_mut_ref(ContactState::default);
    let rerender = use_force_update();
    let toaster = use_toaster();

    use_reveal(title_ref.clone(), vec![title_ref.clone()], RevealOptions::rising(50.0).band(90));
    use_reveal(
        description_ref.clone(),
        vec![description_ref.clone()],
        RevealOptions::rising(30.0).delay(200.0).band(90),
    );
    use_reveal(
        form_ref.clone(),
        vec![form_ref.clone()],
        RevealOptions::default().hidden(Pose::REST.opacity(0.0).x(-50.0)),
    );
    use_reveal(
        form_ref.clone(),
        vec![info_ref.clone()],
        RevealOptions::default().hidden(Pose::REST.opacity(0.0).x(50.0)).delay(200.0),
    );

    let on_edit = |field: Field| {
        let state = state.clone();
        let rerender = rerender.clone();
        Callback::from(move |value: String| {
            state.borrow_mut().edit(field, value);
            rerender.force_update();
        })
    };

    let onsubmit = {
        let state = state.clone();
        let rerender = rerender.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let attempt = state.borrow_mut().begin_submit();
            rerender.force_update();
            let snapshot = match attempt {
                Ok(snapshot) => snapshot,
                Err(SubmitBlocked::InFlight) => return,
                Err(SubmitBlocked::Invalid) => {
                    toaster.error(FIX_ERRORS_MESSAGE);
                    return;
                }
            };

            let state = state.clone();
            let rerender = rerender.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                if config::is_dev() {
                    gloo_console::log!("Sending contact message from", snapshot.email.clone());
                }
                match relay::deliver(&RelayConfig::from_build_env(), &snapshot).await {
                    Ok(delivery) => {
                        state.borrow_mut().finish(true);
                        toaster.success(delivery.toast_message());
                    }
                    Err(err) => {
                        log::error!("contact message not delivered: {}", err);
                        state.borrow_mut().finish(false);
                        toaster.error(FAILURE_MESSAGE);
                    }
                }
                rerender.force_update();
            });
        })
    };

    let current = state.borrow().clone();
    let error_for = |field: Field| current.errors.get(field).map(|e| AttrValue::from(e.to_string()));
    let value_for = |field: Field| AttrValue::from(current.form.field(field).to_string());

    html! {
        <section class="contact">
            <style>
                {r#"
                .contact {
                    color: #fff;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                    box-sizing: border-box;
                }
                .contact-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact-info {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .info-label {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.25rem;
                }
                .info-value {
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.1rem;
                }
                a.info-value:hover {
                    color: #ffb15c;
                }
                .info-socials {
                    display: flex;
                    gap: 1rem;
                }
                .info-socials a {
                    color: #d1d5db;
                    text-decoration: none;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    transition: background 0.2s;
                }
                .info-socials a:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                "#}
            </style>
            <h1 ref={title_ref} class="section-title">
                {"GET IN "}<span class="accent-chip">{"TOUCH"}</span>
            </h1>
            <p ref={description_ref} class="section-lead">
                {"Have a project in mind or just want to say hi? My inbox is always open."}
            </p>
            <div class="contact-grid">
                <form ref={form_ref} class="contact-form" novalidate=true {onsubmit}>
                    <TextInput
                        name={Field::Name.as_str()}
                        placeholder="Your Name"
                        value={value_for(Field::Name)}
                        on_change={on_edit(Field::Name)}
                        error={error_for(Field::Name)}
                    />
                    <TextInput
                        name={Field::Email.as_str()}
                        input_type="email"
                        placeholder="Your Email"
                        value={value_for(Field::Email)}
                        on_change={on_edit(Field::Email)}
                        error={error_for(Field::Email)}
                    />
                    <TextArea
                        name={Field::Message.as_str()}
                        placeholder="Your Message"
                        value={value_for(Field::Message)}
                        on_change={on_edit(Field::Message)}
                        error={error_for(Field::Message)}
                    />
                    <Button button_type="submit" disabled={current.submitting}>
                        {
                            if current.submitting {
                                html! { <><span class="spinner"></span>{"Sending..."}</> }
                            } else {
                                html! { "Send Message" }
                            }
                        }
                    </Button>
                </form>
                <aside ref={info_ref} class="contact-info">
                    <div>
                        <div class="info-label">{"Email"}</div>
                        <a class="info-value" href={config::mailto_href(CONTACT.email, &format!("Hello from {}", SITE.url))}>
                            {CONTACT.email}
                        </a>
                    </div>
                    <div>
                        <div class="info-label">{"Phone"}</div>
                        <a class="info-value" href={config::phone_href(CONTACT.phone)}>{CONTACT.phone}</a>
                    </div>
                    <div>
                        <div class="info-label">{"Location"}</div>
                        <span class="info-value">{CONTACT.location}</span>
                    </div>
                    <div class="info-socials">
                        <a href={SOCIALS.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={SOCIALS.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href={SOCIALS.twitter} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                    </div>
                </aside>
            </div>
        </section>
    }
}
