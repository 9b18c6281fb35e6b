use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::pages::PAGE_HEADING_CSS;
use crate::state::contact::{ContactAction, ContactFormState, ContactTransport, Field, SubmissionStatus};
use crate::utils::api::HttpTransport;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let state = use_reducer(ContactFormState::default);
    // Set synchronously on click so a double click cannot send twice before
    // the disabled button re-renders.
    let in_flight = use_mut_ref(|| false);

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = if field == Field::Message {
                e.target_unchecked_into::<HtmlTextAreaElement>().value()
            } else {
                e.target_unchecked_into::<HtmlInputElement>().value()
            };
            state.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }
            let mut preview = (*state).clone();
            let payload = preview.begin_submit();
            state.dispatch(ContactAction::BeginSubmit);
            if let Some(payload) = payload {
                *in_flight.borrow_mut() = true;
                let state = state.clone();
                let in_flight = in_flight.clone();
                spawn_local(async move {
                    let outcome = HttpTransport.send_contact(&payload).await;
                    *in_flight.borrow_mut() = false;
                    state.dispatch(ContactAction::FinishSubmit(outcome));
                });
            }
        })
    };

    let contact_css = r#"
        .contact-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 72rem;
            margin: 0 auto;
        }
        .contact-grid {
            display: grid;
            grid-template-columns: 1fr 2fr;
            gap: 2rem;
        }
        .contact-card {
            padding: 1.5rem;
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        .contact-card h2 {
            margin: 0 0 0.25rem;
        }
        .contact-card .card-subtitle {
            color: rgba(255, 255, 255, 0.6);
            margin: 0 0 1.5rem;
        }
        .info-row {
            display: flex;
            gap: 0.75rem;
            margin-bottom: 1rem;
        }
        .info-icon {
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 8px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #c084fc;
            background: rgba(168, 85, 247, 0.2);
        }
        .info-row small {
            display: block;
            color: rgba(255, 255, 255, 0.6);
        }
        .form-row {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.5rem;
        }
        .form-field {
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            margin-bottom: 1.5rem;
        }
        .form-field input, .form-field textarea {
            padding: 0.75rem;
            border-radius: 8px;
            color: #fff;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.2);
            font: inherit;
        }
        .form-field textarea {
            resize: none;
        }
        .status-message {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1rem;
            border-radius: 8px;
            margin-bottom: 1.5rem;
        }
        .status-message.success {
            color: #86efac;
            background: rgba(34, 197, 94, 0.2);
            border: 1px solid rgba(34, 197, 94, 0.5);
        }
        .status-message.error {
            color: #fca5a5;
            background: rgba(239, 68, 68, 0.2);
            border: 1px solid rgba(239, 68, 68, 0.5);
        }
        .send-button {
            width: 100%;
            padding: 0.9rem;
            border: none;
            border-radius: 10px;
            font-size: 1rem;
            color: #fff;
            background: linear-gradient(90deg, #9333ea, #db2777);
            cursor: pointer;
        }
        .send-button:disabled {
            opacity: 0.6;
            cursor: not-allowed;
        }
        @media (max-width: 1024px) {
            .contact-grid, .form-row {
                grid-template-columns: 1fr;
            }
        }
    "#;

    let status = match &state.status {
        SubmissionStatus::None => html! {},
        SubmissionStatus::Success(msg) => html! {
            <div class="status-message success">
                <i class="fa-solid fa-circle-check"></i>
                <span>{msg}</span>
            </div>
        },
        SubmissionStatus::Error(msg) => html! {
            <div class="status-message error">
                <i class="fa-solid fa-circle-exclamation"></i>
                <span>{msg}</span>
            </div>
        },
    };

    html! {
        <div class="contact-page">
            <style>{contact_css}{PAGE_HEADING_CSS}</style>
            <div class="page-heading">
                <h1>{"Get In "}<span>{"Touch"}</span></h1>
                <p>{"Have questions? We'd love to hear from you"}</p>
            </div>
            <div class="contact-grid">
                <div class="contact-card">
                    <h2>{"Contact Information"}</h2>
                    <p class="card-subtitle">{"Reach out through any channel"}</p>
                    <div class="info-row">
                        <div class="info-icon"><i class="fa-solid fa-envelope"></i></div>
                        <div><small>{"Email"}</small>{"support@nova-audio.com"}</div>
                    </div>
                    <div class="info-row">
                        <div class="info-icon"><i class="fa-solid fa-phone"></i></div>
                        <div><small>{"Phone"}</small>{"0666666666"}</div>
                    </div>
                    <div class="info-row">
                        <div class="info-icon"><i class="fa-solid fa-location-dot"></i></div>
                        <div><small>{"Office"}</small>{"Paris, France"}</div>
                    </div>
                </div>
                <form class="contact-card" {onsubmit}>
                    <h2>{"Send us a Message"}</h2>
                    <p class="card-subtitle">{"We'll get back to you within 24 hours"}</p>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"Full Name"}</label>
                            <input
                                id="name"
                                name="name"
                                placeholder="John Doe"
                                value={state.form.name.clone()}
                                oninput={on_input(Field::Name)}
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email Address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="john@example.com"
                                value={state.form.email.clone()}
                                oninput={on_input(Field::Email)}
                            />
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="subject">{"Subject"}</label>
                        <input
                            id="subject"
                            name="subject"
                            placeholder="Product Inquiry"
                            value={state.form.subject.clone()}
                            oninput={on_input(Field::Subject)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="6"
                            placeholder="Tell us how we can help..."
                            value={state.form.message.clone()}
                            oninput={on_input(Field::Message)}
                        />
                    </div>
                    {status}
                    <button type="submit" class="send-button" disabled={state.submitting}>
                        if state.submitting {
                            {"Sending..."}
                        } else {
                            {"Send Message "}<i class="fa-solid fa-paper-plane"></i>
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
