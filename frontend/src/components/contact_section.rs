use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "sharedSecret")]
    pub shared_secret: String,
}

impl ContactForm {
    /// Fields the relay would reject outright; checked before any request.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if !self.email.contains('@') {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }
}

#[derive(Deserialize, Debug)]
struct RelayResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub fn failure_message(status: u16) -> &'static str {
    match status {
        400 => "Please check the form fields and try again.",
        401 => "This form is not authorized to send messages.",
        429 => "Too many messages sent. Please try again in a few minutes.",
        _ => "Failed to send message. Please try again later.",
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let (name, email, phone, message, status) = (
            name.clone(),
            email.clone(),
            phone.clone(),
            message.clone(),
            status.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }

            let form = ContactForm {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: Some((*phone).clone()).filter(|p| !p.trim().is_empty()),
                message: (*message).clone(),
                shared_secret: config::contact_shared_secret().to_string(),
            };

            let missing = form.missing_fields();
            if !missing.is_empty() {
                status.set(SubmitStatus::Failed(format!(
                    "Please fill in: {}",
                    missing.join(", ")
                )));
                return;
            }

            status.set(SubmitStatus::Sending);
            let (status, name, email, phone, message) = (
                status.clone(),
                name.clone(),
                email.clone(),
                phone.clone(),
                message.clone(),
            );
            spawn_local(async move {
                let url = format!("{}/api/sendMessage", config::get_backend_url());
                let request = match Request::post(&url).json(&form) {
                    Ok(req) => req,
                    Err(e) => {
                        error!("Failed to encode contact form: {}", e);
                        status.set(SubmitStatus::Failed(failure_message(0).to_string()));
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) if response.ok() => {
                        info!("Contact form delivered");
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        message.set(String::new());
                        status.set(SubmitStatus::Sent);
                    }
                    Ok(response) => {
                        let code = response.status();
                        let detail = response.json::<RelayResponse>().await.ok();
                        error!(
                            "Contact relay rejected submission ({}): {:?}",
                            code,
                            detail.and_then(|d| d.error.or(d.message))
                        );
                        status.set(SubmitStatus::Failed(failure_message(code).to_string()));
                    }
                    Err(e) => {
                        error!("Network error sending contact form: {}", e);
                        status.set(SubmitStatus::Failed(failure_message(0).to_string()));
                    }
                }
            });
        })
    };

    let feedback = match &*status {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Sending => html! { <p class="form-status">{"Sending..."}</p> },
        SubmitStatus::Sent => html! { <p class="form-status success">{"Message sent successfully!"}</p> },
        SubmitStatus::Failed(msg) => html! { <p class="form-status error">{ msg.clone() }</p> },
    };

    html! {
        <section id="contact" class="contact-section">
            <h2>{"Get in touch"}</h2>
            <form class="contact-form" {onsubmit}>
                <input type="text" placeholder="Name" value={(*name).clone()} oninput={bind_input(name.clone())} />
                <input type="email" placeholder="Email" value={(*email).clone()} oninput={bind_input(email.clone())} />
                <input type="tel" placeholder="Phone (optional)" value={(*phone).clone()} oninput={bind_input(phone.clone())} />
                <textarea placeholder="Message" value={(*message).clone()} oninput={on_message} />
                <button type="submit" disabled={*status == SubmitStatus::Sending}>{"Send"}</button>
            </form>
            { feedback }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            message: "Hi".into(),
            shared_secret: "s".into(),
        }
    }

    #[test]
    fn complete_form_has_no_missing_fields() {
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn blank_fields_are_reported() {
        let form = ContactForm {
            name: "  ".into(),
            email: "nope".into(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["name", "email", "message"]);
    }

    #[test]
    fn serializes_with_relay_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["sharedSecret"], "s");
        assert!(json.get("phone").is_none());
        assert!(json.get("shared_secret").is_none());
    }

    #[test]
    fn status_codes_map_to_user_messages() {
        assert!(failure_message(429).contains("Too many"));
        assert!(failure_message(401).contains("not authorized"));
        assert!(failure_message(500).contains("Failed to send"));
    }
}
