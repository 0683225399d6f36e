use chrono::{DateTime, Local};

use crate::handlers::contact_dtos::ContactRequest;
use crate::utils::mailer::OutgoingEmail;

pub const ACKNOWLEDGMENT_SUBJECT: &str = "Thanks for contacting me, Hope you are Fine!";

/// Message to the site owner carrying everything the visitor submitted.
pub fn operator_notification(
    recipient: &str,
    request: &ContactRequest,
    sent_at: DateTime<Local>,
) -> OutgoingEmail {
    let phone = request
        .phone
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "Not provided".to_string());

    let html = format!(
        r#"
        <h2>New Contact Form Message</h2>
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Phone:</strong> {phone}</p>
        <p><strong>Message:</strong></p>
        <p>{message}</p>
        <hr>
        <p><small>Sent on {sent_at}</small></p>
        "#,
        name = escape_html(&request.name),
        email = escape_html(&request.email),
        phone = phone,
        message = escape_html(&request.message).replace('\n', "<br>"),
        sent_at = sent_at.format("%Y-%m-%d %H:%M:%S %Z"),
    );

    OutgoingEmail {
        to: recipient.to_string(),
        subject: format!("New Contact: {}", request.name.replace(['\r', '\n'], " ")),
        html,
    }
}

/// Thank-you note back to the visitor's own address.
pub fn acknowledgment(request: &ContactRequest, owner_name: &str) -> OutgoingEmail {
    let html = format!(
        r#"
        <h2>Thank You {name}!</h2>
        <p>I received your message and I will get back to you soon.</p>
        <p>Best regards,<br>{owner}</p>
        "#,
        name = escape_html(&request.name),
        owner = escape_html(owner_name),
    );

    OutgoingEmail {
        to: request.email.clone(),
        subject: ACKNOWLEDGMENT_SUBJECT.to_string(),
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
