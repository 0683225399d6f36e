use futures::future::BoxFuture;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;
use std::time::Duration;

use crate::config::app_config::Config;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("mail send timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outbound mail transport used by the contact relay.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>>;
}

pub struct SmtpMailer {
    from: Mailbox,
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.email_user)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_pass.clone(),
            ))
            .build();

        Ok(Self {
            from,
            transport: Arc::new(transport),
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>> {
        let from = self.from.clone();
        let transport = self.transport.clone();

        Box::pin(async move {
            let message = Message::builder()
                .from(from)
                .to(parse_mailbox(&email.to)?)
                .subject(email.subject)
                .header(ContentType::TEXT_HTML)
                .body(email.html)?;

            transport.send(message).await?;
            tracing::debug!(to = %email.to, "Email handed to SMTP relay");
            Ok(())
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse::<Mailbox>().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
