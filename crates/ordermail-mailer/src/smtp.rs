//! SMTP sending via async lettre (STARTTLS relay).

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use ordermail_core::config::SmtpConfig;
use ordermail_core::error::{OrderMailError, Result};
use ordermail_core::traits::EmailSender;
use ordermail_core::types::NotificationRequest;

/// Sends notification emails through a configured SMTP relay.
pub struct SmtpSender {
    config: SmtpConfig,
}

impl SmtpSender {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the outgoing message. Split from the transport so address and
    /// body handling can be tested without a relay.
    fn build_message(&self, request: &NotificationRequest) -> Result<Message> {
        let from_name = self.config.display_name.as_deref().unwrap_or("OrderMail");
        let from_mailbox: Mailbox = format!("{from_name} <{}>", self.config.email)
            .parse()
            .map_err(|e| OrderMailError::Mail(format!("Invalid from: {e}")))?;

        let to_mailbox: Mailbox = request
            .recipient
            .parse()
            .map_err(|e| OrderMailError::Mail(format!("Invalid to: {e}")))?;

        Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(request.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(request.body.clone())
            .map_err(|e| OrderMailError::Mail(format!("Build email: {e}")))
    }
}

#[async_trait]
impl EmailSender for SmtpSender {
    async fn send(&self, request: &NotificationRequest) -> Result<()> {
        let email = self.build_message(request)?;

        let creds = Credentials::new(self.config.email.clone(), self.config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .map_err(|e| OrderMailError::Mail(format!("SMTP relay: {e}")))?
            .port(self.config.port)
            .credentials(creds)
            .build();

        mailer
            .send(email)
            .await
            .map_err(|e| OrderMailError::Mail(format!("SMTP send: {e}")))?;

        tracing::info!("📤 Email sent to {}: {}", request.recipient, request.subject);
        Ok(())
    }
}
