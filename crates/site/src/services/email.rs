//! Email notifications for contact form submissions.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. Delivery is
//! best effort: the caller spawns `notify_contact` and a failure never blocks
//! or fails the submission itself.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::models::ContactMessage;

/// HTML template for the contact notification email.
#[derive(Template)]
#[template(path = "email/contact_notification.html")]
struct ContactNotificationHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
}

/// Plain text template for the contact notification email.
#[derive(Template)]
#[template(path = "email/contact_notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Display label for a service-of-interest code from the contact form.
///
/// Unknown codes pass through unchanged.
#[must_use]
pub fn service_label(code: &str) -> &str {
    match code {
        "relaxing" => "Massagem Relaxante",
        "modeling" => "Massagem Modeladora",
        "lymphatic" => "Drenagem Linfática",
        "hotstone" => "Massagem com Pedras Quentes",
        "shiatsu" => "Shiatsu",
        "myofascial" => "Liberação Miofascial",
        other => other,
    }
}

/// Sends contact notification emails to the site operator.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    recipient: String,
}

impl ContactNotifier {
    /// Create a new notifier from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay parameters are invalid.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            recipient: config.recipient.clone(),
        })
    }

    /// Send a notification about a new contact message to the operator.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render, build, or send.
    pub async fn notify_contact(&self, contact: &ContactMessage) -> Result<(), EmailError> {
        let service = service_label(&contact.service);

        let html = ContactNotificationHtml {
            name: &contact.name,
            email: &contact.email,
            phone: &contact.phone,
            service,
            message: &contact.message,
        }
        .render()?;
        let text = ContactNotificationText {
            name: &contact.name,
            email: &contact.email,
            phone: &contact.phone,
            service,
            message: &contact.message,
        }
        .render()?;

        let subject = format!("Nova mensagem de contato de {}", contact.name);
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|_| EmailError::InvalidAddress(self.recipient.clone()))?)
            .subject(&subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %self.recipient, subject = %subject, "Contact notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_label_known_codes() {
        assert_eq!(service_label("relaxing"), "Massagem Relaxante");
        assert_eq!(service_label("lymphatic"), "Drenagem Linfática");
        assert_eq!(service_label("hotstone"), "Massagem com Pedras Quentes");
    }

    #[test]
    fn test_service_label_passes_unknown_through() {
        assert_eq!(service_label("aromatherapy"), "aromatherapy");
    }
}
