use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing_futures::Instrument;

use crate::domain::Registration;
use crate::email_client::EmailClient;
use crate::notifier::{
    ConfirmationEmail,
    NotificationError,
};

/// Sends registration confirmations. Delivery failures stay inside.
#[derive(Debug)]
pub struct Notifier {
    email_client: EmailClient,
}

impl Notifier {
    pub fn new(email_client: EmailClient) -> Self {
        Self { email_client }
    }

    /// Launch the confirmation on a detached task and return immediately.
    ///
    /// The handle is only useful to tests; dropping it does not cancel the
    /// delivery. Whatever happens is reported through the log.
    pub fn dispatch(self: Arc<Self>, registration: Registration) -> JoinHandle<()> {
        let span = tracing::info_span!(
            "sending registration confirmation",
            registration_id = registration.id,
            student_email = %registration.student_email,
        );
        tokio::spawn(
            async move {
                self.notify_registration(&registration).await;
            }
            .instrument(span),
        )
    }

    /// Render and send the confirmation, logging instead of failing.
    pub async fn notify_registration(&self, registration: &Registration) {
        match self.try_notify_registration(registration).await {
            Ok(()) => tracing::info!("confirmation email sent"),
            Err(e) => tracing::error!(error = %e, "confirmation email not sent"),
        }
    }

    pub async fn try_notify_registration(
        &self,
        registration: &Registration,
    ) -> Result<(), NotificationError> {
        let email = ConfirmationEmail::render(registration);
        self.email_client
            .send_email(
                &registration.student_email,
                &registration.student_name,
                &email.subject,
                &email.html,
                &email.text,
            )
            .await
            .map_err(|source| NotificationError::Delivery {
                recipient: registration.student_email.clone(),
                source,
            })
    }
}
