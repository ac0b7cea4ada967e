use custom_error::custom_error;

use crate::email_client::EmailClientError;

custom_error! {
///! A confirmation email that could not be delivered. Only ever logged.
pub NotificationError
    Delivery{recipient: String, source: EmailClientError} = "failed to send confirmation \
    email to {recipient}: {source}",
}
