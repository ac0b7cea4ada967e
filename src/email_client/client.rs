use std::time::Duration;

use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::domain::StudentEmail;
use crate::email_client::request::{
    Contact,
    EmailRequest,
};
use crate::email_client::EmailClientError;

const SEND_ENDPOINT: &str = "v3.1/send";

/// Client for a Mailjet-style HTTP mail API, authenticated with basic auth.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct EmailClient {
    #[derivative(Debug = "ignore")]
    http_client: Client,
    base_url: Url,
    sender: StudentEmail,
    sender_name: String,
    username: String,
    #[derivative(Debug = "ignore")]
    password: String,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        sender: StudentEmail,
        sender_name: String,
        username: String,
        password: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .context(format!(
                    "Error creating mail client with:\nbase_url: {}\nsender: {}\nusername: \
                     {}\ntimeout_secs: {}",
                    base_url,
                    sender.as_ref(),
                    username,
                    timeout_secs
                ))?,
            base_url,
            sender,
            sender_name,
            username,
            password,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        recipient_name: &str,
        subject: &str,
        html_part: &str,
        text_part: &str,
    ) -> Result<(), EmailClientError> {
        let request = EmailRequest::new(
            Contact {
                email: self.sender.as_ref(),
                name: &self.sender_name,
            },
            Contact {
                email: recipient,
                name: recipient_name,
            },
            subject,
            html_part,
            text_part,
        );
        self.http_client
            .post(self.base_url.join(SEND_ENDPOINT)?)
            .basic_auth(&self.username, Some(&self.password))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
