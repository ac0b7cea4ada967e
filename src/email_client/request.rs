use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailRequest<'a> {
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message<'a> {
    pub from: Contact<'a>,
    pub to: Vec<Contact<'a>>,
    pub subject: &'a str,
    #[serde(rename = "TextPart")]
    pub text_part: &'a str,
    #[serde(rename = "HTMLPart")]
    pub html_part: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

impl<'a> EmailRequest<'a> {
    pub fn new(
        sender: Contact<'a>,
        recipient: Contact<'a>,
        subject: &'a str,
        html_part: &'a str,
        text_part: &'a str,
    ) -> Self {
        Self {
            messages: vec![Message {
                from: sender,
                to: vec![recipient],
                subject,
                text_part,
                html_part,
            }],
        }
    }
}
