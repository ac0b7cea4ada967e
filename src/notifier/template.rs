use crate::domain::{
    Registration,
    WorkshopMode,
};

const STYLE: &str = r#"
      body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        line-height: 1.6;
        color: #333;
        max-width: 600px;
        margin: 0 auto;
        padding: 20px;
      }
      .header {
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        padding: 30px;
        text-align: center;
        border-radius: 10px 10px 0 0;
      }
      .content {
        background: #f9f9f9;
        padding: 30px;
        border-radius: 0 0 10px 10px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      }
      .workshop-details {
        background: white;
        padding: 20px;
        border-left: 4px solid #667eea;
        margin: 20px 0;
        border-radius: 5px;
      }
      .detail-item { margin: 10px 0; padding: 8px 0; border-bottom: 1px solid #eee; }
      .detail-item:last-child { border-bottom: none; }
      .detail-label { font-weight: bold; color: #555; display: inline-block; min-width: 120px; }
      .mode-badge {
        display: inline-block;
        padding: 5px 15px;
        border-radius: 20px;
        font-size: 14px;
        font-weight: bold;
        text-transform: uppercase;
      }
      .mode-online { background-color: #e8f5e8; color: #2d5a2d; }
      .mode-offline { background-color: #fff3cd; color: #856404; }
      .footer {
        text-align: center;
        margin-top: 30px;
        padding-top: 20px;
        border-top: 1px solid #ddd;
        color: #666;
        font-size: 14px;
      }
      .welcome-text { font-size: 18px; margin-bottom: 20px; color: #444; }
"#;

const ONLINE_NEXT_STEPS: &str = "You will receive a separate email with the meeting link and \
                                 access instructions 24 hours before the workshop.";
const OFFLINE_NEXT_STEPS: &str = "Please arrive at the venue 15 minutes before the scheduled \
                                  start time. The exact location details will be sent to you \
                                  via email.";

/// A rendered confirmation message, ready to hand to the mail transport.
#[derive(Debug)]
pub struct ConfirmationEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn next_steps(mode: WorkshopMode) -> &'static str {
    match mode {
        WorkshopMode::Online => ONLINE_NEXT_STEPS,
        WorkshopMode::Offline => OFFLINE_NEXT_STEPS,
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ConfirmationEmail {
    pub fn render(registration: &Registration) -> Self {
        let student_name = escape_html(&registration.student_name);
        let workshop_name = escape_html(&registration.workshop_name);
        let mode = registration.mode.as_str();
        let next_steps = next_steps(registration.mode);

        let html = format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Workshop Registration Confirmation</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="header">
      <h1>Workshop Registration Confirmed!</h1>
      <p>Thank you for registering with us</p>
    </div>
    <div class="content">
      <p class="welcome-text">Dear <strong>{student_name}</strong>,</p>
      <p>
        We're excited to confirm your registration for the workshop. Your spot has been
        successfully reserved, and we look forward to seeing you there!
      </p>
      <div class="workshop-details">
        <h3>Registration Details</h3>
        <div class="detail-item">
          <span class="detail-label">Workshop:</span>
          <span>{workshop_name}</span>
        </div>
        <div class="detail-item">
          <span class="detail-label">Mode:</span>
          <span class="mode-badge mode-{mode_class}">{mode}</span>
        </div>
        <div class="detail-item">
          <span class="detail-label">Student Name:</span>
          <span>{student_name}</span>
        </div>
      </div>
      <p><strong>Next Steps:</strong><br>{next_steps}</p>
      <p>If you have any questions or need to make changes, please contact our support team.</p>
      <p>Best regards,<br>The Workshop Registration Team</p>
    </div>
    <div class="footer">
      <p>This email was sent as part of the workshop registration process.</p>
    </div>
  </body>
</html>
"#,
            style = STYLE,
            student_name = student_name,
            workshop_name = workshop_name,
            mode_class = mode.to_lowercase(),
            mode = mode,
            next_steps = next_steps,
        );

        let text = format!(
            "Dear {},\n\nYour registration for the workshop \"{}\" ({}) is confirmed.\n\nNext \
             steps: {}\n\nBest regards,\nThe Workshop Registration Team\n",
            registration.student_name, registration.workshop_name, mode, next_steps
        );

        ConfirmationEmail {
            subject: format!(
                "Workshop Registration Confirmation - {}",
                registration.workshop_name
            ),
            html,
            text,
        }
    }
}
