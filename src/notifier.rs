pub use delivery::Notifier;
pub use errors::NotificationError;
pub use template::ConfirmationEmail;

mod delivery;
mod errors;
mod template;
