pub use errors::MalformedInput;
pub use new_registration::{
    NewRegistration,
    RegistrationForm,
};
pub use registration::Registration;
pub use registration_text::{
    StudentName,
    WorkshopName,
};
pub use student_email::{
    normalize_email,
    StudentEmail,
};
pub use workshop_mode::WorkshopMode;

mod errors;
mod new_registration;
mod registration;
mod registration_text;
mod student_email;
mod workshop_mode;
