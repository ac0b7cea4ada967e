pub use errors::ServiceError;
pub use query::{
    find_by_email,
    list_all,
};
pub use registration::submit;

mod errors;
mod query;
mod registration;
