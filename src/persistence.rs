pub use errors::PersistenceError;
pub use pool::{
    connection_pool,
    probe_connection,
};
pub use registrations::{
    find_registration_by_email,
    insert_registration,
    list_registrations,
};

mod errors;
mod pool;
mod registrations;
