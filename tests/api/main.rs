mod register;
mod registrations;
