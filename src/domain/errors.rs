use custom_error::custom_error;

custom_error! {
///! Rejected registration input, in the order the checks are applied.
pub MalformedInput
    MissingField{field: &'static str} = "missing field: {field}",
    InvalidEmail{email: String} = "invalid email: {email}",
    InvalidMode{mode: String} = "invalid mode: {mode}",
}
