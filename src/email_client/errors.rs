use custom_error::custom_error;
use reqwest::Error;
use url::ParseError;

custom_error! {
///! Custom error for Email client error.
pub EmailClientError
    InvalidUri {source:ParseError} = "{source}",
    InvalidRequest {source:Error} = "{source}",
}
