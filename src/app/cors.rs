use std::net::IpAddr;

use actix_cors::Cors;
use actix_web::http::header;
use url::{
    Host,
    Url,
};

use crate::app::CorsSettings;

/// Decides which browser origins may call the API.
///
/// An origin passes when it is listed verbatim in the configuration, when it
/// points at `localhost` or a loopback address on any port, or when every
/// origin is allowed.
#[derive(Clone, Debug)]
pub struct OriginPolicy {
    allowed_origins: Vec<String>,
    allow_all_origins: bool,
}

impl OriginPolicy {
    pub fn new(settings: &CorsSettings) -> Self {
        Self {
            allowed_origins: settings
                .allowed_origins
                .iter()
                .map(|origin| origin.trim().trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            allow_all_origins: settings.allow_all_origins,
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        if self.allow_all_origins || self.allowed_origins.iter().any(|o| o == origin) {
            return true;
        }
        match Url::parse(origin) {
            Ok(url) => match url.host() {
                Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
                Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
                Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
                None => false,
            },
            Err(_) => false,
        }
    }

    /// The actix middleware enforcing this policy. Requests from a rejected
    /// origin never reach a handler.
    pub fn middleware(&self) -> Cors {
        let policy = self.clone();
        Cors::default()
            .allowed_origin_fn(move |origin, _request_head| {
                origin
                    .to_str()
                    .map(|origin| {
                        let allowed = policy.allows(origin);
                        if !allowed {
                            tracing::warn!(origin, "CORS blocked request");
                        }
                        allowed
                    })
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .supports_credentials()
            .block_on_origin_mismatch(true)
            .max_age(3600)
    }
}
