//! v1 endpoint paths.
//!
//! The paths are documented, not routed: nothing here binds them to a router
//! or a client. `/api/v1/sesrvices` is spelled exactly as the service exposes it.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Common prefix of every v1 path.
pub const API_PREFIX: &str = "/api/v1";

const SERVICES_CORRECTED_PATH: &str = "/api/v1/services";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    OpenApi,
    Systems,
    Services,
    Files,
    Health,
    Applications,
}

impl Endpoint {
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::OpenApi,
        Self::Systems,
        Self::Services,
        Self::Files,
        Self::Health,
        Self::Applications,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/api/v1/login",
            Self::OpenApi => "/api/v1/openapi",
            Self::Systems => "/api/v1/systems",
            Self::Services => "/api/v1/sesrvices",
            Self::Files => "/api/v1/files",
            Self::Health => "/api/v1/health",
            Self::Applications => "/api/v1/applications",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    /// Exact match on the path literal. `/api/v1/services` is also accepted
    /// and maps to [`Endpoint::Services`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(endpoint) = Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.path() == s)
        {
            return Ok(endpoint);
        }
        if s == SERVICES_CORRECTED_PATH {
            tracing::debug!(
                path = s,
                canonical = Self::Services.path(),
                "accepted corrected spelling of services path"
            );
            return Ok(Self::Services);
        }
        tracing::trace!(path = s, "no endpoint for path");
        Err(ApiError::UnknownEndpoint(s.to_string()))
    }
}
