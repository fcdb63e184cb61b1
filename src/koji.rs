//! Koji build-system session handles
//!
//! Sessions are plain values owned by the caller. Creating one does not touch
//! the network; the hub is only contacted by whoever makes RPC calls with it.

use serde::Serialize;

/// Client session bound to a Koji hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KojiSession {
  hub_url: String,
}

impl KojiSession {
  pub fn new(hub_url: impl Into<String>) -> Self {
    Self {
      hub_url: hub_url.into(),
    }
  }

  pub fn hub_url(&self) -> &str {
    &self.hub_url
  }
}

/// What [`koji_init`] builds a session from
#[derive(Debug, Clone)]
pub enum SessionSource {
  /// Hub endpoint for a new session
  Url(String),
  /// Existing session to adopt unchanged
  Session(KojiSession),
}

impl From<&str> for SessionSource {
  fn from(url: &str) -> Self {
    SessionSource::Url(url.to_string())
  }
}

impl From<String> for SessionSource {
  fn from(url: String) -> Self {
    SessionSource::Url(url)
  }
}

impl From<KojiSession> for SessionSource {
  fn from(session: KojiSession) -> Self {
    SessionSource::Session(session)
  }
}

/// Construct a session for a hub URL, or adopt an existing one
///
/// The caller keeps the returned session and passes it to whatever needs it;
/// calling again with a different source simply yields a different session.
pub fn koji_init(source: impl Into<SessionSource>) -> KojiSession {
  match source.into() {
    SessionSource::Url(url) => {
      tracing::debug!(hub_url = %url, "creating koji session");
      KojiSession::new(url)
    }
    SessionSource::Session(session) => session,
  }
}
