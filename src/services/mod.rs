pub mod api;
pub mod diagnostics;
pub mod fixtures;

use crate::config::Config;
use api::{ApiClient, ApiConfig, FetchJson};
use diagnostics::{ConsoleSink, DiagnosticSink};
use fixtures::FixtureClient;
use std::rc::Rc;

/// Collaborators the stores are built from.
///
/// Created once by the composition root and handed to every store, so the
/// stores never reach for globals.
#[derive(Clone)]
pub struct Services {
    pub client: Rc<dyn FetchJson>,
    pub sink: Rc<dyn DiagnosticSink>,
}

impl Services {
    pub fn new(client: Rc<dyn FetchJson>, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self { client, sink }
    }

    /// Picks the fixture source or the HTTP client according to `Config`.
    pub fn from_config() -> Self {
        let sink: Rc<dyn DiagnosticSink> = Rc::new(ConsoleSink);

        if Config::USE_FIXTURES {
            return Self::new(Rc::new(FixtureClient::new()), sink);
        }

        let config = ApiConfig::builder().browser_origin().build();
        match ApiClient::with_config(config) {
            Ok(client) => Self::new(Rc::new(client), sink),
            Err(e) => {
                sink.error("Falling back to fixture data:", &e);
                Self::new(Rc::new(FixtureClient::new()), sink)
            }
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
