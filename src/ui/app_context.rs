use std::sync::Arc;

use crate::config::Config;
use crate::creations::CreationsClient;
use crate::session::IdentitySession;

/// Application-wide service handles, shared through the component tree.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub session: Arc<IdentitySession>,
    pub creations: Arc<CreationsClient>,
}

impl AppContext {
    pub fn new() -> Self {
        let config = Config::load();
        let session = Arc::new(
            IdentitySession::new(&config).expect("failed to initialize identity session"),
        );
        let creations = Arc::new(CreationsClient::new(config.api_base_url.clone()));
        Self {
            config,
            session,
            creations,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
