//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::PartSettingsApi;
use crate::domain::{EventPublisher, HolderRepository, Service, TextLookup};
use anyhow::{anyhow, bail, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Part settings module
pub struct PartSettingsModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for PartSettingsModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl PartSettingsModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the domain service from its configuration and collaborators
    ///
    /// Calling `init` again replaces the service; parts cached by the old one
    /// are dropped.
    pub fn init(
        &self,
        cfg: Config,
        holders: Arc<dyn HolderRepository>,
        text: Arc<dyn TextLookup>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<()> {
        if cfg.document_author.trim().is_empty() {
            bail!("document_author must not be empty");
        }

        let service = Arc::new(Service::new(holders, text, event_publisher, &cfg));
        tracing::info!(
            document_author = %cfg.document_author,
            strict_boolean_parsing = cfg.strict_boolean_parsing,
            cache_parts = cfg.cache_parts,
            "Part settings module initialized"
        );

        *self.config.write() = cfg;
        *self.service.write() = Some(service);
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow!("Service not initialized"))
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Result<Arc<dyn PartSettingsApi>> {
        let service = self.service()?;
        Ok(Arc::new(NativeClient::new(service)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoOpEventPublisher;
    use crate::infra::{InMemoryHolders, YamlTextLookup};

    fn init(module: &PartSettingsModule, cfg: Config) -> Result<()> {
        module.init(
            cfg,
            Arc::new(InMemoryHolders::new()),
            Arc::new(YamlTextLookup::empty()),
            Arc::new(NoOpEventPublisher),
        )
    }

    #[test]
    fn test_not_initialized() {
        let module = PartSettingsModule::new();
        assert!(module.service().is_err());
        assert!(module.client().is_err());
    }

    #[test]
    fn test_init() {
        let module = PartSettingsModule::new();
        let cfg = Config {
            document_author: "Plumbers".to_string(),
            ..Config::default()
        };
        init(&module, cfg).unwrap();
        assert_eq!(module.config().document_author, "Plumbers");
        assert_eq!(module.service().unwrap().document_author(), "Plumbers");
        assert!(module.client().is_ok());
    }

    #[test]
    fn test_init_rejects_blank_author() {
        let module = PartSettingsModule::new();
        let cfg = Config {
            document_author: "  ".to_string(),
            ..Config::default()
        };
        assert!(init(&module, cfg).is_err());
        assert!(module.service().is_err());
    }
}
