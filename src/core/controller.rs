use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Library;
use crate::catalog::factory;
use crate::core::domain::Configuration;
use crate::core::messages::Messages;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, library: Library) -> AppState {
        let catalog_service: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&config, library));
        AppState {
            config,
            catalog_service,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.config.locale.messages()
    }
}

// Flow tells the shell loop whether to keep reading commands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::Library;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::messages::{Locale, EN};

    #[tokio::test]
    async fn test_should_build_state() {
        let mut config = Configuration::new();
        config.locale = Locale::En;
        let state = AppState::new(config, Library::new());
        assert_eq!(&EN, state.messages());
        assert!(state.catalog_service.list_books().await.expect("should list").is_empty());
    }
}
