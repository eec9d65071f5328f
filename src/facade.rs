//! System facade for in-process library usage.
//!
//! Composes one repository, one notifier, one user service, and one event
//! bus with a pre-attached logging observer, and exposes a reduced public
//! surface over them.
//!
//! # Example
//!
//! ```ignore
//! use armature::facade::SystemFacade;
//!
//! let system = SystemFacade::builder().build().await?;
//! let user = system.create_user("1", "Alice", "alice@example.com").await?;
//! assert!(system.get_user("1").await?.is_some());
//! ```

use std::sync::Arc;

use crate::bus::InProcessEventBus;
use crate::config::{Config, Settings};
use crate::interfaces::notifier::{Notifier, NotifyError};
use crate::interfaces::{Observer, Repository};
use crate::model::User;
use crate::notify::init_notifier;
use crate::observers::LoggingObserver;
use crate::repository::InMemoryRepository;
use crate::services::{ServiceError, UserService};

/// Errors from facade construction.
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    #[error("notifier setup failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Builder for a [`SystemFacade`].
pub struct SystemFacadeBuilder {
    config: Config,
    notifier: Option<Arc<dyn Notifier>>,
    observers: Vec<Arc<dyn Observer>>,
}

impl SystemFacadeBuilder {
    fn new() -> Self {
        Self {
            config: Config::default(),
            notifier: None,
            observers: Vec::new(),
        }
    }

    /// Use `config` instead of the defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use `notifier` instead of the config-selected channel.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Attach an additional observer alongside the logging observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the facade.
    ///
    /// Resolves the notifier from the configured channel unless one was
    /// supplied, wires the user service over an in-memory repository, and
    /// pre-attaches the logging observer.
    pub async fn build(self) -> Result<SystemFacade, FacadeError> {
        let notifier = match self.notifier {
            Some(notifier) => notifier,
            None => init_notifier(&self.config.notification.channel)?,
        };

        let settings = Arc::new(Settings::from_config(&self.config));
        let repository: Arc<dyn Repository<User>> = Arc::new(InMemoryRepository::<User>::new());
        let event_bus = Arc::new(InProcessEventBus::new());

        event_bus.attach(Arc::new(LoggingObserver::new())).await;
        for observer in self.observers {
            event_bus.attach(observer).await;
        }

        let user_service = UserService::new(repository, notifier, Arc::clone(&event_bus));

        Ok(SystemFacade {
            config: self.config,
            settings,
            user_service,
            event_bus,
        })
    }
}

/// Composed entry point over the wired components.
///
/// The only operations exposed are `create_user` and `get_user`; everything
/// else is read access to the composed parts.
pub struct SystemFacade {
    config: Config,
    settings: Arc<Settings>,
    user_service: UserService,
    event_bus: Arc<InProcessEventBus>,
}

impl SystemFacade {
    /// Create a builder with default configuration.
    pub fn builder() -> SystemFacadeBuilder {
        SystemFacadeBuilder::new()
    }

    /// Create a user. Delegates to the user service.
    pub async fn create_user(
        &self,
        id: &str,
        name: &str,
        email: &str,
    ) -> Result<User, ServiceError> {
        self.user_service.create(id, name, email).await
    }

    /// Fetch a user by id. Absence is `Ok(None)`.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, ServiceError> {
        self.user_service.get(id).await
    }

    /// The configuration this system was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared runtime settings.
    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    /// The event bus observers are attached to.
    pub fn event_bus(&self) -> &Arc<InProcessEventBus> {
        &self.event_bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::model::UserStatus;
    use crate::services::USER_CREATED;
    use crate::test_utils::{RecordingNotifier, RecordingObserver};
    use crate::validation::ValidationError;

    #[tokio::test]
    async fn test_default_build_uses_email_channel() {
        let system = SystemFacade::builder().build().await.unwrap();
        assert_eq!(system.config().notification.channel, "EMAIL");
        // Logging observer is pre-attached
        assert_eq!(system.event_bus().observer_count().await, 1);
    }

    #[tokio::test]
    async fn test_build_rejects_unknown_channel() {
        let config = Config {
            notification: NotificationConfig {
                channel: "PIGEON".to_string(),
            },
            ..Config::default()
        };

        let result = SystemFacade::builder().with_config(config).build().await;

        assert!(matches!(
            result,
            Err(FacadeError::Notify(NotifyError::UnknownChannel(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_then_get_scenario() {
        let system = SystemFacade::builder().build().await.unwrap();

        let user = system
            .create_user("1", "Alice", "alice@example.com")
            .await
            .unwrap();
        assert_eq!(user.record.id, "1");
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.record.updated_at >= user.record.created_at);

        let fetched = system.get_user("1").await.unwrap();
        assert_eq!(fetched, Some(user));

        let result = system.create_user("2", "Bob", "bad-email").await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MalformedEmail { .. }))
        ));
        assert_eq!(system.get_user("2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_extra_observer_receives_events() {
        let observer = Arc::new(RecordingObserver::new("extra"));
        let system = SystemFacade::builder()
            .with_observer(observer.clone())
            .build()
            .await
            .unwrap();

        system
            .create_user("1", "Alice", "alice@example.com")
            .await
            .unwrap();

        let events = observer.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, USER_CREATED);
        assert_eq!(events[0].payload["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_custom_notifier_receives_welcome() {
        let notifier = Arc::new(RecordingNotifier::new());
        let system = SystemFacade::builder()
            .with_notifier(notifier.clone())
            .build()
            .await
            .unwrap();

        system
            .create_user("1", "Alice", "alice@example.com")
            .await
            .unwrap();

        assert_eq!(
            notifier.sent().await,
            vec![("alice@example.com".to_string(), "Welcome!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_settings_shared_through_facade() {
        let system = SystemFacade::builder().build().await.unwrap();

        let handle = Arc::clone(system.settings());
        handle.set("max_users", "100").await;

        assert_eq!(
            system.settings().get("max_users").await.as_deref(),
            Some("100")
        );
    }

    #[tokio::test]
    async fn test_settings_seeded_from_config() {
        let mut config = Config::default();
        config
            .settings
            .insert("region".to_string(), "eu".to_string());

        let system = SystemFacade::builder()
            .with_config(config)
            .build()
            .await
            .unwrap();

        assert_eq!(system.settings().get("region").await.as_deref(), Some("eu"));
    }

    #[tokio::test]
    async fn test_sms_channel_from_config() {
        let config = Config {
            notification: NotificationConfig {
                channel: "sms".to_string(),
            },
            ..Config::default()
        };

        let system = SystemFacade::builder().with_config(config).build().await;
        assert!(system.is_ok());
    }
}
