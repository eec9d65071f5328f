//! User service.

use std::sync::Arc;

use tracing::info;

use crate::bus::{BusError, DomainEvent, InProcessEventBus};
use crate::interfaces::notifier::{Notifier, NotifyError};
use crate::interfaces::repository::{Repository, StoreError};
use crate::model::User;
use crate::validation::{self, ValidationError};

/// Event published after a user has been created.
pub const USER_CREATED: &str = "USER_CREATED";

/// Message sent to a freshly created user.
const WELCOME_MESSAGE: &str = "Welcome!";

/// Result type for user service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors from user service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("notification failed: {0}")]
    Notify(#[from] NotifyError),

    #[error("event publish failed: {0}")]
    Bus(#[from] BusError),

    #[error("failed to encode event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Service handling user operations.
///
/// `create` runs validate → persist → notify → publish. The service depends
/// only on the repository and notifier traits; concrete implementations are
/// chosen by the composition root.
pub struct UserService {
    repository: Arc<dyn Repository<User>>,
    notifier: Arc<dyn Notifier>,
    event_bus: Arc<InProcessEventBus>,
}

impl UserService {
    /// Create a new user service over the given ports.
    pub fn new(
        repository: Arc<dyn Repository<User>>,
        notifier: Arc<dyn Notifier>,
        event_bus: Arc<InProcessEventBus>,
    ) -> Self {
        Self {
            repository,
            notifier,
            event_bus,
        }
    }

    /// Event bus this service publishes on; attach observers here.
    pub fn event_bus(&self) -> &Arc<InProcessEventBus> {
        &self.event_bus
    }

    /// Create a user.
    ///
    /// Rejection is atomic: a validation failure leaves the store, the
    /// notifier, and the bus untouched. A failure in a later step aborts
    /// the steps after it; effects already applied are not rolled back.
    pub async fn create(&self, id: &str, name: &str, email: &str) -> Result<User> {
        let mut user = User::new(id, name, email);
        validation::validate_user(&user)?;

        self.repository.save(&mut user).await?;
        self.notifier.send(&user.email, WELCOME_MESSAGE).await?;

        let event = DomainEvent::from_payload(USER_CREATED, &user)?;
        self.event_bus.notify(Arc::new(event)).await?;

        info!(user.id = %user.record.id, "User created");
        Ok(user)
    }

    /// Fetch a user by id. Absence is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<User>> {
        Ok(self.repository.get_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStatus;
    use crate::repository::InMemoryRepository;
    use crate::test_utils::{FailingRepository, RecordingNotifier, RecordingObserver};

    struct Fixture {
        service: UserService,
        repository: Arc<InMemoryRepository<User>>,
        notifier: Arc<RecordingNotifier>,
        observer: Arc<RecordingObserver>,
    }

    async fn fixture() -> Fixture {
        let repository = Arc::new(InMemoryRepository::<User>::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let event_bus = Arc::new(InProcessEventBus::new());
        let observer = Arc::new(RecordingObserver::new("recording"));
        event_bus.attach(observer.clone()).await;

        let service = UserService::new(repository.clone(), notifier.clone(), event_bus);

        Fixture {
            service,
            repository,
            notifier,
            observer,
        }
    }

    #[tokio::test]
    async fn test_create_persists_notifies_and_publishes() {
        let f = fixture().await;

        let user = f
            .service
            .create("1", "Alice", "alice@example.com")
            .await
            .unwrap();

        assert_eq!(user.record.id, "1");
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.record.updated_at >= user.record.created_at);

        // Persisted
        let stored = f.repository.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored, user);

        // Notified
        let sent = f.notifier.sent().await;
        assert_eq!(
            sent,
            vec![("alice@example.com".to_string(), "Welcome!".to_string())]
        );

        // Published
        let events = f.observer.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, USER_CREATED);
        assert_eq!(events[0].payload["id"], "1");
        assert_eq!(events[0].payload["status"], "ACTIVE");
    }

    #[tokio::test]
    async fn test_get_returns_created_user() {
        let f = fixture().await;
        let created = f
            .service
            .create("1", "Alice", "alice@example.com")
            .await
            .unwrap();

        let fetched = f.service.get("1").await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let f = fixture().await;
        assert_eq!(f.service.get("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_atomically() {
        let f = fixture().await;

        let result = f.service.create("2", "Bob", "bad-email").await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MalformedEmail { .. }))
        ));

        // Zero effects anywhere
        assert!(f.repository.get_by_id("2").await.unwrap().is_none());
        assert_eq!(f.notifier.sent_count().await, 0);
        assert_eq!(f.observer.event_count().await, 0);
    }

    #[tokio::test]
    async fn test_empty_name_rejected_atomically() {
        let f = fixture().await;

        let result = f.service.create("3", "", "carol@example.com").await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::EmptyName))
        ));
        assert!(f.repository.list_all().await.unwrap().is_empty());
        assert_eq!(f.notifier.sent_count().await, 0);
        assert_eq!(f.observer.event_count().await, 0);
    }

    #[tokio::test]
    async fn test_store_failure_stops_before_notification() {
        let repository = Arc::new(FailingRepository);
        let notifier = Arc::new(RecordingNotifier::new());
        let event_bus = Arc::new(InProcessEventBus::new());
        let observer = Arc::new(RecordingObserver::new("recording"));
        event_bus.attach(observer.clone()).await;
        let service = UserService::new(repository, notifier.clone(), event_bus);

        let result = service.create("1", "Alice", "alice@example.com").await;

        assert!(matches!(
            result,
            Err(ServiceError::Store(StoreError::Backend(_)))
        ));
        assert_eq!(notifier.sent_count().await, 0);
        assert_eq!(observer.event_count().await, 0);
    }

    #[tokio::test]
    async fn test_notify_failure_leaves_user_persisted_but_unpublished() {
        let f = fixture().await;
        f.notifier.set_fail_on_send(true).await;

        let result = f.service.create("1", "Alice", "alice@example.com").await;

        assert!(matches!(result, Err(ServiceError::Notify(_))));

        // Persisted but the event never went out
        assert!(f.repository.get_by_id("1").await.unwrap().is_some());
        assert_eq!(f.observer.event_count().await, 0);
    }

    #[tokio::test]
    async fn test_critical_observer_failure_surfaces() {
        let f = fixture().await;
        let critical = Arc::new(RecordingObserver::critical("strict"));
        critical.set_fail_on_update(true).await;
        f.service.event_bus().attach(critical).await;

        let result = f.service.create("1", "Alice", "alice@example.com").await;

        assert!(matches!(result, Err(ServiceError::Bus(_))));
        // Persisted and notified before the publish step failed
        assert!(f.repository.get_by_id("1").await.unwrap().is_some());
        assert_eq!(f.notifier.sent_count().await, 1);
    }
}
