//! Application context - dependency injection container

use std::sync::Arc;

use goalfuel_core::{
    DomainStore, EventBus, HydrationService, MealService, NotificationGateway, ResetService,
    TrainingService,
};
use goalfuel_domain::Result;
use goalfuel_infra::storage::blob_store::SharedBlobStore;
use goalfuel_infra::{
    AppConfig, FileBlobStore, FileMealRepository, FileSettingsRepository, FileSlotRepository,
    FileTrainingRepository, LocalNotificationCenter, OnboardingFlag, RandomBackfill, SystemClock,
};
use tracing::info;

/// Application context - holds all services and dependencies.
pub struct AppContext {
    pub config: AppConfig,
    pub store: SharedBlobStore,
    pub notifications: Arc<LocalNotificationCenter>,
    pub events: EventBus,

    pub hydration: HydrationService,
    pub meals: MealService,
    pub trainings: TrainingService,
    pub reset: ResetService,
    pub onboarding: OnboardingFlag,
}

impl AppContext {
    /// Wire up every service against the blob store at `config.data_dir`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let store: SharedBlobStore = Arc::new(FileBlobStore::open(&config.data_dir)?);
        let notifications = Arc::new(LocalNotificationCenter::new());
        let events = EventBus::new();

        let gateway: Arc<dyn NotificationGateway> = notifications.clone();
        let hydration = HydrationService::new(
            Arc::new(FileSlotRepository::new(Arc::clone(&store))),
            Arc::new(FileSettingsRepository::new(Arc::clone(&store))),
            gateway,
            Arc::new(SystemClock),
            Arc::new(RandomBackfill),
        );
        let meals = MealService::new(Arc::new(FileMealRepository::new(Arc::clone(&store))));
        let trainings =
            TrainingService::new(Arc::new(FileTrainingRepository::new(Arc::clone(&store))));
        let domain_store: Arc<dyn DomainStore> = store.clone();
        let reset = ResetService::new(domain_store, events.clone());
        let onboarding = OnboardingFlag::new(Arc::clone(&store));

        info!(data_dir = %config.data_dir.display(), "application context initialized");
        Ok(Self { config, store, notifications, events, hydration, meals, trainings, reset, onboarding })
    }
}
