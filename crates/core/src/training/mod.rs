//! Training program catalog

pub mod ports;

use std::sync::Arc;

use goalfuel_domain::{GoalFuelError, Result, TrainingProgram};
use tracing::warn;

use ports::TrainingRepository;

/// Level filter value that passes every program.
pub const ALL_LEVELS: &str = "All Levels";

/// Catalog of built-in programs plus the user's saved ones.
pub struct TrainingService {
    repository: Arc<dyn TrainingRepository>,
}

impl TrainingService {
    pub fn new(repository: Arc<dyn TrainingRepository>) -> Self {
        Self { repository }
    }

    /// The built-in catalog. Never persisted; always present.
    pub fn default_programs() -> Vec<TrainingProgram> {
        let mut programs = vec![
            TrainingProgram::new(
                "Speed",
                "Enhance your quick movements and reactions",
                "Intermediate",
                "45 min",
                Some("speedIcon".into()),
            ),
            TrainingProgram::new(
                "Strength",
                "Become strong and success will be with you.",
                "Advanced",
                "60 min",
                Some("strengthIcon".into()),
            ),
            TrainingProgram::new(
                "Ball Control",
                "Master fundamental ball control techniques",
                "Beginner",
                "30 min",
                Some("ballIcon".into()),
            ),
        ];
        for program in &mut programs {
            program.is_default = true;
        }
        programs
    }

    /// Built-in programs followed by user-created ones. An unreadable user
    /// blob degrades to just the defaults.
    pub async fn load(&self) -> Vec<TrainingProgram> {
        let mut programs = Self::default_programs();
        match self.repository.load_programs().await {
            Ok(saved) => programs.extend(saved),
            Err(err) => {
                warn!(error = %err, "failed to read saved trainings, showing defaults only");
            }
        }
        programs
    }

    /// Validate and save a user-created program.
    ///
    /// Unlike the hydration paths, a failed save here is surfaced: the user
    /// explicitly asked to save and expects a confirmation.
    pub async fn add(
        &self,
        name: &str,
        description: &str,
        level: &str,
        duration: &str,
        icon_name: Option<String>,
    ) -> Result<TrainingProgram> {
        if name.trim().is_empty() {
            return Err(GoalFuelError::InvalidInput("Please enter a training name".into()));
        }

        let description = if description.is_empty() { "No description" } else { description };
        let program = TrainingProgram::new(name, description, level, duration, icon_name);

        let mut saved = self.repository.load_programs().await.unwrap_or_default();
        saved.push(program.clone());
        self.repository.save_programs(&saved).await?;

        Ok(program)
    }
}

/// Level + case-insensitive name filter over a program list.
pub fn filter(programs: &[TrainingProgram], level: &str, query: &str) -> Vec<TrainingProgram> {
    let needle = query.to_lowercase();
    programs
        .iter()
        .filter(|program| level == ALL_LEVELS || program.level == level)
        .filter(|program| needle.is_empty() || program.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
