use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{GearCategory, GearItem, Rarity};
use crate::domain::repositories::GearRepository;
use crate::domain::services::gear_power;

/// Create gear item input
pub struct CreateGearItemInput {
    pub base_name: String,
    pub skill_name: Option<String>,
    pub category: String,
    pub tier: u32,
    pub rarity: String,
    pub item_level: u32,
    pub required_level: u32,
    pub icon_url: Option<String>,
}

/// Create gear item output
pub struct CreateGearItemOutput {
    pub item: GearItem,
    pub power: u32,
}

/// Create gear catalog item use case
pub struct CreateGearItem<G: GearRepository> {
    gear_repo: Arc<G>,
}

impl<G: GearRepository> CreateGearItem<G> {
    pub fn new(gear_repo: Arc<G>) -> Self {
        Self { gear_repo }
    }

    pub async fn execute(
        &self,
        input: CreateGearItemInput,
    ) -> Result<CreateGearItemOutput, CreateGearItemError> {
        let base_name = input.base_name.trim().to_string();
        if base_name.is_empty() {
            return Err(CreateGearItemError::Validation("Item name is required".into()));
        }
        if input.tier == 0 {
            return Err(CreateGearItemError::Validation("Tier must be at least 1".into()));
        }
        let category = GearCategory::from_str(&input.category).ok_or_else(|| {
            CreateGearItemError::Validation(format!("Unknown category: {}", input.category))
        })?;
        let rarity = Rarity::from_str(&input.rarity).ok_or_else(|| {
            CreateGearItemError::Validation(format!("Unknown rarity: {}", input.rarity))
        })?;

        let item = GearItem {
            id: Uuid::new_v4().to_string(),
            base_name,
            skill_name: input.skill_name.filter(|s| !s.is_empty()),
            category,
            tier: input.tier,
            rarity,
            item_level: input.item_level.max(1),
            required_level: input.required_level.max(1),
            icon_url: input.icon_url,
        };
        self.gear_repo.save(&item).await?;

        let power = gear_power::gear_item_power(&item);
        Ok(CreateGearItemOutput { item, power })
    }
}

/// Create gear item error types
#[derive(Debug, thiserror::Error)]
pub enum CreateGearItemError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
