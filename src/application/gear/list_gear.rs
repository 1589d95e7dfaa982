use std::sync::Arc;

use crate::domain::entities::{GearCategory, GearItem, Rarity};
use crate::domain::repositories::{GearFilter, GearRepository};
use crate::domain::services::gear_power;

/// List gear input, all filters optional
pub struct ListGearInput {
    pub category: Option<String>,
    pub rarity: Option<String>,
    pub tier: Option<u32>,
    pub limit: u32,
    pub offset: u32,
}

/// One catalog entry with its computed power
pub struct GearEntry {
    pub item: GearItem,
    pub power: u32,
}

/// List gear output
pub struct ListGearOutput {
    pub items: Vec<GearEntry>,
}

/// List gear catalog use case
pub struct ListGear<G: GearRepository> {
    gear_repo: Arc<G>,
}

impl<G: GearRepository> ListGear<G> {
    pub fn new(gear_repo: Arc<G>) -> Self {
        Self { gear_repo }
    }

    pub async fn execute(&self, input: ListGearInput) -> Result<ListGearOutput, ListGearError> {
        let mut filter = GearFilter::default();
        if let Some(category) = input.category.as_deref() {
            filter.category = Some(
                GearCategory::from_str(category)
                    .ok_or_else(|| ListGearError::Validation(format!("Unknown category: {}", category)))?,
            );
        }
        if let Some(rarity) = input.rarity.as_deref() {
            filter.rarity = Some(
                Rarity::from_str(rarity)
                    .ok_or_else(|| ListGearError::Validation(format!("Unknown rarity: {}", rarity)))?,
            );
        }
        filter.tier = input.tier;

        let limit = input.limit.clamp(1, 200);
        let items = self.gear_repo.find_all(&filter, limit, input.offset).await?;

        let items = items
            .into_iter()
            .map(|item| {
                let power = gear_power::gear_item_power(&item);
                GearEntry { item, power }
            })
            .collect();

        Ok(ListGearOutput { items })
    }
}

/// List gear error types
#[derive(Debug, thiserror::Error)]
pub enum ListGearError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
