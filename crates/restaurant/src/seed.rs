use crate::{
    abstract_trait::menu::DynMenuRepository,
    domain::requests::menu::{CreateMenuItemRecordRequest, CreateMenuItemRequest},
};
use anyhow::{Context, Result, anyhow};
use shared::utils::validation_messages;
use std::path::Path;
use tracing::info;
use validator::Validate;

/// Loads the menu from a JSON array file, but only into an empty menu.
/// Returns the number of inserted items.
pub async fn seed_menu(menu: &DynMenuRepository, path: &Path) -> Result<usize> {
    let existing = menu.count().await.context("Failed to count menu items")?;
    if existing > 0 {
        info!("📋 Menu already has {existing} items, skipping seed");
        return Ok(0);
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read menu seed file {}", path.display()))?;

    let items = parse_seed(&raw)
        .with_context(|| format!("Invalid menu seed file {}", path.display()))?;

    for item in &items {
        menu.create(item)
            .await
            .with_context(|| format!("Failed to insert menu item {}", item.name))?;
    }

    info!("🌱 Seeded {} menu items from {}", items.len(), path.display());
    Ok(items.len())
}

fn parse_seed(raw: &str) -> Result<Vec<CreateMenuItemRecordRequest>> {
    let entries: Vec<CreateMenuItemRequest> = serde_json::from_str(raw)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.validate().map_err(|e| {
                anyhow!("entry {index}: {}", validation_messages(&e).join("; "))
            })?;

            match entry {
                CreateMenuItemRequest {
                    name: Some(name),
                    description: Some(description),
                    price: Some(price),
                    image: Some(image),
                } => Ok(CreateMenuItemRecordRequest {
                    name,
                    description,
                    price,
                    image,
                }),
                _ => Err(anyhow!("entry {index}: incomplete menu item")),
            }
        })
        .collect()
}
