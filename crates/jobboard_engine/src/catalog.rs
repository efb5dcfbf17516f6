use jobboard_core::{Category, Country};
use jobboard_logging::{board_info, board_warn};

use crate::JobProvider;

/// Loads the categories for `country`, degrading any failure to an empty list.
///
/// The catalog only enriches the filter UI; search must not depend on it.
pub async fn load_catalog(provider: &dyn JobProvider, country: Country) -> Vec<Category> {
    match provider.categories(country).await {
        Ok(categories) => {
            board_info!("Loaded {} categories for {country}", categories.len());
            categories
        }
        Err(err) => {
            board_warn!("Failed to fetch categories for {country}: {err}");
            Vec::new()
        }
    }
}
