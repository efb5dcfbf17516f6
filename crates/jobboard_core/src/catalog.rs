use crate::Country;

/// A job category as offered by the upstream provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub tag: String,
}

impl Category {
    pub fn new(label: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tag: tag.into(),
        }
    }
}

/// Categories available for one country, keyed by tag.
///
/// An empty catalog is a valid state: it is what a failed load degrades to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    country: Option<Country>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, keeping the first occurrence of each tag.
    pub fn new(country: Country, categories: Vec<Category>) -> Self {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.iter().any(|seen| seen.tag == category.tag) {
                unique.push(category);
            }
        }
        Self {
            country: Some(country),
            categories: unique,
        }
    }

    /// Country this catalog was loaded for, if any load has completed.
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.categories.iter().any(|category| category.tag == tag)
    }

    pub fn label_for(&self, tag: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.tag == tag)
            .map(|category| category.label.as_str())
    }

    pub fn tag_for(&self, label: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.label.eq_ignore_ascii_case(label.trim()))
            .map(|category| category.tag.as_str())
    }

    /// Categories whose label contains `needle`, ignoring case, in catalog order.
    pub fn matching<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Category> + 'a {
        let needle = needle.trim().to_lowercase();
        self.categories
            .iter()
            .filter(move |category| category.label.to_lowercase().contains(&needle))
    }

    /// Whether a tag may be selected for `country`.
    ///
    /// Tags are only checked against a non-empty catalog for the same country.
    pub fn accepts(&self, country: Country, tag: &str) -> bool {
        if self.country != Some(country) || self.is_empty() {
            return true;
        }
        self.contains(tag)
    }
}
