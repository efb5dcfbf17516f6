use std::fmt;
use std::str::FromStr;

/// Countries the upstream provider is queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Country {
    #[default]
    Gb,
    Us,
    Ca,
    Au,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Gb, Country::Us, Country::Ca, Country::Au];

    /// Lowercase code used as the upstream path segment.
    pub fn code(self) -> &'static str {
        match self {
            Country::Gb => "gb",
            Country::Us => "us",
            Country::Ca => "ca",
            Country::Au => "au",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Country::Gb => "UK",
            Country::Us => "USA",
            Country::Ca => "Canada",
            Country::Au => "Australia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code {0:?}")]
pub struct UnknownCountry(pub String);

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Country::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCountry(code.to_string()))
    }
}

/// The current `{country, category, page}` selection.
///
/// Mutators replace the whole triple in one step, so any observer sees a
/// consistent selection. Selecting a country or category always resets the
/// page to 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    country: Country,
    category: Option<String>,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Country::default())
    }
}

impl FilterState {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            category: None,
            page: 1,
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Selected category tag; `None` means all categories.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_country(&mut self, country: Country) {
        *self = Self {
            country,
            category: self.category.take(),
            page: 1,
        };
    }

    /// Empty or whitespace-only tags clear the selection.
    pub fn set_category(&mut self, category: Option<&str>) {
        let category = category
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToOwned::to_owned);
        *self = Self {
            country: self.country,
            category,
            page: 1,
        };
    }

    /// Commits `page` unless it is below 1 or beyond a known `total_pages`.
    /// Returns whether the page was committed.
    pub fn set_page(&mut self, page: u32, total_pages: Option<u32>) -> bool {
        if page < 1 || total_pages.is_some_and(|total| page > total) {
            return false;
        }
        self.page = page;
        true
    }
}
