//! Stay catalog search.
//!
//! Backs the stay tab. The catalog is an in-memory seeded list searched by
//! case-insensitive substring over name and location; no webhook exists
//! for stays.

/// One bookable stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Stay {
    /// Stable catalog identifier.
    pub id: String,
    /// Property name.
    pub name: String,
    /// City / country display string.
    pub location: String,
    /// Nightly price.
    pub price: f64,
    /// Average guest rating out of 5.
    pub rating: f64,
}

impl Stay {
    fn new(id: &str, name: &str, location: &str, price: f64, rating: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            price,
            rating,
        }
    }
}

/// Sort order for stay results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaySort {
    /// Cheapest nightly price first.
    #[default]
    Price,
    /// Highest rating first.
    Rating,
}

/// In-memory stay catalog.
pub struct StayCatalog {
    stays: Vec<Stay>,
}

impl StayCatalog {
    /// Build a catalog from the given stays.
    pub fn new(stays: Vec<Stay>) -> Self {
        Self { stays }
    }

    /// Search by case-insensitive substring over name and location.
    ///
    /// Results are ordered per `sort`; equal keys keep catalog order.
    pub fn search(&self, query: &str, sort: StaySort) -> Vec<Stay> {
        let needle = query.trim().to_lowercase();

        let mut matches: Vec<Stay> = self
            .stays
            .iter()
            .filter(|stay| {
                stay.name.to_lowercase().contains(&needle)
                    || stay.location.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        match sort {
            StaySort::Price => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
            StaySort::Rating => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        matches
    }

    /// Number of stays in the catalog.
    pub fn len(&self) -> usize {
        self.stays.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }
}

impl Default for StayCatalog {
    /// The seeded sample catalog.
    fn default() -> Self {
        Self::new(vec![
            Stay::new("hotel-1", "Grand Plaza Hotel", "New York, USA", 250.0, 4.7),
            Stay::new("hotel-2", "Seaside Resort & Spa", "Bali, Indonesia", 180.0, 4.9),
            Stay::new("hotel-3", "Eiffel View Apartments", "Paris, France", 220.0, 4.6),
            Stay::new("hotel-4", "Tokyo Skyline Hotel", "Tokyo, Japan", 200.0, 4.5),
            Stay::new("hotel-5", "Manhattan Luxury Suites", "New York, USA", 300.0, 4.8),
            Stay::new("hotel-6", "Historic Downtown Inn", "Boston, USA", 180.0, 4.6),
            Stay::new("hotel-7", "Marina Bay View", "Singapore", 280.0, 4.9),
        ])
    }
}
