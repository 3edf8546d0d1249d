//! Catalog browsing
//!
//! Query-screen handlers: show all records, filter by region or age range,
//! and step through the cached result set.

use log::warn;

use super::{BrowseResult, Session};
use crate::catalog::CatalogRow;
use crate::store::{CatalogStore, CredentialStore};
use crate::validation::filters::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, region};

impl<C: CatalogStore, U: CredentialStore> Session<C, U> {
    /// Loads the whole catalog into the navigator.
    pub fn show_all(&mut self) -> BrowseResult {
        let rows = match self.catalog.find_all() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Catalog query failed: {}", e);
                Vec::new()
            }
        };
        let count = self.navigator.load(rows);
        match self.navigator.current().cloned() {
            Some(row) => BrowseResult {
                row: Some(row),
                message: format!("{} records found.", count),
            },
            None => BrowseResult::message_only("No records found."),
        }
    }

    /// Filters the catalog by region and reloads the navigator on a hit.
    ///
    /// An empty result leaves the previously loaded rows in place.
    pub fn filter_by_region(&mut self, region_text: &str) -> BrowseResult {
        let check = region(region_text);
        if !check.ok {
            return BrowseResult::message_only(&check.message);
        }

        let rows = match self.catalog.find_by_region(region_text) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Region query for {} failed: {}", region_text, e);
                Vec::new()
            }
        };
        self.load_filtered(rows)
    }

    /// Filters the catalog by an inclusive age range given as raw text.
    ///
    /// A missing bound defaults (lower 0, upper 100), but at least one must
    /// be given; bounds must be non-negative whole numbers, strictly
    /// ordered. These rules are stricter than the bare range-format check
    /// and their messages are part of the query screen's contract.
    pub fn filter_by_age_range(&mut self, lower_text: &str, upper_text: &str) -> BrowseResult {
        let lower_text = lower_text.trim();
        let upper_text = upper_text.trim();

        if lower_text.is_empty() && upper_text.is_empty() {
            return BrowseResult::message_only("Error: Please enter at least one age value.");
        }

        let lower = if lower_text.is_empty() {
            Ok(DEFAULT_MIN_AGE)
        } else {
            lower_text.parse::<i32>()
        };
        let upper = if upper_text.is_empty() {
            Ok(DEFAULT_MAX_AGE)
        } else {
            upper_text.parse::<i32>()
        };
        let (Ok(lower), Ok(upper)) = (lower, upper) else {
            return BrowseResult::message_only("Error: Please enter valid whole numbers.");
        };

        if lower < 0 || upper < 0 {
            return BrowseResult::message_only("Error: Age values must not be negative.");
        }
        if upper < lower {
            return BrowseResult::message_only("Error: Upper bound cannot be less than lower bound.");
        }
        if lower == upper {
            return BrowseResult::message_only("Error: Lower and upper bounds must be different.");
        }

        let rows = match self.catalog.find_by_age_range(lower as u32, upper as u32) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Age range query {}..={} failed: {}", lower, upper, e);
                Vec::new()
            }
        };
        self.load_filtered(rows)
    }

    /// Steps to the next record, wrapping at the end of the result set.
    pub fn next_record(&mut self) -> BrowseResult {
        match self.navigator.next().cloned() {
            Some(row) => BrowseResult {
                row: Some(row),
                message: String::new(),
            },
            None => BrowseResult::message_only("You are at the last record."),
        }
    }

    /// Steps to the previous record, wrapping at the start.
    pub fn previous_record(&mut self) -> BrowseResult {
        match self.navigator.previous().cloned() {
            Some(row) => BrowseResult {
                row: Some(row),
                message: String::new(),
            },
            None => BrowseResult::message_only("You are at the first record."),
        }
    }

    fn load_filtered(&mut self, rows: Vec<CatalogRow>) -> BrowseResult {
        if rows.is_empty() {
            return BrowseResult::message_only("No records found.");
        }
        let count = self.navigator.load(rows);
        BrowseResult {
            row: self.navigator.current().cloned(),
            message: format!("{} records found.", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogRow;
    use crate::session::Session;
    use crate::store::{MemoryCatalog, MemoryCredentialStore};

    fn browsing_session() -> Session<MemoryCatalog, MemoryCredentialStore> {
        let catalog = MemoryCatalog::new(vec![
            CatalogRow::new("Laphroaig", 10, "Islay", 100),
            CatalogRow::new("Ardbeg", 12, "Islay", 110),
            CatalogRow::new("Oban", 14, "Highland", 120),
        ]);
        Session::new(catalog, MemoryCredentialStore::new())
    }

    #[test]
    fn test_show_all_loads_and_reports_count() {
        let mut session = browsing_session();
        let res = session.show_all();
        assert_eq!(res.message, "3 records found.");
        assert_eq!(res.row.unwrap().distillery, "Laphroaig");
    }

    #[test]
    fn test_show_all_on_empty_catalog() {
        let mut session = Session::in_memory();
        let res = session.show_all();
        assert_eq!(res.message, "No records found.");
        assert_eq!(res.row, None);
    }

    #[test]
    fn test_filter_by_region_hits() {
        let mut session = browsing_session();
        let res = session.filter_by_region("Islay");
        assert_eq!(res.message, "2 records found.");
        assert_eq!(res.row.unwrap().distillery, "Laphroaig");
    }

    #[test]
    fn test_filter_by_region_rejects_bad_input() {
        let mut session = browsing_session();
        let res = session.filter_by_region("Islay1");
        assert_eq!(res.message, "Region must be alphabetic.");
        assert_eq!(res.row, None);
    }

    #[test]
    fn test_filter_by_region_no_match_keeps_previous_rows() {
        let mut session = browsing_session();
        session.show_all();
        let res = session.filter_by_region("Campbeltown");
        assert_eq!(res.message, "No records found.");
        // Previously loaded result set is untouched.
        assert_eq!(session.current_record().unwrap().distillery, "Laphroaig");
    }

    #[test]
    fn test_filter_by_age_range_requires_one_bound() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("", "");
        assert_eq!(res.message, "Error: Please enter at least one age value.");
    }

    #[test]
    fn test_filter_by_age_range_rejects_non_numeric() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("ten", "20");
        assert_eq!(res.message, "Error: Please enter valid whole numbers.");
    }

    #[test]
    fn test_filter_by_age_range_rejects_negative() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("-1", "20");
        assert_eq!(res.message, "Error: Age values must not be negative.");
    }

    #[test]
    fn test_filter_by_age_range_rejects_reversed_bounds() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("20", "10");
        assert_eq!(res.message, "Error: Upper bound cannot be less than lower bound.");
    }

    #[test]
    fn test_filter_by_age_range_rejects_equal_bounds() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("12", "12");
        assert_eq!(res.message, "Error: Lower and upper bounds must be different.");
    }

    #[test]
    fn test_filter_by_age_range_defaults_missing_bound() {
        let mut session = browsing_session();
        let res = session.filter_by_age_range("11", "");
        assert_eq!(res.message, "2 records found.");
        assert_eq!(res.row.unwrap().distillery, "Ardbeg");
    }

    #[test]
    fn test_navigation_wraps_and_boundary_messages_only_when_empty() {
        let mut session = browsing_session();
        session.show_all();
        assert_eq!(session.next_record().row.unwrap().distillery, "Ardbeg");
        assert_eq!(session.next_record().row.unwrap().distillery, "Oban");
        assert_eq!(session.next_record().row.unwrap().distillery, "Laphroaig");
        assert_eq!(session.previous_record().row.unwrap().distillery, "Oban");
    }

    #[test]
    fn test_navigation_on_empty_session_reports_boundaries() {
        let mut session = Session::in_memory();
        let res = session.next_record();
        assert_eq!(res.message, "You are at the last record.");
        let res = session.previous_record();
        assert_eq!(res.message, "You are at the first record.");
    }
}
