//! Record navigator implementation

use crate::catalog::CatalogRow;

/// Cyclic cursor over an in-memory query result set.
///
/// Holds the rows of the most recent catalog query in query order and a
/// cursor into them. Stepping past either end wraps around; any boundary
/// messaging ("you are at the last record") is caller policy, not navigator
/// behavior. Invariant: the cursor is `None` exactly when no rows are
/// loaded, otherwise it is a valid index.
///
/// One navigator belongs to one session. Sharing a cursor between callers
/// is never correct; give each session its own instance.
#[derive(Debug, Default)]
pub struct RecordNavigator {
    rows: Vec<CatalogRow>,
    cursor: Option<usize>,
}

impl RecordNavigator {
    /// Creates an empty navigator with no rows loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached rows wholesale and returns the new count.
    ///
    /// The cursor moves to the first row, or to unset if `rows` is empty.
    pub fn load(&mut self, rows: Vec<CatalogRow>) -> usize {
        self.cursor = if rows.is_empty() { None } else { Some(0) };
        self.rows = rows;
        self.rows.len()
    }

    /// Like [`load`](Self::load), but tolerates an absent result set.
    pub fn replace(&mut self, rows: Option<Vec<CatalogRow>>) {
        self.load(rows.unwrap_or_default());
    }

    /// Moves the cursor to the first row and returns it.
    pub fn first(&mut self) -> Option<&CatalogRow> {
        if self.rows.is_empty() {
            return None;
        }
        self.cursor = Some(0);
        self.rows.first()
    }

    /// Steps the cursor forward, wrapping from the last row to the first.
    ///
    /// A single-row list cycles back to itself.
    pub fn next(&mut self) -> Option<&CatalogRow> {
        let i = self.cursor?;
        let i = (i + 1) % self.rows.len();
        self.cursor = Some(i);
        self.rows.get(i)
    }

    /// Steps the cursor backward, wrapping from the first row to the last.
    pub fn previous(&mut self) -> Option<&CatalogRow> {
        let i = self.cursor?;
        let i = (i + self.rows.len() - 1) % self.rows.len();
        self.cursor = Some(i);
        self.rows.get(i)
    }

    /// Returns the row under the cursor without moving it.
    pub fn current(&self) -> Option<&CatalogRow> {
        self.rows.get(self.cursor?)
    }

    /// Number of rows currently loaded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows are loaded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
