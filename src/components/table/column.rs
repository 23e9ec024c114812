//! Column Definition
//!
//! Defines table columns with their properties and cell formatters.

/// Column definition for a text table
pub struct Column<R> {
    /// Column identifier; also the `sort_by` field for sortable columns
    pub id: String,
    /// Column header label
    pub label: String,
    /// Column width (in characters, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Cell formatter
    pub render: Box<dyn Fn(&R) -> String + Send + Sync>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters
    Fixed(usize),
    /// Fit content, with optional min/max
    Flex { min: Option<usize>, max: Option<usize> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl ColumnWidth {
    /// Resolve to a character count given the widest content
    pub fn resolve(&self, content: usize) -> usize {
        match *self {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex { min, max } => {
                let lower = min.unwrap_or(0);
                let upper = max.unwrap_or(usize::MAX).max(lower);
                content.clamp(lower, upper)
            }
        }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        render: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: usize) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> String {
        (self.render)(row)
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish()
    }
}
