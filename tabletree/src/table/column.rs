//! Column specification: how a node maps to one cell.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::{Node, Value};

use super::render::Cell;

/// Derives a value from a node. `None` means undefined.
pub type ValueFn = Arc<dyn Fn(&Node) -> Option<Value> + Send + Sync>;

/// Maps raw cell content to display content, with the node for context.
pub type FormatFn = Arc<dyn Fn(Option<Value>, &Node) -> Option<Value> + Send + Sync>;

/// Orders two sort keys.
pub type Comparator = Arc<dyn Fn(Option<&Value>, Option<&Value>) -> Ordering + Send + Sync>;

/// Customizes a freshly derived cell.
pub type CellAlterFn = Arc<dyn Fn(&mut Cell, &Node, CellPosition) + Send + Sync>;

/// Where a cell sits when its column's alter hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Index of the node among its siblings.
    pub row: usize,
    /// Index of the column in the definition.
    pub column: usize,
    /// Tree depth of the node.
    pub depth: usize,
}

/// Where a column's value (or sort key) comes from.
#[derive(Clone)]
pub enum ValueSource {
    /// Read a named field off the node.
    Field(String),
    /// Compute the value from the node.
    Derived(ValueFn),
}

impl ValueSource {
    /// Evaluates the source against a node.
    pub fn get(&self, node: &Node) -> Option<Value> {
        match self {
            ValueSource::Field(name) => node.get(name).cloned(),
            ValueSource::Derived(f) => f(node),
        }
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Field(name) => f.debug_tuple("Field").field(name).finish(),
            ValueSource::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl From<&str> for ValueSource {
    fn from(name: &str) -> Self {
        ValueSource::Field(name.to_string())
    }
}

impl From<String> for ValueSource {
    fn from(name: String) -> Self {
        ValueSource::Field(name)
    }
}

/// A setting that is either fixed or computed per node.
pub enum Resolvable<T> {
    /// The same value for every node.
    Literal(T),
    /// Computed from each node.
    Derived(Arc<dyn Fn(&Node) -> T + Send + Sync>),
}

impl<T: Clone> Resolvable<T> {
    /// Wraps a per-node function.
    pub fn derived(f: impl Fn(&Node) -> T + Send + Sync + 'static) -> Self {
        Resolvable::Derived(Arc::new(f))
    }

    /// Evaluates the setting for a node.
    pub fn eval(&self, node: &Node) -> T {
        match self {
            Resolvable::Literal(value) => value.clone(),
            Resolvable::Derived(f) => f(node),
        }
    }
}

impl<T: Clone> Clone for Resolvable<T> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(value.clone()),
            Resolvable::Derived(f) => Resolvable::Derived(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Resolvable::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl<T> From<T> for Resolvable<T> {
    fn from(value: T) -> Self {
        Resolvable::Literal(value)
    }
}

/// Sort direction recorded on a column.
///
/// A column that was never sorted is `None`; the engine does not
/// distinguish "unset" from an explicit `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    None,
    Up,
    Down,
}

impl SortDirection {
    /// Direction after one more header click.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Up => SortDirection::Down,
            SortDirection::Down | SortDirection::None => SortDirection::Up,
        }
    }

    /// Suffix used in the `sorted-*` class.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::None => "none",
            SortDirection::Up => "up",
            SortDirection::Down => "down",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column configuration.
///
/// Columns define both the order of cells and the 1:1 correspondence
/// between header cells and body cells.
///
/// # Examples
///
/// ```
/// use tabletree::table::Column;
/// use tabletree::model::Value;
///
/// let columns = vec![
///     Column::new("name").heading("Name").indent(),
///     Column::new("size")
///         .heading("Size")
///         .format(|v, _| v.map(|v| Value::from(format!("{v} B")))),
///     Column::derived(|n| Some(Value::from(n.children.len() as i64)))
///         .heading("Entries")
///         .unsortable(),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Source of the cell content.
    pub value: ValueSource,
    /// Overrides `value` as the source of the sort key.
    pub sortvalue: Option<ValueSource>,
    /// Orders sort keys; the loose greater-than ordering when absent.
    pub comparator: Option<Comparator>,
    /// Current sort direction.
    pub sort: SortDirection,
    /// Header clicks on this column do nothing.
    pub unsortable: bool,
    /// Indent cells by `depth × indent_size`.
    pub indent: bool,
    /// Column span of each cell.
    pub colspan: Option<Resolvable<u32>>,
    /// Row span of each cell.
    pub rowspan: Option<Resolvable<u32>>,
    /// Transforms raw content before display.
    pub format: Option<FormatFn>,
    /// Class added to each cell.
    pub class: Option<String>,
    /// Class added to each cell container.
    pub cellclass: Option<String>,
    /// Header cell content.
    pub heading: Option<Value>,
    /// Per-cell customization hook.
    pub alter: Option<CellAlterFn>,
    /// Omit the cell when its formatted content is undefined.
    pub skippable: bool,
}

impl Column {
    /// Create a column that reads a named field.
    pub fn new(field: impl Into<String>) -> Self {
        Self::from_source(ValueSource::Field(field.into()))
    }

    /// Create a column whose content is computed from the node.
    pub fn derived(f: impl Fn(&Node) -> Option<Value> + Send + Sync + 'static) -> Self {
        Self::from_source(ValueSource::Derived(Arc::new(f)))
    }

    /// Create a column from any value source.
    pub fn from_source(value: ValueSource) -> Self {
        Self {
            value,
            sortvalue: None,
            comparator: None,
            sort: SortDirection::None,
            unsortable: false,
            indent: false,
            colspan: None,
            rowspan: None,
            format: None,
            class: None,
            cellclass: None,
            heading: None,
            alter: None,
            skippable: false,
        }
    }

    /// Set the header content.
    pub fn heading(mut self, heading: impl Into<Value>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Indent cells by tree depth.
    pub fn indent(mut self) -> Self {
        self.indent = true;
        self
    }

    /// Disable sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.unsortable = true;
        self
    }

    /// Set the initial sort direction.
    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sort = direction;
        self
    }

    /// Sort by a different source than the displayed value.
    pub fn sortvalue(mut self, source: impl Into<ValueSource>) -> Self {
        self.sortvalue = Some(source.into());
        self
    }

    /// Sort by a key computed from the node.
    pub fn sortvalue_with(
        mut self,
        f: impl Fn(&Node) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.sortvalue = Some(ValueSource::Derived(Arc::new(f)));
        self
    }

    /// Replace the default key ordering.
    pub fn comparator(
        mut self,
        f: impl Fn(Option<&Value>, Option<&Value>) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Set a fixed column span.
    pub fn colspan(mut self, span: u32) -> Self {
        self.colspan = Some(Resolvable::Literal(span));
        self
    }

    /// Compute the column span per node.
    pub fn colspan_with(mut self, f: impl Fn(&Node) -> u32 + Send + Sync + 'static) -> Self {
        self.colspan = Some(Resolvable::derived(f));
        self
    }

    /// Set a fixed row span.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.rowspan = Some(Resolvable::Literal(span));
        self
    }

    /// Compute the row span per node.
    pub fn rowspan_with(mut self, f: impl Fn(&Node) -> u32 + Send + Sync + 'static) -> Self {
        self.rowspan = Some(Resolvable::derived(f));
        self
    }

    /// Transform raw content before display.
    pub fn format(
        mut self,
        f: impl Fn(Option<Value>, &Node) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.format = Some(Arc::new(f));
        self
    }

    /// Add a class to each cell.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Add a class to each cell container.
    pub fn cellclass(mut self, class: impl Into<String>) -> Self {
        self.cellclass = Some(class.into());
        self
    }

    /// Customize each cell after it is derived.
    pub fn alter(
        mut self,
        f: impl Fn(&mut Cell, &Node, CellPosition) + Send + Sync + 'static,
    ) -> Self {
        self.alter = Some(Arc::new(f));
        self
    }

    /// Omit cells whose formatted content is undefined.
    pub fn skippable(mut self) -> Self {
        self.skippable = true;
        self
    }

    /// Whether header clicks sort by this column.
    pub fn is_sortable(&self) -> bool {
        !self.unsortable
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("value", &self.value)
            .field("sortvalue", &self.sortvalue)
            .field("sort", &self.sort)
            .field("unsortable", &self.unsortable)
            .field("indent", &self.indent)
            .field("colspan", &self.colspan)
            .field("rowspan", &self.rowspan)
            .field("class", &self.class)
            .field("cellclass", &self.cellclass)
            .field("heading", &self.heading)
            .field("skippable", &self.skippable)
            .finish_non_exhaustive()
    }
}
