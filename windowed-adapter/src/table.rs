use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use windowed::{Align, RenderConfig};

use crate::{ListFrame, ScrollContainer, VirtualList};

/// A table column: identity key, header label, optional width and a cell renderer.
pub struct Column<T, N> {
    key: String,
    header: String,
    width: Option<u32>,
    render: Rc<dyn Fn(&T, usize) -> N>,
}

impl<T, N> Column<T, N> {
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&T, usize) -> N + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            render: Rc::new(render),
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn render_cell(&self, item: &T, index: usize) -> N {
        (self.render)(item, index)
    }
}

impl<T, N> Clone for Column<T, N> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            width: self.width,
            render: Rc::clone(&self.render),
        }
    }
}

impl<T, N> fmt::Debug for Column<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCell {
    pub key: String,
    pub header: String,
    pub width: Option<u32>,
}

/// The header row: every column once, in column order, never windowed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderRow {
    pub cells: Vec<HeaderCell>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell<N> {
    pub column_key: String,
    pub width: Option<u32>,
    pub content: N,
}

/// One body row: exactly one cell per column, in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow<N> {
    pub key: usize,
    pub cells: Vec<TableCell<N>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableFrame<N> {
    pub header: HeaderRow,
    pub body: ListFrame<TableRow<N>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    NoColumns,
    DuplicateColumnKey(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => f.write_str("a table needs at least one column"),
            Self::DuplicateColumnKey(key) => write!(f, "duplicate column key `{key}`"),
        }
    }
}

impl core::error::Error for TableError {}

/// A virtual table: a fixed header row over a [`VirtualList`] of rows.
///
/// Windowing is delegated entirely to the inner list, so the table has the same guarantees:
/// only rows inside the window are rendered, and each rendered row carries one cell per column.
pub struct VirtualTable<T, N> {
    list: VirtualList,
    columns: Vec<Column<T, N>>,
}

impl<T, N> VirtualTable<T, N> {
    /// Creates a table over `list`.
    ///
    /// Column keys identify cells across frames and must be unique.
    pub fn new(list: VirtualList, columns: Vec<Column<T, N>>) -> Result<Self, TableError> {
        if columns.is_empty() {
            wwarn!("VirtualTable::new without columns");
            return Err(TableError::NoColumns);
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumnKey(column.key.clone()));
            }
        }
        Ok(Self { list, columns })
    }

    /// Creates a table with a fresh list for `config`.
    pub fn with_config(
        config: RenderConfig,
        columns: Vec<Column<T, N>>,
    ) -> Result<Self, TableError> {
        Self::new(VirtualList::from_config(config), columns)
    }

    pub fn columns(&self) -> &[Column<T, N>] {
        &self.columns
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList {
        &mut self.list
    }

    pub fn mount(&mut self, container: &ScrollContainer) {
        self.list.mount(container);
    }

    pub fn unmount(&mut self) {
        self.list.unmount();
    }

    pub fn on_scroll(&mut self, offset: u64) {
        self.list.on_scroll(offset);
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        self.list.scroll_to_index(index, align)
    }

    pub fn header(&self) -> HeaderRow {
        HeaderRow {
            cells: self
                .columns
                .iter()
                .map(|column| HeaderCell {
                    key: column.key.clone(),
                    header: column.header.clone(),
                    width: column.width,
                })
                .collect(),
        }
    }

    pub fn render(&mut self, items: &[T]) -> TableFrame<N> {
        let header = self.header();
        let columns = &self.columns;
        let body = self.list.render(items, |item, index| TableRow {
            key: index,
            cells: columns
                .iter()
                .map(|column| TableCell {
                    column_key: column.key.clone(),
                    width: column.width,
                    content: column.render_cell(item, index),
                })
                .collect(),
        });
        TableFrame { header, body }
    }
}

impl<T, N> fmt::Debug for VirtualTable<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualTable")
            .field("list", &self.list)
            .field("columns", &self.columns)
            .finish()
    }
}
