// src/extract/fields.rs
//
// Column layout of the participant table. The page has no per-column ids, so
// each field is located relative to the driver cell. If the site reorders its
// columns, this table is the only thing to edit.

/// Which cell of the row a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nearest preceding sibling of the driver cell carrying the position classes.
    Position,
    /// The n-th element sibling after the driver cell; `0` is the driver cell itself.
    After(usize),
}

/// How the cell's content becomes the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    /// Trimmed text content, nested elements included.
    Text,
    /// Like `Text`, but a lone `-` placeholder becomes empty.
    TextOrPlaceholder,
    /// `title` attribute of the flag image inside the cell.
    FlagTitle,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub cell: Cell,
    pub read: Read,
}

const fn field(name: &'static str, cell: Cell, read: Read) -> FieldSpec {
    FieldSpec { name, cell, read }
}

/// One extractor per output column, in output order.
pub const FIELDS: [FieldSpec; 7] = [
    field("Position", Cell::Position, Read::Text),
    field("Driver", Cell::After(0), Read::Text),
    field("Country", Cell::After(1), Read::FlagTitle),
    field("City", Cell::After(1), Read::Text),
    field("Team", Cell::After(2), Read::TextOrPlaceholder),
    field("Class", Cell::After(3), Read::Text),
    field("Car", Cell::After(4), Read::Text),
];

/// Rows are recognised by a driver cell carrying this attribute.
pub const DRIVER_CELL: &str = "td[data-driver-id]";
pub const POSITION_CELL: &str = "td.first.text-end";
pub const FLAG_IMAGE: &str = "img.country-flag";
pub const FLAG_ATTR: &str = "title";
pub const EMPTY_PLACEHOLDER: &str = "-";
