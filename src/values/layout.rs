//! Layout keywords: `display`, `flex-direction` and `z-index` values.

use std::fmt::{self, Write};

use super::{Global, keyword_value, shared_keywords};
use crate::render::{ToCss, display_via_to_css};

keyword_value! {
    /// Display mode.
    pub enum Display {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        Grid => "grid",
        InlineFlex => "inline-flex",
        InlineGrid => "inline-grid",
        Table => "table",
        TableRow => "table-row",
        TableCell => "table-cell",
        ListItem => "list-item",
        RunIn => "run-in",
        FlowRoot => "flow-root",
        Contents => "contents",
        TableColumn => "table-column",
        TableColumnGroup => "table-column-group",
        TableHeaderGroup => "table-header-group",
        TableFooterGroup => "table-footer-group",
        TableRowGroup => "table-row-group",
        None => "none",
    }
}

keyword_value! {
    /// Main axis of a flex container.
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

/// Stacking order: an integer or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZIndex {
    Integer(i32),
    Global(Global),
    Auto,
}

impl From<i32> for ZIndex {
    fn from(value: i32) -> Self {
        ZIndex::Integer(value)
    }
}

shared_keywords!(ZIndex);

impl ToCss for ZIndex {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            ZIndex::Integer(value) => write!(dest, "{}", value),
            ZIndex::Global(global) => global.to_css(dest),
            ZIndex::Auto => dest.write_str("auto"),
        }
    }
}

display_via_to_css!(ZIndex);
