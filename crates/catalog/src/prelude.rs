pub use crate::error::Error;

pub use anstream::{eprintln, print, println};
pub use color_eyre::eyre::{eyre, Result};
pub use log::{debug, info, warn};

/// Table with one space of padding and the given header row
pub fn new_table(titles: prettytable::Row) -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .column_separator(' ')
        .separator(
            prettytable::format::LinePosition::Title,
            prettytable::format::LineSeparator::new('-', ' ', ' ', ' '),
        )
        .padding(1, 1)
        .build();

    table.set_format(format);
    table.set_titles(titles);

    table
}
