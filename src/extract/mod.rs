// src/extract/mod.rs

pub mod fields;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::record::{Record, RecordSet};
use fields::{
    Cell, FieldSpec, Read, DRIVER_CELL, EMPTY_PLACEHOLDER, FIELDS, FLAG_ATTR, FLAG_IMAGE,
    POSITION_CELL,
};

/// Compiled selectors used during one extraction pass.
struct Selectors {
    row: Selector,
    driver: Selector,
    position: Selector,
    flag: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            row: Selector::parse("tr").expect("row selector should parse"),
            driver: Selector::parse(DRIVER_CELL).expect("driver selector should parse"),
            position: Selector::parse(POSITION_CELL).expect("position selector should parse"),
            flag: Selector::parse(FLAG_IMAGE).expect("flag selector should parse"),
        }
    }
}

/// A `<tr>` holding a driver cell, alive only until it is turned into a [`Record`].
struct ParticipantRow<'a> {
    driver: ElementRef<'a>,
}

impl<'a> ParticipantRow<'a> {
    /// Returns `None` for rows without a marked driver cell (headers,
    /// separators, unrelated tables).
    fn detect(row: ElementRef<'a>, sel: &Selectors) -> Option<Self> {
        row.select(&sel.driver)
            .next()
            .map(|driver| Self { driver })
    }

    fn cell(&self, cell: Cell, sel: &Selectors) -> Option<ElementRef<'a>> {
        match cell {
            Cell::Position => self
                .driver
                .prev_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| sel.position.matches(el)),
            Cell::After(0) => Some(self.driver),
            Cell::After(n) => self
                .driver
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .nth(n - 1),
        }
    }

    fn read(&self, spec: &FieldSpec, sel: &Selectors) -> String {
        let Some(cell) = self.cell(spec.cell, sel) else {
            trace!(field = spec.name, "cell missing");
            return String::new();
        };

        match spec.read {
            Read::Text => cell_text(cell),
            Read::TextOrPlaceholder => {
                let text = cell_text(cell);
                if text == EMPTY_PLACEHOLDER {
                    String::new()
                } else {
                    text
                }
            }
            Read::FlagTitle => cell
                .select(&sel.flag)
                .next()
                .and_then(|img| img.value().attr(FLAG_ATTR))
                .unwrap_or_default()
                .to_string(),
        }
    }

    fn into_record(self, sel: &Selectors) -> Record {
        Record::from_fields(FIELDS.map(|spec| self.read(&spec, sel)))
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Walks every `<tr>` of the document and emits one record per participant
/// row, in document order. Never fails: missing cells become empty fields and
/// a page without participants yields a header-only set.
pub fn extract_participants(doc: &Html) -> RecordSet {
    let sel = Selectors::new();
    let mut records = RecordSet::new();
    let mut skipped = 0usize;

    for row in doc.select(&sel.row) {
        match ParticipantRow::detect(row, &sel) {
            Some(participant) => {
                let record = participant.into_record(&sel);
                trace!(position = %record.position, driver = %record.driver, "participant row");
                records.push(record);
            }
            None => skipped += 1,
        }
    }

    debug!(
        participants = records.participant_count(),
        skipped, "extraction finished"
    );
    records
}

/// Parses `html` and extracts its participants.
pub fn parse_participants(html: &str) -> RecordSet {
    extract_participants(&Html::parse_document(html))
}
