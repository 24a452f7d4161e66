// src/record.rs

/// Column names of the participant table, in output order.
pub const HEADER: [&str; 7] = ["Position", "Driver", "Country", "City", "Team", "Class", "Car"];

/// One participant, one CSV line. Every field is always present; a value the
/// page did not provide is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub position: String,
    pub driver: String,
    pub country: String,
    pub city: String,
    pub team: String,
    pub class: String,
    pub car: String,
}

impl Record {
    /// The header row.
    pub fn header() -> Self {
        Self::from_fields(HEADER.map(str::to_string))
    }

    pub fn from_fields(fields: [String; 7]) -> Self {
        let [position, driver, country, city, team, class, car] = fields;
        Self {
            position,
            driver,
            country,
            city,
            team,
            class,
            car,
        }
    }

    /// Fields in column order.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.position,
            &self.driver,
            &self.country,
            &self.city,
            &self.team,
            &self.class,
            &self.car,
        ]
    }
}

/// Header row followed by participant rows in document order.
///
/// The header is unconditional, so `len()` is never below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    header: Record,
    participants: Vec<Record>,
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSet {
    /// A header-only set.
    pub fn new() -> Self {
        Self {
            header: Record::header(),
            participants: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.participants.push(record);
    }

    /// Number of rows including the header.
    pub fn len(&self) -> usize {
        self.participants.len() + 1
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn header(&self) -> &Record {
        &self.header
    }

    pub fn participants(&self) -> &[Record] {
        &self.participants
    }

    /// Header first, then every participant.
    pub fn rows(&self) -> impl Iterator<Item = &Record> {
        std::iter::once(&self.header).chain(self.participants.iter())
    }

    /// Builds a new set with `f` applied to a clone of every participant.
    /// The header is copied unchanged and `self` is left as is.
    pub fn map_participants<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Record) -> Record,
    {
        Self {
            header: self.header.clone(),
            participants: self.participants.iter().cloned().map(&mut f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::from_fields(
            ["1", "Driver One", "Kazakhstan", "Almaty", "", "GT3", "Porsche 911"]
                .map(str::to_string),
        )
    }

    #[test]
    fn new_set_holds_only_the_header() {
        let set = RecordSet::new();
        assert_eq!(set.len(), 1);
        assert_eq!(set.participant_count(), 0);
        let rows: Vec<_> = set.rows().map(Record::fields).collect();
        assert_eq!(rows, vec![HEADER]);
    }

    #[test]
    fn rows_keep_insertion_order_after_header() {
        let mut set = RecordSet::new();
        let mut second = sample();
        second.position = "2".into();
        set.push(sample());
        set.push(second.clone());
        set.push(sample());

        assert_eq!(set.len(), 4);
        let positions: Vec<_> = set.rows().map(|r| r.position.as_str()).collect();
        assert_eq!(positions, vec!["Position", "1", "2", "1"]);
    }

    #[test]
    fn map_participants_leaves_source_untouched() {
        let mut set = RecordSet::new();
        set.push(sample());

        let mapped = set.map_participants(|mut r| {
            r.driver = r.driver.to_uppercase();
            r
        });

        assert_eq!(set.participants()[0].driver, "Driver One");
        assert_eq!(mapped.participants()[0].driver, "DRIVER ONE");
        assert_eq!(mapped.header(), set.header());
    }
}
