// File: crates/scatter-core/src/dataset.rs
// Summary: State records and CSV loading with header-index lookup.

use std::io::Read;
use std::path::Path;

use crate::axis::Attribute;
use crate::error::{ChartError, Result};

/// One state row. Unparseable numeric cells are stored as `NaN`.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Full state name, shown in the tooltip.
    pub state: String,
    /// Abbreviation drawn inside the circle.
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

impl Record {
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Poverty => self.poverty,
            Attribute::Age => self.age,
            Attribute::Income => self.income,
            Attribute::Obesity => self.obesity,
            Attribute::Smokes => self.smokes,
            Attribute::Healthcare => self.healthcare,
        }
    }
}

/// Ordered, immutable collection of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let ds = Self::from_csv(rdr)?;
        log::info!("loaded {} records from {}", ds.len(), path.display());
        Ok(ds)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        log::debug!("csv headers: {:?}", headers);

        let idx = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(ChartError::MissingColumn(name))
        };

        let i_state = idx("state")?;
        let i_abbr = idx("abbr")?;
        let mut i_values = [0usize; 6];
        for (slot, attribute) in i_values.iter_mut().zip(Attribute::ALL) {
            *slot = idx(attribute.name())?;
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let text = |i: usize| row.get(i).unwrap_or("").trim().to_string();
            let num = |i: usize| -> f64 {
                row.get(i)
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            };
            let [poverty, age, income, obesity, smokes, healthcare] = i_values.map(num);
            records.push(Record {
                state: text(i_state),
                abbr: text(i_abbr),
                poverty,
                age,
                income,
                obesity,
                smokes,
                healthcare,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position_by_abbr(&self, abbr: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.abbr.eq_ignore_ascii_case(abbr))
    }

    /// All values of one attribute, in record order.
    pub fn column(&self, attribute: Attribute) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.value(attribute))
    }
}
