use crate::value::RawValue;
use indexmap::IndexMap;

/// An ordered column → value mapping. Immutable once built: construction
/// goes through [`Record::with`] or `FromIterator`, after which the record
/// is only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: IndexMap<String, RawValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Re-inserting an existing name overwrites the value
    /// but keeps the column's original position.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.columns.get(column)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An ordered batch of records sharing a column universe, as read from one
/// tabular source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Which columns of a record become node properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Every column the record carries, in record order.
    All,
    /// An explicit allow-list, in the given order. A listed column missing
    /// from a record fails the write's construction.
    Only(Vec<String>),
}

impl ColumnSelection {
    pub fn only<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSelection::Only(columns.into_iter().map(Into::into).collect())
    }
}
