use super::error::{MappingCause, MappingError};
use super::fields::{FieldReader, HeaderField};
use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Tag pairs as reported by the PGN parser: in file order, unknown tags and
/// duplicates included. Lookups return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHeaders {
    tags: SmallVec<[(String, String); 16]>,
}

impl RawHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.tags.push((tag.into(), value.into()));
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == tag)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (tag, value) in iter {
            headers.push(tag, value);
        }
        headers
    }
}

/// Renders as PGN tag pairs on one line: `[Event "..."] [White "..."]`.
impl fmt::Display for RawHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (tag, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{tag} {value:?}]")?;
        }
        Ok(())
    }
}

impl Serialize for RawHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (tag, value) in self.iter() {
            map.serialize_entry(tag, value)?;
        }
        map.end()
    }
}

/// Per-game metadata extracted from PGN headers.
///
/// Field order is the CSV column order. Built only through
/// [`HeaderRecord::from_headers`], which either fills every required field or
/// fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HeaderRecord {
    // General event data
    event_name: String,
    result: String,
    termination: String,
    time_control: String,

    // Date/Time
    date: String,
    time: String,

    // White
    white_name: String,
    white_title: Option<String>,
    white_elo: i32,
    white_elo_diff: Option<i32>,

    // Black
    black_name: String,
    black_title: Option<String>,
    black_elo: i32,
    black_elo_diff: Option<i32>,
}

impl HeaderRecord {
    /// Maps one game's headers; on failure the headers are handed back
    /// untouched inside the error.
    pub fn from_headers(headers: RawHeaders) -> Result<Self, MappingError> {
        match Self::extract(&FieldReader::new(&headers)) {
            Ok(record) => Ok(record),
            Err(cause) => Err(MappingError { headers, cause }),
        }
    }

    fn extract(fields: &FieldReader<'_>) -> Result<Self, MappingCause> {
        Ok(Self {
            event_name: fields.text(HeaderField::EventName)?,
            result: fields.text(HeaderField::Result)?,
            termination: fields.text(HeaderField::Termination)?,
            time_control: fields.text(HeaderField::TimeControl)?,
            date: fields.text(HeaderField::Date)?,
            time: fields.text(HeaderField::Time)?,
            white_name: fields.text(HeaderField::WhiteName)?,
            white_title: fields.optional_text(HeaderField::WhiteTitle)?,
            white_elo: fields.integer(HeaderField::WhiteElo)?,
            white_elo_diff: fields.optional_integer(HeaderField::WhiteEloDiff)?,
            black_name: fields.text(HeaderField::BlackName)?,
            black_title: fields.optional_text(HeaderField::BlackTitle)?,
            black_elo: fields.integer(HeaderField::BlackElo)?,
            black_elo_diff: fields.optional_integer(HeaderField::BlackEloDiff)?,
        })
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn termination(&self) -> &str {
        &self.termination
    }

    pub fn time_control(&self) -> &str {
        &self.time_control
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn white_name(&self) -> &str {
        &self.white_name
    }

    pub fn white_title(&self) -> Option<&str> {
        self.white_title.as_deref()
    }

    pub fn white_elo(&self) -> i32 {
        self.white_elo
    }

    pub fn white_elo_diff(&self) -> Option<i32> {
        self.white_elo_diff
    }

    pub fn black_name(&self) -> &str {
        &self.black_name
    }

    pub fn black_title(&self) -> Option<&str> {
        self.black_title.as_deref()
    }

    pub fn black_elo(&self) -> i32 {
        self.black_elo
    }

    pub fn black_elo_diff(&self) -> Option<i32> {
        self.black_elo_diff
    }
}
