use super::error::MappingCause;
use super::types::RawHeaders;

pub const HEADER_FIELD_COUNT: usize = 14;

/// Output columns of a `HeaderRecord`, in CSV order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HeaderField {
    EventName = 0,
    Result = 1,
    Termination = 2,
    TimeControl = 3,
    Date = 4,
    Time = 5,
    WhiteName = 6,
    WhiteTitle = 7,
    WhiteElo = 8,
    WhiteEloDiff = 9,
    BlackName = 10,
    BlackTitle = 11,
    BlackElo = 12,
    BlackEloDiff = 13,
}

impl HeaderField {
    const fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FieldSpec {
        &HEADER_FIELDS[self.index()]
    }

    /// Column name used in the CSV header row.
    pub fn column(self) -> &'static str {
        self.spec().column
    }

    /// PGN tag the value is read from.
    pub fn tag(self) -> &'static str {
        self.spec().tag
    }
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.column(), self.tag())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Integer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub field: HeaderField,
    pub column: &'static str,
    pub tag: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

const fn field(
    field: HeaderField,
    column: &'static str,
    tag: &'static str,
    kind: FieldKind,
    presence: Presence,
) -> FieldSpec {
    FieldSpec {
        field,
        column,
        tag,
        kind,
        presence,
    }
}

pub const HEADER_FIELDS: [FieldSpec; HEADER_FIELD_COUNT] = [
    field(
        HeaderField::EventName,
        "event_name",
        "Event",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::Result,
        "result",
        "Result",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::Termination,
        "termination",
        "Termination",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::TimeControl,
        "time_control",
        "TimeControl",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::Date,
        "date",
        "UTCDate",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::Time,
        "time",
        "UTCTime",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::WhiteName,
        "white_name",
        "White",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::WhiteTitle,
        "white_title",
        "WhiteTitle",
        FieldKind::Text,
        Presence::Optional,
    ),
    field(
        HeaderField::WhiteElo,
        "white_elo",
        "WhiteElo",
        FieldKind::Integer,
        Presence::Required,
    ),
    field(
        HeaderField::WhiteEloDiff,
        "white_elo_diff",
        "WhiteRatingDiff",
        FieldKind::Integer,
        Presence::Optional,
    ),
    field(
        HeaderField::BlackName,
        "black_name",
        "Black",
        FieldKind::Text,
        Presence::Required,
    ),
    field(
        HeaderField::BlackTitle,
        "black_title",
        "BlackTitle",
        FieldKind::Text,
        Presence::Optional,
    ),
    field(
        HeaderField::BlackElo,
        "black_elo",
        "BlackElo",
        FieldKind::Integer,
        Presence::Required,
    ),
    field(
        HeaderField::BlackEloDiff,
        "black_elo_diff",
        "BlackRatingDiff",
        FieldKind::Integer,
        Presence::Optional,
    ),
];

/// CSV header row.
pub fn column_names() -> [&'static str; HEADER_FIELD_COUNT] {
    HEADER_FIELDS.map(|spec| spec.column)
}

/// Typed lookups over a raw header list, checked against `HEADER_FIELDS`.
pub(crate) struct FieldReader<'a> {
    headers: &'a RawHeaders,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(headers: &'a RawHeaders) -> Self {
        Self { headers }
    }

    fn lookup(&self, field: HeaderField, kind: FieldKind) -> Result<Option<&'a str>, MappingCause> {
        let spec = field.spec();
        debug_assert_eq!(spec.kind, kind, "{field} read with the wrong kind");

        match self.headers.get(spec.tag) {
            Some(value) => Ok(Some(value)),
            None if spec.presence == Presence::Optional => Ok(None),
            None => Err(MappingCause::MissingField { field }),
        }
    }

    pub(crate) fn text(&self, field: HeaderField) -> Result<String, MappingCause> {
        self.optional_text(field)?
            .ok_or(MappingCause::MissingField { field })
    }

    pub(crate) fn optional_text(&self, field: HeaderField) -> Result<Option<String>, MappingCause> {
        Ok(self.lookup(field, FieldKind::Text)?.map(str::to_owned))
    }

    pub(crate) fn integer(&self, field: HeaderField) -> Result<i32, MappingCause> {
        self.optional_integer(field)?
            .ok_or(MappingCause::MissingField { field })
    }

    pub(crate) fn optional_integer(&self, field: HeaderField) -> Result<Option<i32>, MappingCause> {
        let Some(raw) = self.lookup(field, FieldKind::Integer)? else {
            return Ok(None);
        };

        raw.trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| MappingCause::InvalidInteger {
                field,
                value: raw.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fields_match_contract() {
        let expected: [(&str, &str, FieldKind, Presence); HEADER_FIELD_COUNT] = [
            ("event_name", "Event", FieldKind::Text, Presence::Required),
            ("result", "Result", FieldKind::Text, Presence::Required),
            ("termination", "Termination", FieldKind::Text, Presence::Required),
            ("time_control", "TimeControl", FieldKind::Text, Presence::Required),
            ("date", "UTCDate", FieldKind::Text, Presence::Required),
            ("time", "UTCTime", FieldKind::Text, Presence::Required),
            ("white_name", "White", FieldKind::Text, Presence::Required),
            ("white_title", "WhiteTitle", FieldKind::Text, Presence::Optional),
            ("white_elo", "WhiteElo", FieldKind::Integer, Presence::Required),
            (
                "white_elo_diff",
                "WhiteRatingDiff",
                FieldKind::Integer,
                Presence::Optional,
            ),
            ("black_name", "Black", FieldKind::Text, Presence::Required),
            ("black_title", "BlackTitle", FieldKind::Text, Presence::Optional),
            ("black_elo", "BlackElo", FieldKind::Integer, Presence::Required),
            (
                "black_elo_diff",
                "BlackRatingDiff",
                FieldKind::Integer,
                Presence::Optional,
            ),
        ];

        for (idx, spec) in HEADER_FIELDS.iter().enumerate() {
            assert_eq!(spec.field.index(), idx);
            assert_eq!(spec.column, expected[idx].0);
            assert_eq!(spec.tag, expected[idx].1);
            assert_eq!(spec.kind, expected[idx].2);
            assert_eq!(spec.presence, expected[idx].3);
        }
    }

    #[test]
    fn test_column_names_follow_table_order() {
        let names = column_names();
        assert_eq!(names[0], "event_name");
        assert_eq!(names[8], "white_elo");
        assert_eq!(names[HEADER_FIELD_COUNT - 1], "black_elo_diff");
    }

    #[test]
    fn test_integer_accepts_sign_and_surrounding_whitespace() {
        let headers: RawHeaders = [("WhiteElo", " 1500 "), ("WhiteRatingDiff", "+7")]
            .into_iter()
            .collect();
        let reader = FieldReader::new(&headers);

        assert_eq!(reader.integer(HeaderField::WhiteElo), Ok(1500));
        assert_eq!(reader.optional_integer(HeaderField::WhiteEloDiff), Ok(Some(7)));
        assert_eq!(reader.optional_integer(HeaderField::BlackEloDiff), Ok(None));
    }

    #[test]
    fn test_missing_and_invalid_are_distinct_causes() {
        let headers: RawHeaders = [("BlackElo", "?")].into_iter().collect();
        let reader = FieldReader::new(&headers);

        assert_eq!(
            reader.integer(HeaderField::WhiteElo),
            Err(MappingCause::MissingField {
                field: HeaderField::WhiteElo
            })
        );
        assert_eq!(
            reader.integer(HeaderField::BlackElo),
            Err(MappingCause::InvalidInteger {
                field: HeaderField::BlackElo,
                value: "?".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_text_value_counts_as_present() {
        let headers: RawHeaders = [("Termination", "")].into_iter().collect();
        let reader = FieldReader::new(&headers);

        assert_eq!(reader.text(HeaderField::Termination).as_deref(), Ok(""));
    }
}
