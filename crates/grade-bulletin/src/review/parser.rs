use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One grade sheet line with its cells kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GradeRow {
    pub(crate) line: u64,
    pub(crate) registration_number: String,
    pub(crate) subject: Option<String>,
    pub(crate) final_grade: String,
    pub(crate) absences: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<GradeRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: SheetRow = record.deserialize(Some(&headers))?;

        rows.push(GradeRow {
            line,
            registration_number: row.registration_number,
            subject: row.subject,
            final_grade: row.final_grade.unwrap_or_default(),
            absences: row.absences.unwrap_or_default(),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    registration_number: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    final_grade: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    absences: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
