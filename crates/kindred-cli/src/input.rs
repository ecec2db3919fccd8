//! CSV loading.
//!
//! Each row is `id, first name, last name, gender, mother id, father id`.
//! An empty parent column means the parent is unknown.

use crate::config::InputSettings;
use crate::error::{CliError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use kindred_domain::{Family, Gender, PersonId, PersonRecord};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

const COLUMNS: usize = 6;

/// Open a file, or stdin when no path (or `-`) is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading people from {}", path.display());
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        _ => {
            debug!("Reading people from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Parse person records from CSV.
pub fn read_records<R: Read>(reader: R, settings: &InputSettings) -> Result<Vec<PersonRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(settings.has_headers)
        .delimiter(settings.delimiter_byte()?)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(parse_record(&row)?);
    }

    Ok(records)
}

/// Read, resolve and validate a family.
pub fn load_family(path: Option<&Path>, settings: &InputSettings) -> Result<Family> {
    let records = read_records(open_input(path)?, settings)?;
    debug!("Parsed {} record(s)", records.len());

    let family = Family::from_records(records)?;
    info!("Loaded family of {} people", family.len());

    Ok(family)
}

fn parse_record(row: &StringRecord) -> Result<PersonRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let invalid = |message: String| CliError::InvalidRecord { line, message };

    if row.len() != COLUMNS {
        return Err(invalid(format!("expected {} columns, found {}", COLUMNS, row.len())));
    }

    let id = &row[0];
    if id.is_empty() {
        return Err(invalid("empty person id".to_string()));
    }

    let gender = Gender::parse(&row[3])
        .ok_or_else(|| invalid(format!("unknown gender '{}'", &row[3])))?;
    let parent = |field: &str| (!field.is_empty()).then(|| PersonId::new(field));

    Ok(PersonRecord {
        id: PersonId::new(id),
        first_name: row[1].to_string(),
        last_name: row[2].to_string(),
        gender,
        mother_id: parent(&row[4]),
        father_id: parent(&row[5]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPSONS: &str = "\
1,Homer,Simpson,MALE,,
2,Marge,Bouvier,FEMALE,,
3,Bart,Simpson,MALE,2,1
";

    #[test]
    fn test_read_records() {
        let records = read_records(SIMPSONS.as_bytes(), &InputSettings::default()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].first_name, "Homer");
        assert_eq!(records[0].mother_id, None);
        assert_eq!(records[2].mother_id, Some(PersonId::new("2")));
        assert_eq!(records[2].father_id, Some(PersonId::new("1")));
        assert_eq!(records[2].gender, Gender::Male);
    }

    #[test]
    fn test_headers_and_delimiter() {
        let input = "id;first;last;gender;mother;father\n1; Lisa ;Simpson;female;;\n";
        let settings = InputSettings {
            has_headers: true,
            delimiter: ';',
        };

        let records = read_records(input.as_bytes(), &settings).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Lisa");
        assert_eq!(records[0].gender, Gender::Female);
    }

    #[test]
    fn test_wrong_column_count() {
        let input = "1,Homer,Simpson,MALE,,\n2,Marge,Bouvier,FEMALE\n";

        match read_records(input.as_bytes(), &InputSettings::default()) {
            Err(CliError::InvalidRecord { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 6 columns"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_gender() {
        let input = "1,Pat,Doe,OTHER,,\n";
        let err = read_records(input.as_bytes(), &InputSettings::default()).unwrap_err();
        assert!(err.to_string().contains("unknown gender 'OTHER'"));
    }

    #[test]
    fn test_invalid_family_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.csv");
        std::fs::write(&path, "1,Homer,Simpson,MALE,,\n2,Bart,Simpson,MALE,1,\n").unwrap();

        let err = load_family(Some(&path), &InputSettings::default()).unwrap_err();
        assert!(matches!(err, CliError::Family(_)));
    }
}
