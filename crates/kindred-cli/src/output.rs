//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::enumerate::PairRow;
use crate::error::Result;
use colored::*;
use kindred_domain::{Family, Person};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// A person as listed by the `people` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    /// Person id
    pub id: String,
    /// Full name
    pub name: String,
    /// Gender tag
    pub gender: String,
    /// Mother's full name, if known
    pub mother: Option<String>,
    /// Father's full name, if known
    pub father: Option<String>,
}

impl PersonRow {
    /// Describe a person with their parents' names.
    pub fn new(family: &Family, person: &Person) -> Self {
        let name_of = |key| family.get(key).map(Person::full_name);
        Self {
            id: person.id.to_string(),
            name: person.full_name(),
            gender: person.gender.to_string(),
            mother: person.mother.and_then(name_of),
            father: person.father.and_then(name_of),
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format relationship rows.
    pub fn format_pairs(&self, rows: &[PairRow]) -> Result<String> {
        match self.format {
            OutputFormat::Tsv => Ok(self.format_pairs_tsv(rows)),
            OutputFormat::Table => Ok(self.format_pairs_table(rows)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        }
    }

    /// Format a single relationship with its offsets.
    pub fn format_pair(&self, row: &PairRow) -> Result<String> {
        match self.format {
            OutputFormat::Tsv => Ok(self.format_pairs_tsv(std::slice::from_ref(row))),
            OutputFormat::Table => {
                let fields = [
                    ("Person", row.person.clone()),
                    ("Relative", row.relative.clone()),
                    ("Up", row.up.to_string()),
                    ("Down", row.down.to_string()),
                    ("Half", row.half.to_string()),
                    ("Relationship", row.label.clone()),
                ];

                let mut builder = Builder::default();
                for (name, value) in fields {
                    builder.push_record([name.to_string(), value]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
        }
    }

    /// Format a people listing.
    pub fn format_people(&self, people: &[PersonRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(people)?),
            OutputFormat::Tsv => Ok(people
                .iter()
                .map(|p| {
                    [
                        p.id.as_str(),
                        p.name.as_str(),
                        p.gender.as_str(),
                        p.mother.as_deref().unwrap_or(""),
                        p.father.as_deref().unwrap_or(""),
                    ]
                    .join("\t")
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if people.is_empty() {
                    return Ok(self.colorize("No people found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Gender", "Mother", "Father"]);
                for p in people {
                    builder.push_record([
                        p.id.as_str(),
                        p.name.as_str(),
                        p.gender.as_str(),
                        p.mother.as_deref().unwrap_or("-"),
                        p.father.as_deref().unwrap_or("-"),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Tab-separated `person, relative, label` rows.
    fn format_pairs_tsv(&self, rows: &[PairRow]) -> String {
        rows.iter()
            .map(|row| format!("{}\t{}\t{}", row.person, row.relative, row.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Relationship rows as a table.
    fn format_pairs_table(&self, rows: &[PairRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No pairs to show.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Person", "Relative", "Up", "Down", "Relationship"]);

        for row in rows {
            builder.push_record([
                row.person.clone(),
                row.relative.clone(),
                row.up.to_string(),
                row.down.to_string(),
                row.label.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row() -> PairRow {
        PairRow {
            person_id: "3".to_string(),
            person: "Bart Simpson".to_string(),
            relative_id: "4".to_string(),
            relative: "Patty Bouvier".to_string(),
            up: 2,
            down: 1,
            half: false,
            label: "aunt".to_string(),
        }
    }

    #[test]
    fn test_tsv_format() {
        let formatter = Formatter::new(OutputFormat::Tsv, false);
        let output = formatter
            .format_pairs(&[create_test_row(), create_test_row()])
            .unwrap();
        assert_eq!(
            output,
            "Bart Simpson\tPatty Bouvier\taunt\nBart Simpson\tPatty Bouvier\taunt"
        );
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_pair(&create_test_row()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["label"], "aunt");
        assert_eq!(value["up"], 2);
        assert_eq!(value["half"], false);
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_pairs(&[create_test_row()]).unwrap();
        assert!(output.contains("Relationship"));
        assert!(output.contains("Patty Bouvier"));
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.format_pairs(&[]).unwrap().contains("No pairs"));
        assert!(formatter.format_people(&[]).unwrap().contains("No people"));
    }

    #[test]
    fn test_people_tsv() {
        let formatter = Formatter::new(OutputFormat::Tsv, false);
        let people = vec![PersonRow {
            id: "3".to_string(),
            name: "Bart Simpson".to_string(),
            gender: "MALE".to_string(),
            mother: Some("Marge Bouvier".to_string()),
            father: None,
        }];
        assert_eq!(
            formatter.format_people(&people).unwrap(),
            "3\tBart Simpson\tMALE\tMarge Bouvier\t"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Tsv, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
