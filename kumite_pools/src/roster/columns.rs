//! Column resolution for uploaded roster tables.
//!
//! Roster spreadsheets arrive with free-text headers ("Player Name",
//! "Weight (in kg)", "Dojo / Instructors Name", ...). [`ColumnMap`] maps those
//! headers onto the six fields the pool engine needs and [`RosterTable`] turns
//! rows into [`Competitor`] records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{RosterError, RosterResult};
use super::models::Competitor;

/// Semantic roster fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Gender,
    Age,
    Weight,
    Belt,
    Affiliation,
}

impl Field {
    /// All fields in sheet column order
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Gender,
        Field::Age,
        Field::Weight,
        Field::Belt,
        Field::Affiliation,
    ];

    /// Header spellings accepted as an exact (case-insensitive) match
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["name", "player name", "full name", "participant name"],
            Field::Gender => &["gender"],
            Field::Age => &[
                "age",
                "age (in yrs)",
                "age (years)",
                "age(years)",
                "age(year)",
                "age yrs",
                "age in years",
            ],
            Field::Weight => &[
                "weight",
                "weight (in kg)",
                "weight (kg)",
                "weight(kg)",
                "weight in kg",
            ],
            Field::Belt => &["belt", "belt level"],
            Field::Affiliation => &[
                "dojo",
                "instructor",
                "instructors",
                "dojo / instructors name",
                "dojo/instructors name",
                "dojo/instructor",
                "dojo / instructor",
            ],
        }
    }

    /// Header words used when no alias matches exactly
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["name"],
            Field::Gender => &["gender", "sex"],
            Field::Age => &["age"],
            Field::Weight => &["weight"],
            Field::Belt => &["belt"],
            Field::Affiliation => &["dojo", "instructor", "instructors"],
        }
    }

    /// Whether a normalized header contains one of the keywords as a whole word
    fn matches_keyword(self, header: &str) -> bool {
        header
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| self.keywords().contains(&word))
    }

    /// Heading printed on bout sheets
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Gender => "Gender",
            Field::Age => "Age (in yrs)",
            Field::Weight => "Weight (in kg)",
            Field::Belt => "Belt",
            Field::Affiliation => "Dojo / Instructors Name",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// "name" also qualifies headers like "Dojo Name", so it resolves last.
const KEYWORD_ORDER: [Field; 6] = [
    Field::Affiliation,
    Field::Gender,
    Field::Age,
    Field::Weight,
    Field::Belt,
    Field::Name,
];

/// Resolved header index for every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    indexes: [Option<usize>; 6],
}

impl ColumnMap {
    /// Match headers to fields.
    ///
    /// Exact alias matches win; otherwise the first header with a field keyword
    /// as a whole word is used. A header is claimed by at most one field.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        let mut map = Self::default();
        let mut claimed = vec![false; normalized.len()];

        for field in Field::ALL {
            let exact = field.aliases().iter().find_map(|alias| {
                normalized
                    .iter()
                    .enumerate()
                    .position(|(i, h)| !claimed[i] && h == alias)
            });
            if let Some(idx) = exact {
                claimed[idx] = true;
                map.indexes[field.index()] = Some(idx);
            }
        }

        for field in KEYWORD_ORDER {
            if map.indexes[field.index()].is_some() {
                continue;
            }
            let fuzzy = normalized
                .iter()
                .enumerate()
                .position(|(i, h)| !claimed[i] && field.matches_keyword(h));
            if let Some(idx) = fuzzy {
                claimed[idx] = true;
                map.indexes[field.index()] = Some(idx);
            }
        }

        map
    }

    /// Column index for a field, if one was matched
    pub fn get(&self, field: Field) -> Option<usize> {
        self.indexes[field.index()]
    }

    /// Fields that were matched, in sheet column order
    pub fn resolved_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    fn cell<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        self.get(field)
            .and_then(|idx| row.get(idx))
            .map(|s| s.trim())
            .unwrap_or("")
    }

    /// Build a competitor from one row
    pub fn competitor(&self, id: usize, row: &[String]) -> Competitor {
        Competitor {
            id,
            name: self.cell(row, Field::Name).to_string(),
            gender: self.cell(row, Field::Gender).parse().unwrap_or_default(),
            age: leading_number(self.cell(row, Field::Age)).and_then(|v| v.parse().ok()),
            weight: leading_decimal(self.cell(row, Field::Weight)).and_then(|v| v.parse().ok()),
            belt: self.cell(row, Field::Belt).to_string(),
            affiliation: self.cell(row, Field::Affiliation).to_string(),
        }
    }
}

/// Rectangular table as produced by spreadsheet ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTable {
    /// Header row
    pub columns: Vec<String>,
    /// Data rows; may be ragged
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Resolve the header row
    pub fn column_map(&self) -> ColumnMap {
        ColumnMap::resolve(&self.columns)
    }

    /// Convert every row into a competitor; `id` is the row index.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MissingColumn`] if no header maps to the name field.
    pub fn competitors(&self) -> RosterResult<Vec<Competitor>> {
        let map = self.column_map();
        if map.get(Field::Name).is_none() {
            return Err(RosterError::MissingColumn(Field::Name));
        }

        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(id, row)| map.competitor(id, row))
            .collect())
    }
}

// Spreadsheet cells like "12 yrs" or "41.5kg" carry their number up front.
fn leading_number(cell: &str) -> Option<&str> {
    let end = cell
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(cell.len());
    (end > 0).then(|| &cell[..end])
}

fn leading_decimal(cell: &str) -> Option<&str> {
    let mut seen_dot = false;
    let end = cell
        .char_indices()
        .find(|(_, c)| {
            if *c == '.' && !seen_dot {
                seen_dot = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map(|(i, _)| i)
        .unwrap_or(cell.len());
    let number = cell[..end].trim_end_matches('.');
    (!number.is_empty() && number != ".").then_some(number)
}
