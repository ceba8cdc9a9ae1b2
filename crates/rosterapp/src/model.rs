//! # Data Model
//!
//! A student is a single [`Record`] type. The three enrolment categories of the
//! roster (general, new, returning) are a tag on the record, not separate types:
//! the category only decides which optional fields exist and how they default
//! (see [`Category::apply_defaults`]).
//!
//! Engines never see the store directly. They address record fields through
//! [`Field`] and compare them through [`FieldValue`], which gives every field a
//! natural, total ordering and a stable text form.

use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Graduated,
    Leave,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Graduated,
        Status::Leave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Graduated => "graduated",
            Status::Leave => "leave",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                RosterError::InvalidArgument(format!(
                    "unknown status '{}' (expected one of: active, inactive, graduated, leave)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    New,
    Returning,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::New => "new",
            Category::Returning => "returning",
        }
    }

    /// Category-specific defaults for a record being created.
    ///
    /// - `General`: requested status (default active), no gpa, no orientation flag.
    /// - `New`: always active, orientation flag (default attended), no gpa.
    /// - `Returning`: requested status (default active), gpa (default 0.0, 2 decimals).
    pub fn apply_defaults(self, input: &NewRecord) -> CategoryDefaults {
        match self {
            Category::General => CategoryDefaults {
                status: input.status.unwrap_or(Status::Active),
                gpa: None,
                orientation_done: None,
            },
            Category::New => CategoryDefaults {
                status: Status::Active,
                gpa: None,
                orientation_done: Some(input.orientation_done.unwrap_or(true)),
            },
            Category::Returning => CategoryDefaults {
                status: input.status.unwrap_or(Status::Active),
                gpa: Some(round2(input.gpa.unwrap_or(0.0))),
                orientation_done: None,
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "new" => Ok(Category::New),
            "returning" => Ok(Category::Returning),
            other => Err(RosterError::InvalidArgument(format!(
                "unknown category '{}' (expected general, new or returning)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefaults {
    pub status: Status,
    pub gpa: Option<f64>,
    pub orientation_done: Option<bool>,
}

/// Academic standing derived from a gpa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaStanding {
    CumLaude,
    VerySatisfactory,
    Satisfactory,
    Adequate,
}

impl GpaStanding {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            GpaStanding::CumLaude
        } else if gpa >= 3.0 {
            GpaStanding::VerySatisfactory
        } else if gpa >= 2.5 {
            GpaStanding::Satisfactory
        } else {
            GpaStanding::Adequate
        }
    }
}

impl fmt::Display for GpaStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GpaStanding::CumLaude => "cum laude",
            GpaStanding::VerySatisfactory => "very satisfactory",
            GpaStanding::Satisfactory => "satisfactory",
            GpaStanding::Adequate => "adequate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub id: String,
    pub department: String,
    pub contact: String,
    pub entry_year: i32,
    pub status: Status,
    #[serde(default)]
    pub category: Category,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation_done: Option<bool>,
}

impl Record {
    /// The value of `field`, typed for comparison.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Id => FieldValue::Text(self.id.clone()),
            Field::Department => FieldValue::Text(self.department.clone()),
            Field::Contact => FieldValue::Text(self.contact.clone()),
            Field::EntryYear => FieldValue::Int(i64::from(self.entry_year)),
            Field::Status => FieldValue::Text(self.status.as_str().to_string()),
            Field::Category => FieldValue::Text(self.category.as_str().to_string()),
            Field::Gpa => self.gpa.map(FieldValue::Real).unwrap_or(FieldValue::Missing),
            Field::CreatedAt => {
                FieldValue::Text(self.created_at.format(CREATED_AT_FORMAT).to_string())
            }
        }
    }

    pub fn gpa_standing(&self) -> Option<GpaStanding> {
        self.gpa.map(GpaStanding::from_gpa)
    }
}

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Addressable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Id,
    Department,
    Contact,
    EntryYear,
    Status,
    Category,
    Gpa,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Id,
        Field::Department,
        Field::Contact,
        Field::EntryYear,
        Field::Status,
        Field::Category,
        Field::Gpa,
        Field::CreatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::Department => "department",
            Field::Contact => "contact",
            Field::EntryYear => "entry_year",
            Field::Status => "status",
            Field::Category => "category",
            Field::Gpa => "gpa",
            Field::CreatedAt => "created_at",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::EntryYear => FieldKind::Integer,
            Field::Gpa => FieldKind::Real,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| RosterError::InvalidArgument(format!("unknown field '{}'", s)))
    }
}

/// A field value with a natural total order.
///
/// Values of different kinds order as `Missing < numbers < Text`; integers and
/// reals compare numerically with each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Missing,
    Int(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    /// Parses search input into the natural type of `field`.
    ///
    /// Returns `None` when the text can never equal a value of that field
    /// (e.g. `"abc"` for `entry_year`).
    pub fn parse_for(field: Field, text: &str) -> Option<FieldValue> {
        match field.kind() {
            FieldKind::Text => Some(FieldValue::Text(text.to_string())),
            FieldKind::Integer => text.trim().parse::<i64>().ok().map(FieldValue::Int),
            FieldKind::Real => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Real),
        }
    }

    pub fn cmp_natural(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Real(a), Real(b)) => a.total_cmp(b),
            (Int(a), Real(b)) => (*a as f64).total_cmp(b),
            (Real(a), Int(b)) => a.total_cmp(&(*b as f64)),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Int(_) | FieldValue::Real(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => Ok(()),
            FieldValue::Int(n) => write!(f, "{}", n),
            // 3.0 renders as "3.0", not "3"
            FieldValue::Real(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            FieldValue::Real(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Input for creating a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub id: String,
    pub department: String,
    pub contact: String,
    pub entry_year: Option<i32>,
    pub status: Option<Status>,
    pub category: Category,
    pub gpa: Option<f64>,
    pub orientation_done: Option<bool>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        department: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            department: department.into(),
            contact: contact.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_entry_year(mut self, year: i32) -> Self {
        self.entry_year = Some(year);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn with_orientation_done(mut self, done: bool) -> Self {
        self.orientation_done = Some(done);
        self
    }
}

/// Partial update. `None` fields are left untouched.
///
/// `status` is kept as raw text; the store parses and normalizes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub entry_year: Option<i32>,
    pub gpa: Option<f64>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn entry_year(mut self, year: i32) -> Self {
        self.entry_year = Some(year);
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &RecordPatch::default()
    }
}

/// Listing filter. Empty sets do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub departments: Vec<String>,
    pub statuses: Vec<Status>,
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        (self.departments.is_empty() || self.departments.iter().any(|d| d == &record.department))
            && (self.statuses.is_empty() || self.statuses.contains(&record.status))
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
