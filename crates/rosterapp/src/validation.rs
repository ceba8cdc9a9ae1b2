//! Field validation for student records.
//!
//! The `valid_*` predicates are pure and never fail: a malformed value is
//! simply `false`. The `check_*` helpers wrap them for the store and turn a
//! `false` into a [`RosterError::Validation`] naming the field and the rule.
//!
//! Rules:
//! - id: 8 to 12 ASCII digits
//! - contact: `local@domain.tld` (local `[A-Za-z0-9._-]+`, domain `[A-Za-z0-9.-]+`,
//!   tld at least two letters)
//! - name: at least 3 characters
//! - department: not blank
//! - entry year: 1990 up to the current year
//! - gpa: 0.0 to 4.0

use crate::error::{Result, RosterError};
use crate::model::{Field, Status};
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_ENTRY_YEAR: i32 = 1990;
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,12}$").expect("valid id regex"));

static CONTACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid contact regex")
});

/// Validates a student id.
///
/// # Examples
/// ```
/// use rosterapp::validation::valid_id;
///
/// assert!(valid_id("12345678"));
/// assert!(valid_id(" 123456789012 "));
/// assert!(!valid_id("abc12345"));
/// assert!(!valid_id("1234567"));
/// ```
pub fn valid_id(s: &str) -> bool {
    ID_RE.is_match(s.trim())
}

/// Validates a contact address of the form `local@domain.tld`.
///
/// # Examples
/// ```
/// use rosterapp::validation::valid_contact;
///
/// assert!(valid_contact("budi@domain.com"));
/// assert!(!valid_contact("budi@domain"));
/// assert!(!valid_contact("a@b@c.com"));
/// ```
pub fn valid_contact(s: &str) -> bool {
    CONTACT_RE.is_match(s.trim())
}

pub fn valid_name(s: &str) -> bool {
    s.trim().chars().count() >= 3
}

pub fn valid_department(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn valid_entry_year(year: i32) -> bool {
    (MIN_ENTRY_YEAR..=current_year()).contains(&year)
}

pub fn valid_gpa(gpa: f64) -> bool {
    gpa.is_finite() && (GPA_MIN..=GPA_MAX).contains(&gpa)
}

/// Case-insensitive status lookup.
pub fn parse_status(s: &str) -> Option<Status> {
    s.parse().ok()
}

pub(crate) fn check_name(s: &str) -> Result<()> {
    ensure(valid_name(s), Field::Name, "must be at least 3 characters")
}

pub(crate) fn check_id(s: &str) -> Result<()> {
    ensure(valid_id(s), Field::Id, "must be 8-12 digits")
}

pub(crate) fn check_contact(s: &str) -> Result<()> {
    ensure(
        valid_contact(s),
        Field::Contact,
        "must look like user@domain.com",
    )
}

pub(crate) fn check_department(s: &str) -> Result<()> {
    ensure(valid_department(s), Field::Department, "must not be empty")
}

pub(crate) fn check_entry_year(year: i32) -> Result<()> {
    if valid_entry_year(year) {
        return Ok(());
    }
    Err(RosterError::validation(
        Field::EntryYear,
        format!("must be between {} and {}", MIN_ENTRY_YEAR, current_year()),
    ))
}

pub(crate) fn check_gpa(gpa: f64) -> Result<()> {
    ensure(valid_gpa(gpa), Field::Gpa, "must be between 0.0 and 4.0")
}

pub(crate) fn check_status(s: &str) -> Result<Status> {
    parse_status(s).ok_or_else(|| {
        RosterError::validation(
            Field::Status,
            "must be one of: active, inactive, graduated, leave",
        )
    })
}

fn ensure(ok: bool, field: Field, reason: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(RosterError::validation(field, reason))
    }
}
