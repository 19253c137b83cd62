//! Session record and its create/update inputs.

use crate::domain::foundation::{Patch, SessionRecordId, Timestamp, ValidationError};

use super::metrics;

/// Maximum length of the location column.
pub const MAX_LOCATION_LEN: usize = 255;

/// A persisted poker session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub id: SessionRecordId,
    pub date: Timestamp,
    pub location: String,
    pub sb_size: f64,
    pub bb_size: f64,
    pub buy_in: f64,
    pub cash_out: f64,
    pub hours: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionRecord {
    /// Builds a freshly created record from validated input.
    pub fn from_new(id: SessionRecordId, new: &NewSession, now: Timestamp) -> Self {
        Self {
            id,
            date: new.date,
            location: new.location.clone(),
            sb_size: new.sb_size,
            bb_size: new.bb_size,
            buy_in: new.buy_in,
            cash_out: new.cash_out,
            hours: new.hours,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn net_profit(&self) -> f64 {
        metrics::net_profit(self.buy_in, self.cash_out)
    }

    pub fn bb_per_hour(&self) -> f64 {
        metrics::bb_per_hour(self.net_profit(), self.bb_size, self.hours)
    }

    /// Returns a copy with `changes` merged in and `updated_at` refreshed.
    ///
    /// The new `updated_at` is strictly later than the previous one. Fails
    /// when the merged fields give a bb/hour rate that overflows.
    pub fn apply(&self, changes: &SessionChanges) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        if let Some(date) = changes.date {
            next.date = date;
        }
        if let Some(location) = &changes.location {
            next.location = location.clone();
        }
        if let Some(v) = changes.sb_size {
            next.sb_size = v;
        }
        if let Some(v) = changes.bb_size {
            next.bb_size = v;
        }
        if let Some(v) = changes.buy_in {
            next.buy_in = v;
        }
        if let Some(v) = changes.cash_out {
            next.cash_out = v;
        }
        if let Some(v) = changes.hours {
            next.hours = v;
        }
        next.notes = changes.notes.clone().apply_to(next.notes);
        check_rate(next.buy_in, next.cash_out, next.bb_size, next.hours)?;
        next.updated_at = Timestamp::now_after(&self.updated_at);
        Ok(next)
    }
}

/// Raw create input, every field possibly missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInput {
    pub date: Option<String>,
    pub location: Option<String>,
    pub sb_size: Option<f64>,
    pub bb_size: Option<f64>,
    pub buy_in: Option<f64>,
    pub cash_out: Option<f64>,
    pub hours: Option<f64>,
    pub notes: Option<String>,
}

/// Validated fields of a session about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    date: Timestamp,
    location: String,
    sb_size: f64,
    bb_size: f64,
    buy_in: f64,
    cash_out: f64,
    hours: f64,
    notes: Option<String>,
}

impl NewSession {
    pub fn date(&self) -> Timestamp {
        self.date
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn sb_size(&self) -> f64 {
        self.sb_size
    }
    pub fn bb_size(&self) -> f64 {
        self.bb_size
    }
    pub fn buy_in(&self) -> f64 {
        self.buy_in
    }
    pub fn cash_out(&self) -> f64 {
        self.cash_out
    }
    pub fn hours(&self) -> f64 {
        self.hours
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl TryFrom<SessionInput> for NewSession {
    type Error = ValidationError;

    fn try_from(input: SessionInput) -> Result<Self, Self::Error> {
        let date = required("date", input.date)?;
        let location = required("location", input.location)?;

        let session = Self {
            date: Timestamp::parse("date", &date)?,
            location: validate_location(location)?,
            sb_size: positive("sb_size", required("sb_size", input.sb_size)?)?,
            bb_size: positive("bb_size", required("bb_size", input.bb_size)?)?,
            buy_in: positive("buy_in", required("buy_in", input.buy_in)?)?,
            cash_out: positive("cash_out", required("cash_out", input.cash_out)?)?,
            hours: positive("hours", required("hours", input.hours)?)?,
            notes: input.notes,
        };
        check_rate(session.buy_in, session.cash_out, session.bb_size, session.hours)?;
        Ok(session)
    }
}

/// Raw partial-update input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub date: Patch<String>,
    pub location: Patch<String>,
    pub sb_size: Patch<f64>,
    pub bb_size: Patch<f64>,
    pub buy_in: Patch<f64>,
    pub cash_out: Patch<f64>,
    pub hours: Patch<f64>,
    pub notes: Patch<String>,
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionChanges {
    date: Option<Timestamp>,
    location: Option<String>,
    sb_size: Option<f64>,
    bb_size: Option<f64>,
    buy_in: Option<f64>,
    cash_out: Option<f64>,
    hours: Option<f64>,
    notes: Patch<String>,
}

impl TryFrom<SessionPatch> for SessionChanges {
    type Error = ValidationError;

    fn try_from(patch: SessionPatch) -> Result<Self, Self::Error> {
        let date = match non_null("date", patch.date)? {
            Some(raw) => Some(Timestamp::parse("date", &raw)?),
            None => None,
        };
        let location = match non_null("location", patch.location)? {
            Some(raw) => Some(validate_location(raw)?),
            None => None,
        };

        Ok(Self {
            date,
            location,
            sb_size: optional_positive("sb_size", patch.sb_size)?,
            bb_size: optional_positive("bb_size", patch.bb_size)?,
            buy_in: optional_positive("buy_in", patch.buy_in)?,
            cash_out: optional_positive("cash_out", patch.cash_out)?,
            hours: optional_positive("hours", patch.hours)?,
            notes: patch.notes,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing_field(field))
}

// Required columns cannot be cleared.
fn non_null<T>(field: &str, patch: Patch<T>) -> Result<Option<T>, ValidationError> {
    match patch {
        Patch::Unset => Ok(None),
        Patch::Null => Err(ValidationError::missing_field(field)),
        Patch::Value(v) => Ok(Some(v)),
    }
}

fn optional_positive(field: &str, patch: Patch<f64>) -> Result<Option<f64>, ValidationError> {
    non_null(field, patch)?
        .map(|v| positive(field, v))
        .transpose()
}

fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::not_positive(field, value));
    }
    Ok(value)
}

// Net profit is always finite for finite inputs; the rate can overflow.
fn check_rate(buy_in: f64, cash_out: f64, bb_size: f64, hours: f64) -> Result<(), ValidationError> {
    let net = metrics::net_profit(buy_in, cash_out);
    match metrics::checked_bb_per_hour(net, bb_size, hours) {
        Some(_) => Ok(()),
        None => Err(ValidationError::invalid_format(
            "bb_per_hour",
            "bb_size and hours are too small for this result",
        )),
    }
}

// Stored as given; whitespace-only input counts as empty.
fn validate_location(location: String) -> Result<String, ValidationError> {
    if location.trim().is_empty() {
        return Err(ValidationError::empty_field("location"));
    }
    let len = location.chars().count();
    if len > MAX_LOCATION_LEN {
        return Err(ValidationError::too_long("location", MAX_LOCATION_LEN, len));
    }
    Ok(location)
}
