//! Calendar-month and fiscal-year arithmetic.
//!
//! A fiscal year `Y` runs from April 1st of `Y` up to (but excluding) April
//! 1st of `Y + 1`. Fiscal months are numbered 1 (April) through 12 (March).

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{LedgerError, LedgerResult};

/// First calendar month of a fiscal year
const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Largest year that still renders as four digits once its fiscal window ends
const MAX_FISCAL_YEAR: i32 = 9998;

/// Half-open datetime range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A calendar month such as 2024-04
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> LedgerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::validation(format!(
                "month must be between 01 and 12, got {:02}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse a `YYYYMM` month filter. Empty input means "no filter".
    pub fn parse_filter(yyyymm: &str) -> LedgerResult<Option<Self>> {
        if yyyymm.is_empty() {
            return Ok(None);
        }
        if yyyymm.len() != 6 {
            return Err(LedgerError::validation(format!(
                "invalid yyyymm format: {}",
                yyyymm
            )));
        }
        if !yyyymm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::validation(format!(
                "yyyymm must contain only digits: {}",
                yyyymm
            )));
        }

        let year = yyyymm[..4]
            .parse::<i32>()
            .map_err(|e| LedgerError::validation(format!("invalid year in {}: {}", yyyymm, e)))?;
        let month = yyyymm[4..]
            .parse::<u32>()
            .map_err(|e| LedgerError::validation(format!("invalid month in {}: {}", yyyymm, e)))?;

        Self::new(year, month).map(Some)
    }

    /// Zero-padded `YYYYMM`
    pub fn to_yyyymm(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_instant(&self) -> LedgerResult<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                LedgerError::validation(format!("date out of range: {}", self.to_yyyymm()))
            })
    }

    /// `[YYYY-MM-01, first day of the following month)`
    pub fn window(&self) -> LedgerResult<DateWindow> {
        Ok(DateWindow {
            start: self.first_instant()?,
            end: self.next().first_instant()?,
        })
    }

    pub fn fiscal_year(&self) -> i32 {
        fiscal_year_of(self.year, self.month)
    }
}

/// Map a calendar month (1..=12) to its fiscal month (1 = April .. 12 = March)
pub fn fiscal_month(month: u32) -> u32 {
    if month >= FISCAL_YEAR_START_MONTH {
        month - 3
    } else {
        month + 9
    }
}

/// Fiscal year that the given calendar month belongs to
pub fn fiscal_year_of(year: i32, month: u32) -> i32 {
    if month >= FISCAL_YEAR_START_MONTH {
        year
    } else {
        year - 1
    }
}

/// Calendar window `[Y-04-01, (Y+1)-04-01)` of fiscal year `Y`
pub fn fiscal_year_window(fiscal_year: i32) -> LedgerResult<DateWindow> {
    if !(0..=MAX_FISCAL_YEAR).contains(&fiscal_year) {
        return Err(LedgerError::validation(format!(
            "fiscal year must be between 0 and {}, got {}",
            MAX_FISCAL_YEAR, fiscal_year
        )));
    }

    let start = YearMonth::new(fiscal_year, FISCAL_YEAR_START_MONTH)?.first_instant()?;
    let end = YearMonth::new(fiscal_year + 1, FISCAL_YEAR_START_MONTH)?.first_instant()?;
    Ok(DateWindow { start, end })
}
