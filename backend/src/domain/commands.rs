//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod records {
    use crate::domain::models::period::{DateWindow, YearMonth};
    use crate::domain::models::record::{now_local, parse_occurred_at, NewRecord};
    use crate::error::{LedgerError, LedgerResult};

    /// Input for creating a new record. Absent optional text fields default
    /// to empty strings; an absent timestamp defaults to now.
    #[derive(Debug, Clone, Default)]
    pub struct CreateRecordCommand {
        pub category_id: Option<i64>,
        pub datetime: Option<String>,
        pub from: Option<String>,
        pub kind: Option<String>,
        pub amount: Option<i64>,
        pub memo: Option<String>,
    }

    impl CreateRecordCommand {
        pub fn validate(self) -> LedgerResult<NewRecord> {
            let category_id = self
                .category_id
                .ok_or_else(|| LedgerError::validation("category_id is required"))?;
            if category_id <= 0 {
                return Err(LedgerError::validation(format!(
                    "category_id must be positive, got {}",
                    category_id
                )));
            }
            let amount = self
                .amount
                .ok_or_else(|| LedgerError::validation("price is required"))?;
            let occurred_at = match self.datetime.as_deref() {
                Some(value) => parse_occurred_at(value)?,
                None => now_local(),
            };

            Ok(NewRecord {
                category_id,
                occurred_at,
                from: self.from.unwrap_or_default(),
                kind: self.kind.unwrap_or_default(),
                amount,
                memo: self.memo.unwrap_or_default(),
            })
        }
    }

    /// Filters shared by record listing and counting
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RecordFilterQuery {
        /// `YYYYMM`, or empty for no month filter
        pub yyyymm: String,
        /// Category display id, or 0 for no category filter
        pub category_id: i64,
    }

    impl RecordFilterQuery {
        pub fn resolve(&self) -> LedgerResult<RecordFilter> {
            let month = match YearMonth::parse_filter(&self.yyyymm)? {
                Some(month) => Some(month.window()?),
                None => None,
            };
            let category_id = match self.category_id {
                0 => None,
                id if id > 0 => Some(id),
                id => {
                    return Err(LedgerError::validation(format!(
                        "category_id filter must not be negative, got {}",
                        id
                    )))
                }
            };
            Ok(RecordFilter { month, category_id })
        }
    }

    /// Validated filter handed to storage
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct RecordFilter {
        pub month: Option<DateWindow>,
        pub category_id: Option<i64>,
    }

    /// Query parameters for listing records.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordListQuery {
        pub limit: u32,
        pub offset: u32,
        pub filter: RecordFilterQuery,
    }

    impl Default for RecordListQuery {
        fn default() -> Self {
            Self {
                limit: DEFAULT_PAGE_SIZE,
                offset: 0,
                filter: RecordFilterQuery::default(),
            }
        }
    }

    pub const DEFAULT_PAGE_SIZE: u32 = 20;
}

#[cfg(test)]
mod tests {
    use super::records::*;
    use crate::error::LedgerError;

    #[test]
    fn test_create_command_requires_category_and_amount() {
        let missing_category = CreateRecordCommand {
            amount: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            missing_category.validate(),
            Err(LedgerError::Validation(_))
        ));

        let missing_amount = CreateRecordCommand {
            category_id: Some(201),
            ..Default::default()
        };
        assert!(matches!(
            missing_amount.validate(),
            Err(LedgerError::Validation(_))
        ));

        let zero_category = CreateRecordCommand {
            category_id: Some(0),
            amount: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            zero_category.validate(),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_create_command_defaults() {
        let record = CreateRecordCommand {
            category_id: Some(201),
            amount: Some(-1200),
            datetime: Some("20240415".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(record.from, "");
        assert_eq!(record.kind, "");
        assert_eq!(record.memo, "");
        assert_eq!(record.occurred_at.to_string(), "2024-04-15 00:00:00");
    }

    #[test]
    fn test_filter_resolution() {
        let none = RecordFilterQuery::default().resolve().unwrap();
        assert_eq!(none, RecordFilter::default());

        let both = RecordFilterQuery {
            yyyymm: "202404".to_string(),
            category_id: 201,
        }
        .resolve()
        .unwrap();
        assert_eq!(both.category_id, Some(201));
        assert_eq!(
            both.month.unwrap().end.to_string(),
            "2024-05-01 00:00:00"
        );
    }

    #[test]
    fn test_negative_category_filter_is_rejected() {
        let err = RecordFilterQuery {
            yyyymm: String::new(),
            category_id: -1,
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn test_bad_month_filter_is_rejected() {
        let err = RecordFilterQuery {
            yyyymm: "20241".to_string(),
            category_id: 0,
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }
}
