use crate::error::AppError;

pub fn validate_leave_dates(
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
) -> Result<(), AppError> {
    if end_date < start_date {
        return Err(AppError::validation(
            "End date must be on or after start date",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leave_date_ordering() {
        assert!(validate_leave_dates(date(2025, 6, 1), date(2025, 6, 5)).is_ok());
        assert!(validate_leave_dates(date(2025, 6, 1), date(2025, 6, 1)).is_ok());
        assert!(validate_leave_dates(date(2025, 6, 5), date(2025, 6, 1)).is_err());
    }
}
