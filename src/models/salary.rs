use std::fmt;
use std::str::FromStr;

/// Total number of significant digits a salary may carry.
pub const MAX_DIGITS: usize = 10;
/// Number of fractional digits kept for every salary.
pub const DECIMAL_PLACES: usize = 2;

const INTEGER_DIGITS: usize = MAX_DIGITS - DECIMAL_PLACES;
const SCALE: i64 = 100;

/// Fixed-point monetary amount stored as a count of hundredths.
///
/// Parsed from and rendered to decimal strings such as `"75000.00"` so the
/// value never passes through a binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct Salary(i64);

impl Salary {
    pub fn from_cents(cents: i64) -> Self {
        Salary(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryParseError {
    Invalid(String),
    TooManyDecimalPlaces,
    TooManyDigits,
}

impl fmt::Display for SalaryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryParseError::Invalid(value) => {
                write!(f, "'{}' is not a valid decimal number", value)
            }
            SalaryParseError::TooManyDecimalPlaces => {
                write!(f, "Ensure that there are no more than {} decimal places", DECIMAL_PLACES)
            }
            SalaryParseError::TooManyDigits => write!(
                f,
                "Ensure that there are no more than {} digits before the decimal point",
                INTEGER_DIGITS
            ),
        }
    }
}

impl std::error::Error for SalaryParseError {}

impl FromStr for Salary {
    type Err = SalaryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SalaryParseError::Invalid(s.to_string());
        let trimmed = s.trim();

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits_only(whole) || !digits_only(fraction) {
            return Err(invalid());
        }

        // Trailing zeros past the kept precision carry no value.
        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > DECIMAL_PLACES {
            return Err(SalaryParseError::TooManyDecimalPlaces);
        }
        let whole = whole.trim_start_matches('0');
        if whole.len() > INTEGER_DIGITS {
            return Err(SalaryParseError::TooManyDigits);
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction_value: i64 = format!("{:0<width$}", fraction, width = DECIMAL_PLACES)
            .parse()
            .map_err(|_| invalid())?;

        let cents = whole_value * SCALE + fraction_value;
        Ok(Salary(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / scale,
            magnitude % scale,
            width = DECIMAL_PLACES
        )
    }
}
