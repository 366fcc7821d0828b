use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Грубая "давность" события для ленты.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

/// Раскладывает прошедшее время по корзинам: `<1m`, `<60m`, `<24h`, дальше дни.
///
/// На каждой границе используется целочисленное деление с округлением вниз.
/// Метки из будущего дают отрицательный интервал и попадают в `JustNow`.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
    let elapsed_ms = (now - timestamp).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(60_000);

    if minutes < 1 {
        RelativeAge::JustNow
    } else if minutes < MINUTES_PER_HOUR {
        RelativeAge::Minutes(minutes)
    } else if minutes < MINUTES_PER_DAY {
        RelativeAge::Hours(minutes / MINUTES_PER_HOUR)
    } else {
        RelativeAge::Days(minutes / MINUTES_PER_DAY)
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JustNow => f.write_str("now"),
            Self::Minutes(n) => write!(f, "{n}m"),
            Self::Hours(n) => write!(f, "{n}h"),
            Self::Days(n) => write!(f, "{n}d"),
        }
    }
}
