use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

entity_id!(UserId);
entity_id!(PostId);
entity_id!(CommentId);

/// Выдаёт идентификаторы, производные от времени создания.
///
/// Берётся текущая метка в миллисекундах; если она не больше предыдущей
/// выданной (две сущности за одну миллисекунду или часы ушли назад),
/// возвращается `last + 1`. Последовательность строго возрастает.
#[derive(Debug, Default, Clone)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{IdSequence, PostId};

    #[test]
    fn next_uses_timestamp_millis() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut seq = IdSequence::new();
        assert_eq!(seq.next(now), now.timestamp_millis());
    }

    #[test]
    fn next_stays_unique_within_same_millisecond() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut seq = IdSequence::new();
        let a = seq.next(now);
        let b = seq.next(now);
        let c = seq.next(now - Duration::seconds(5));
        assert_eq!(b, a + 1);
        assert_eq!(c, a + 2);
    }

    #[test]
    fn ids_parse_from_trimmed_text() {
        let id: PostId = " 42 ".parse().expect("must parse");
        assert_eq!(id, PostId(42));
        assert!("abc".parse::<PostId>().is_err());
    }
}
