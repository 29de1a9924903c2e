//! OWL-Time temporal entities.

use crate::error::RegistryError;
use crate::registry::TimeRegistry;
use oxrdf::NamedNode;
use oxsdatatypes::{DateTime, Decimal, Duration};
use std::str::FromStr;

/// A `time:Instant`, possibly without a known position.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeInstant {
    iri: NamedNode,
    position: Option<InstantPosition>,
}

impl TimeInstant {
    /// An instant whose position is unknown.
    #[inline]
    pub fn new(iri: NamedNode) -> Self {
        Self {
            iri,
            position: None,
        }
    }

    #[inline]
    pub fn from_date_time(iri: NamedNode, date_time: DateTime) -> Self {
        Self::with_position(iri, InstantPosition::DateTime(date_time))
    }

    #[inline]
    pub fn with_position(iri: NamedNode, position: InstantPosition) -> Self {
        Self {
            iri,
            position: Some(position),
        }
    }

    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.iri
    }

    #[inline]
    pub fn position(&self) -> Option<&InstantPosition> {
        self.position.as_ref()
    }
}

/// Where an instant is on the time line.
#[derive(Debug, Clone, PartialEq)]
pub enum InstantPosition {
    /// `time:inXSDDateTimeStamp` or `time:inXSDDateTime`.
    DateTime(DateTime),
    /// `time:inDateTime`, in the Gregorian calendar.
    Description(DateTimeDescription),
    /// `time:inTimePosition` in a positional reference system.
    Numeric { trs: NamedNode, value: Decimal },
}

impl InstantPosition {
    /// Resolves the position to a date time.
    ///
    /// `Ok(None)` is returned for positions that do not denote a valid `xsd:dateTime`.
    pub fn to_date_time(&self, registry: &TimeRegistry) -> Result<Option<DateTime>, RegistryError> {
        match self {
            Self::DateTime(date_time) => Ok(Some(*date_time)),
            Self::Description(description) => Ok(description.to_date_time()),
            Self::Numeric { trs, value } => registry.position(trs, *value),
        }
    }
}

/// A `time:DateTimeDescription` in the Gregorian calendar and UTC.
///
/// Missing components default to the start of the enclosing period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DateTimeDescription {
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<Decimal>,
}

impl DateTimeDescription {
    pub fn to_date_time(&self) -> Option<DateTime> {
        let second = self.second.unwrap_or_default();
        let padding = if second < Decimal::from(10) { "0" } else { "" };
        DateTime::from_str(&format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{padding}{second}Z",
            self.lexical_year(),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
        ))
        .ok()
    }

    /// The year as in `xsd:gYear`: at least four digits, after the sign.
    pub(crate) fn lexical_year(&self) -> String {
        if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else {
            format!("{:04}", self.year)
        }
    }
}

/// A `time:DurationDescription`: a duration split in calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationDescription {
    pub years: Option<Decimal>,
    pub months: Option<Decimal>,
    pub weeks: Option<Decimal>,
    pub days: Option<Decimal>,
    pub hours: Option<Decimal>,
    pub minutes: Option<Decimal>,
    pub seconds: Option<Decimal>,
}

impl DurationDescription {
    /// The described duration, `None` when years and months do not add up to a whole
    /// number of months.
    pub fn to_duration(&self) -> Option<Duration> {
        let component = |value: Option<Decimal>, factor: i64| {
            value.unwrap_or_default().checked_mul(factor)
        };
        let months = component(self.years, 12)?.checked_add(component(self.months, 1)?)?;
        let seconds = [
            (self.weeks, 604_800),
            (self.days, 86_400),
            (self.hours, 3_600),
            (self.minutes, 60),
            (self.seconds, 1),
        ]
        .into_iter()
        .try_fold(Decimal::default(), |total, (value, factor)| {
            total.checked_add(component(value, factor)?)
        })?;
        Duration::new(months.to_string().parse::<i64>().ok()?, seconds).ok()
    }
}

/// A `time:Duration`: a number of registered units.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDuration {
    pub unit: NamedNode,
    pub value: Decimal,
}

impl TimeDuration {
    #[inline]
    pub fn new(unit: NamedNode, value: impl Into<Decimal>) -> Self {
        Self {
            unit,
            value: value.into(),
        }
    }

    pub fn to_duration(&self, registry: &TimeRegistry) -> Result<Option<Duration>, RegistryError> {
        registry.duration(&self.unit, self.value)
    }
}

/// A `time:Interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeInterval {
    iri: NamedNode,
    extent: IntervalExtent,
}

/// How the extent of an interval is known. The forms are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum IntervalExtent {
    /// Beginning and end instants, each possibly unknown.
    Bounds {
        beginning: Option<TimeInstant>,
        end: Option<TimeInstant>,
    },
    Description(DurationDescription),
    Duration(TimeDuration),
    /// A raw `xsd:duration` span.
    Span(Duration),
}

impl TimeInterval {
    #[inline]
    pub fn new(iri: NamedNode, extent: IntervalExtent) -> Self {
        Self { iri, extent }
    }

    #[inline]
    pub fn from_bounds(
        iri: NamedNode,
        beginning: Option<TimeInstant>,
        end: Option<TimeInstant>,
    ) -> Self {
        Self::new(iri, IntervalExtent::Bounds { beginning, end })
    }

    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.iri
    }

    #[inline]
    pub fn extent(&self) -> &IntervalExtent {
        &self.extent
    }

    pub fn beginning(&self) -> Option<&TimeInstant> {
        match &self.extent {
            IntervalExtent::Bounds { beginning, .. } => beginning.as_ref(),
            _ => None,
        }
    }

    pub fn end(&self) -> Option<&TimeInstant> {
        match &self.extent {
            IntervalExtent::Bounds { end, .. } => end.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_time_description() {
        let description = DateTimeDescription {
            year: 2023,
            month: Some(5),
            day: Some(5),
            hour: Some(20),
            minute: Some(47),
            second: Some(Decimal::from(5)),
        };
        assert_eq!(
            description.to_date_time(),
            Some(DateTime::from_str("2023-05-05T20:47:05Z").unwrap())
        );
        let year = DateTimeDescription {
            year: 2023,
            ..DateTimeDescription::default()
        };
        assert_eq!(
            year.to_date_time(),
            Some(DateTime::from_str("2023-01-01T00:00:00Z").unwrap())
        );
        let invalid = DateTimeDescription {
            year: 2023,
            month: Some(13),
            ..DateTimeDescription::default()
        };
        assert_eq!(invalid.to_date_time(), None);
        let before_common_era = DateTimeDescription {
            year: -5,
            month: Some(3),
            ..DateTimeDescription::default()
        };
        assert_eq!(before_common_era.lexical_year(), "-0005");
        assert_eq!(
            before_common_era.to_date_time(),
            Some(DateTime::from_str("-0005-03-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn test_duration_description() {
        let description = DurationDescription {
            years: Some(Decimal::from(1)),
            months: Some(Decimal::from(2)),
            days: Some(Decimal::from(3)),
            hours: Some(Decimal::from_str("1.5").unwrap()),
            ..DurationDescription::default()
        };
        assert_eq!(
            description.to_duration(),
            Some(Duration::from_str("P1Y2M3DT1H30M").unwrap())
        );
        let fractional = DurationDescription {
            months: Some(Decimal::from_str("0.5").unwrap()),
            ..DurationDescription::default()
        };
        assert_eq!(fractional.to_duration(), None);
    }
}
