use crate::error::RegistryError;
use crate::vocabulary::{time, trs};
use oxrdf::NamedNode;
use oxsdatatypes::{DateTime, Decimal, Duration};
use rustc_hash::FxHashMap;
use std::str::FromStr;

/// The base unit a [`TimeUnit`] is a multiple of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl UnitType {
    /// Length in seconds of the units without a calendar-dependent length.
    fn seconds(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Week => Some(604_800),
            Self::Day => Some(86_400),
            Self::Hour => Some(3_600),
            Self::Minute => Some(60),
            Self::Second => Some(1),
        }
    }
}

/// A temporal unit: `scale` times a base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeUnit {
    base: UnitType,
    scale: Decimal,
}

impl TimeUnit {
    #[inline]
    pub fn new(base: UnitType, scale: impl Into<Decimal>) -> Self {
        Self {
            base,
            scale: scale.into(),
        }
    }

    #[inline]
    pub fn base(&self) -> UnitType {
        self.base
    }

    #[inline]
    pub fn scale(&self) -> Decimal {
        self.scale
    }

    /// `value` units as an XSD duration.
    ///
    /// Returns `None` on overflow or when a year or month based amount is not a whole
    /// number of months.
    pub fn duration(&self, value: Decimal) -> Option<Duration> {
        let amount = value.checked_mul(self.scale)?;
        match self.base {
            UnitType::Year => Duration::new(whole(amount.checked_mul(12)?)?, 0).ok(),
            UnitType::Month => Duration::new(whole(amount)?, 0).ok(),
            base => Duration::new(0, amount.checked_mul(base.seconds()?)?).ok(),
        }
    }
}

fn whole(value: Decimal) -> Option<i64> {
    // The canonical lexical form of an integral decimal has no fractional part.
    value.to_string().parse().ok()
}

/// A temporal reference system positions are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceSystem {
    /// Positions are calendar descriptions (year, month, day...).
    Calendar,
    /// Positions are numbers of `unit` since `origin`.
    Positional { origin: DateTime, unit: NamedNode },
}

/// Known temporal reference systems and units.
///
/// The default registry knows the Gregorian calendar, Unix time and the seven
/// `time:unitX` units.
#[derive(Debug, Clone)]
pub struct TimeRegistry {
    reference_systems: FxHashMap<NamedNode, ReferenceSystem>,
    units: FxHashMap<NamedNode, TimeUnit>,
}

impl TimeRegistry {
    /// A registry without any reference system or unit.
    pub fn new() -> Self {
        Self {
            reference_systems: FxHashMap::default(),
            units: FxHashMap::default(),
        }
    }

    pub fn register_reference_system(
        &mut self,
        iri: NamedNode,
        system: ReferenceSystem,
    ) -> Result<(), RegistryError> {
        if self.reference_systems.contains_key(&iri) {
            return Err(RegistryError::AlreadyRegistered(iri));
        }
        if let ReferenceSystem::Positional { unit, .. } = &system {
            self.unit(unit)?;
        }
        self.reference_systems.insert(iri, system);
        Ok(())
    }

    pub fn register_unit(&mut self, iri: NamedNode, unit: TimeUnit) -> Result<(), RegistryError> {
        if self.units.contains_key(&iri) {
            return Err(RegistryError::AlreadyRegistered(iri));
        }
        self.units.insert(iri, unit);
        Ok(())
    }

    pub fn reference_system(&self, iri: &NamedNode) -> Result<&ReferenceSystem, RegistryError> {
        self.reference_systems
            .get(iri)
            .ok_or_else(|| RegistryError::UnknownReferenceSystem(iri.clone()))
    }

    pub fn unit(&self, iri: &NamedNode) -> Result<&TimeUnit, RegistryError> {
        self.units
            .get(iri)
            .ok_or_else(|| RegistryError::UnknownUnit(iri.clone()))
    }

    /// Checks that `iri` is a calendar.
    pub fn calendar(&self, iri: &NamedNode) -> Result<(), RegistryError> {
        match self.reference_system(iri)? {
            ReferenceSystem::Calendar => Ok(()),
            ReferenceSystem::Positional { .. } => Err(RegistryError::NotCalendar(iri.clone())),
        }
    }

    /// The instant at numeric position `value` of the positional reference system `trs`.
    ///
    /// `Ok(None)` means the position does not fit in an `xsd:dateTime`.
    pub fn position(
        &self,
        trs: &NamedNode,
        value: Decimal,
    ) -> Result<Option<DateTime>, RegistryError> {
        let ReferenceSystem::Positional { origin, unit } = self.reference_system(trs)? else {
            return Err(RegistryError::NotPositional(trs.clone()));
        };
        let Some(offset) = self.unit(unit)?.duration(value) else {
            return Ok(None);
        };
        Ok(origin.checked_add_duration(offset))
    }

    /// The duration of `value` `unit`s.
    pub fn duration(
        &self,
        unit: &NamedNode,
        value: Decimal,
    ) -> Result<Option<Duration>, RegistryError> {
        Ok(self.unit(unit)?.duration(value))
    }
}

impl Default for TimeRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for (iri, base) in [
            (time::UNIT_YEAR, UnitType::Year),
            (time::UNIT_MONTH, UnitType::Month),
            (time::UNIT_WEEK, UnitType::Week),
            (time::UNIT_DAY, UnitType::Day),
            (time::UNIT_HOUR, UnitType::Hour),
            (time::UNIT_MINUTE, UnitType::Minute),
            (time::UNIT_SECOND, UnitType::Second),
        ] {
            registry.units.insert(iri.into_owned(), TimeUnit::new(base, 1));
        }
        registry
            .reference_systems
            .insert(time::GREGORIAN.into_owned(), ReferenceSystem::Calendar);
        registry.reference_systems.insert(
            trs::UNIX_TIME.into_owned(),
            ReferenceSystem::Positional {
                origin: unix_epoch(),
                unit: time::UNIT_SECOND.into_owned(),
            },
        );
        registry
    }
}

/// 1970-01-01T00:00:00Z, the origin of Unix time.
fn unix_epoch() -> DateTime {
    DateTime::from_str(UNIX_EPOCH).expect("valid xsd:dateTime")
}

const UNIX_EPOCH: &str = "1970-01-01T00:00:00Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_durations() {
        let registry = TimeRegistry::default();
        let years = registry
            .duration(&time::UNIT_YEAR.into_owned(), Decimal::from(2))
            .unwrap()
            .unwrap();
        assert_eq!(years, Duration::from_str("P2Y").unwrap());
        let week = time::UNIT_WEEK.into_owned();
        let weeks = registry
            .duration(&week, Decimal::from_str("1.5").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(weeks, Duration::from_str("P10DT12H").unwrap());
        // Half a month has no calendar-independent length.
        let month = time::UNIT_MONTH.into_owned();
        assert_eq!(
            registry
                .duration(&month, Decimal::from_str("0.5").unwrap())
                .unwrap(),
            None
        );
        let fortnight = NamedNode::new_unchecked("http://example.org/unitFortnight");
        assert!(matches!(
            registry.duration(&fortnight, Decimal::from(1)),
            Err(RegistryError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_unix_positions() {
        assert_eq!(unix_epoch().to_string(), UNIX_EPOCH);
        let registry = TimeRegistry::default();
        let unix = trs::UNIX_TIME.into_owned();
        assert_eq!(
            registry.position(&unix, Decimal::from(0)).unwrap(),
            Some(unix_epoch())
        );
        assert_eq!(
            registry.position(&unix, Decimal::from(86_400)).unwrap(),
            Some(DateTime::from_str("1970-01-02T00:00:00Z").unwrap())
        );
        assert!(matches!(
            registry.position(&time::GREGORIAN.into_owned(), Decimal::from(1)),
            Err(RegistryError::NotPositional(_))
        ));
    }

    #[test]
    fn test_registration() {
        let mut registry = TimeRegistry::default();
        let decade = NamedNode::new_unchecked("http://example.org/unitDecade");
        registry
            .register_unit(decade.clone(), TimeUnit::new(UnitType::Year, 10))
            .unwrap();
        assert!(matches!(
            registry.register_unit(decade.clone(), TimeUnit::new(UnitType::Year, 10)),
            Err(RegistryError::AlreadyRegistered(_))
        ));
        let since_2000 = NamedNode::new_unchecked("http://example.org/decadesSince2000");
        registry
            .register_reference_system(
                since_2000.clone(),
                ReferenceSystem::Positional {
                    origin: DateTime::from_str("2000-01-01T00:00:00Z").unwrap(),
                    unit: decade,
                },
            )
            .unwrap();
        assert_eq!(
            registry.position(&since_2000, Decimal::from(2)).unwrap(),
            Some(DateTime::from_str("2020-01-01T00:00:00Z").unwrap())
        );
    }
}
