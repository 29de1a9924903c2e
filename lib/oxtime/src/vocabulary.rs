//! [OWL-Time](https://www.w3.org/TR/owl-time/) vocabulary.
//!
//! Only the terms read or written by this crate are listed.

pub mod time {
    //! `time:` terms.
    use oxrdf::NamedNodeRef;

    /// A temporal entity with an extent or duration.
    pub const INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#Interval");
    /// A temporal entity with zero extent.
    pub const INSTANT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#Instant");
    pub const DATE_TIME_DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#DateTimeDescription");
    pub const DURATION_DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#DurationDescription");
    pub const DURATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#Duration");
    pub const TIME_POSITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#TimePosition");

    /// Links a feature to its temporal extent.
    pub const HAS_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasTime");
    pub const HAS_BEGINNING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasBeginning");
    pub const HAS_END: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasEnd");
    pub const IN_XSD_DATE_TIME_STAMP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#inXSDDateTimeStamp");
    pub const IN_XSD_DATE_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#inXSDDateTime");
    pub const IN_DATE_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#inDateTime");
    pub const IN_TIME_POSITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#inTimePosition");
    pub const NUMERIC_POSITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#numericPosition");
    /// The temporal reference system of a position or description.
    pub const HAS_TRS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasTRS");
    pub const HAS_XSD_DURATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasXSDDuration");
    pub const HAS_DURATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasDuration");
    pub const HAS_DURATION_DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasDurationDescription");
    pub const NUMERIC_DURATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#numericDuration");
    pub const UNIT_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitType");

    // Duration description components.
    pub const YEARS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#years");
    pub const MONTHS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#months");
    pub const WEEKS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#weeks");
    pub const DAYS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#days");
    pub const HOURS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hours");
    pub const MINUTES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#minutes");
    pub const SECONDS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#seconds");

    // Date-time description components.
    pub const YEAR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#year");
    pub const MONTH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#month");
    pub const DAY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#day");
    pub const HOUR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hour");
    pub const MINUTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#minute");
    pub const SECOND: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#second");

    pub const UNIT_YEAR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitYear");
    pub const UNIT_MONTH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitMonth");
    pub const UNIT_WEEK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitWeek");
    pub const UNIT_DAY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitDay");
    pub const UNIT_HOUR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitHour");
    pub const UNIT_MINUTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitMinute");
    pub const UNIT_SECOND: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#unitSecond");

    /// The Gregorian calendar.
    pub const GREGORIAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.opengis.net/def/uom/ISO-8601/0/Gregorian");
}

pub mod trs {
    //! Temporal reference systems that are not part of the `time:` namespace.
    use oxrdf::NamedNodeRef;

    /// Seconds since 1970-01-01T00:00:00Z.
    pub const UNIX_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dbpedia.org/resource/Unix_time");
}
