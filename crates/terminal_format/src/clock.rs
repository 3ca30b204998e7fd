use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::error::TerminalError;

const DATE_FORMAT: &str = "%d.%m.%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Wall-clock date and time of one instant, as shown in a formatted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// `dd.MM.yyyy`
    pub date: String,

    /// `HH:mm:ss`
    pub time: String,
}

/// Look up an IANA zone identifier such as "Europe/Moscow" or "UTC"
pub fn resolve_zone(zone: &str) -> Result<Tz, TerminalError> {
    zone.parse::<Tz>().map_err(|_| {
        debug!("unable to resolve time zone {:?}", zone);
        TerminalError::InvalidTimeZone(zone.to_string())
    })
}

/// Current date and time in `zone`.
///
/// The zone is resolved on every call, so an invalid identifier only
/// surfaces once something is actually formatted.
pub fn time_and_date(zone: &str) -> Result<Stamp, TerminalError> {
    stamp_at(zone, Utc::now())
}

/// Date and time of `instant` as seen from `zone`
pub fn stamp_at(zone: &str, instant: DateTime<Utc>) -> Result<Stamp, TerminalError> {
    let tz = resolve_zone(zone)?;
    let local = instant.with_timezone(&tz);

    Ok(Stamp {
        date: local.format(DATE_FORMAT).to_string(),
        time: local.format(TIME_FORMAT).to_string(),
    })
}
