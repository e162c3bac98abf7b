//! Time and date functions.
//!
//! `<time.h>` in safe form: the current epoch, UTC and local broken-down
//! time, and a `strftime` subset. The local UTC offset comes from
//! `chrono`; everything else is plain calendar arithmetic.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::string::BoundedBuf;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Current time as (seconds, milliseconds) since the Unix epoch.
///
/// A clock set before 1970 reads as the epoch itself.
pub fn now_epoch_millis() -> (i64, u32) {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_secs() as i64, d.subsec_millis()),
        Err(_) => (0, 0),
    }
}

/// Equivalent to `time(NULL)`.
pub fn now_epoch() -> i64 {
    now_epoch_millis().0
}

/// Seconds east of UTC for the process's local time zone, right now.
pub fn local_offset_secs() -> i32 {
    chrono::Local::now().offset().local_minus_utc()
}

/// Broken-down time representation (like `struct tm`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokenDownTime {
    /// Seconds (0-60, 60 for leap second).
    pub tm_sec: i32,
    /// Minutes (0-59).
    pub tm_min: i32,
    /// Hours (0-23).
    pub tm_hour: i32,
    /// Day of month (1-31).
    pub tm_mday: i32,
    /// Month (0-11).
    pub tm_mon: i32,
    /// Years since 1900.
    pub tm_year: i32,
    /// Day of week (0-6, Sunday = 0).
    pub tm_wday: i32,
    /// Day of year (0-365).
    pub tm_yday: i32,
    /// Daylight saving time flag.
    pub tm_isdst: i32,
    /// Seconds east of UTC.
    pub tm_gmtoff: i32,
}

/// Returns `true` if `year` is a leap year (Gregorian).
#[inline]
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in each month for a non-leap year.
const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Convert seconds since Unix epoch to broken-down UTC time.
///
/// Handles negative epochs (pre-1970). UTC only; see [`localtime_with_offset`] for local time.
pub fn epoch_to_broken_down(epoch_secs: i64) -> BrokenDownTime {
    // Seconds within the day
    let mut rem = epoch_secs % 86400;
    let mut days = epoch_secs / 86400;
    if rem < 0 {
        rem += 86400;
        days -= 1;
    }

    let tm_sec = (rem % 60) as i32;
    let tm_min = ((rem / 60) % 60) as i32;
    let tm_hour = (rem / 3600) as i32;

    // Day of week: Jan 1 1970 was Thursday (4)
    let mut wday = (days % 7 + 4) % 7;
    if wday < 0 {
        wday += 7;
    }
    let tm_wday = wday as i32;

    // Walk years from 1970
    let mut year: i64 = 1970;
    let mut remaining_days = days;

    if remaining_days >= 0 {
        loop {
            let days_in_year: i64 = if is_leap_year(year) { 366 } else { 365 };
            if remaining_days < days_in_year {
                break;
            }
            remaining_days -= days_in_year;
            year += 1;
        }
    } else {
        loop {
            year -= 1;
            let days_in_year: i64 = if is_leap_year(year) { 366 } else { 365 };
            remaining_days += days_in_year;
            if remaining_days >= 0 {
                break;
            }
        }
    }

    let tm_yday = remaining_days as i32;
    let leap = is_leap_year(year);

    // Walk months
    let mut mon = 0i32;
    let mut day_rem = remaining_days as i32;
    for m in 0..12 {
        let dim = if m == 1 && leap {
            29
        } else {
            DAYS_IN_MONTH[m as usize]
        };
        if day_rem < dim {
            mon = m;
            break;
        }
        day_rem -= dim;
        mon = m + 1;
    }

    BrokenDownTime {
        tm_sec,
        tm_min,
        tm_hour,
        tm_mday: day_rem + 1,
        tm_mon: mon,
        tm_year: (year - 1900) as i32,
        tm_wday,
        tm_yday,
        tm_isdst: 0,
        tm_gmtoff: 0,
    }
}

/// Equivalent to `localtime`: `epoch_secs` shifted by `offset_secs` east of
/// UTC. DST is folded into the offset.
pub fn localtime_with_offset(epoch_secs: i64, offset_secs: i32) -> BrokenDownTime {
    let mut tm = epoch_to_broken_down(epoch_secs.saturating_add(i64::from(offset_secs)));
    tm.tm_gmtoff = offset_secs;
    tm
}

fn name_at(names: &[&'static str], index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or("?")
}

fn abbrev(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

fn push_conversion(out: &mut String, conv: char, tm: &BrokenDownTime) {
    use std::fmt::Write as _;

    let year = i64::from(tm.tm_year) + 1900;
    // Writing into a String cannot fail.
    let _ = match conv {
        'Y' => write!(out, "{year}"),
        'y' => write!(out, "{:02}", year.rem_euclid(100)),
        'C' => write!(out, "{:02}", year.div_euclid(100)),
        'm' => write!(out, "{:02}", tm.tm_mon + 1),
        'd' => write!(out, "{:02}", tm.tm_mday),
        'e' => write!(out, "{:2}", tm.tm_mday),
        'H' => write!(out, "{:02}", tm.tm_hour),
        'I' => write!(out, "{:02}", (tm.tm_hour + 11) % 12 + 1),
        'M' => write!(out, "{:02}", tm.tm_min),
        'S' => write!(out, "{:02}", tm.tm_sec),
        'p' => write!(out, "{}", if tm.tm_hour < 12 { "AM" } else { "PM" }),
        'j' => write!(out, "{:03}", tm.tm_yday + 1),
        'u' => write!(out, "{}", if tm.tm_wday == 0 { 7 } else { tm.tm_wday }),
        'w' => write!(out, "{}", tm.tm_wday),
        'a' => write!(out, "{}", abbrev(name_at(&WEEKDAYS, tm.tm_wday))),
        'A' => write!(out, "{}", name_at(&WEEKDAYS, tm.tm_wday)),
        'b' | 'h' => write!(out, "{}", abbrev(name_at(&MONTHS, tm.tm_mon))),
        'B' => write!(out, "{}", name_at(&MONTHS, tm.tm_mon)),
        'F' => write!(out, "{year}-{:02}-{:02}", tm.tm_mon + 1, tm.tm_mday),
        'T' => write!(out, "{:02}:{:02}:{:02}", tm.tm_hour, tm.tm_min, tm.tm_sec),
        'R' => write!(out, "{:02}:{:02}", tm.tm_hour, tm.tm_min),
        'z' => {
            let sign = if tm.tm_gmtoff < 0 { '-' } else { '+' };
            let off = tm.tm_gmtoff.unsigned_abs();
            write!(out, "{sign}{:02}{:02}", off / 3600, (off / 60) % 60)
        }
        'n' => out.write_char('\n'),
        't' => out.write_char('\t'),
        '%' => out.write_char('%'),
        other => write!(out, "%{other}"),
    };
}

/// Render `tm` according to a `strftime` format.
///
/// Supports the numeric and English-name conversions of the C locale.
/// Unknown conversions are copied through unchanged.
pub fn strftime(format: &str, tm: &BrokenDownTime) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(conv) => push_conversion(&mut out, conv, tm),
            None => out.push('%'),
        }
    }
    out
}

/// C `strftime` into a fixed buffer: returns the number of bytes written,
/// or 0 (leaving `out` empty) when the result plus terminator does not fit.
pub fn strftime_into(out: &mut BoundedBuf, format: &str, tm: &BrokenDownTime) -> usize {
    let rendered = strftime(format, tm);
    out.clear();
    if rendered.len() >= out.capacity() {
        return 0;
    }
    out.append(rendered.as_bytes())
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ` for a UTC instant.
pub fn format_utc_millis(epoch_secs: i64, millis: u32) -> String {
    let tm = epoch_to_broken_down(epoch_secs);
    format!(
        "{}.{:03}Z",
        strftime("%Y-%m-%dT%H:%M:%S", &tm),
        millis.min(999)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_zero() {
        let t = epoch_to_broken_down(0);
        assert_eq!(t.tm_year, 70); // 1970
        assert_eq!(t.tm_mon, 0); // January
        assert_eq!(t.tm_mday, 1);
        assert_eq!(t.tm_hour, 0);
        assert_eq!(t.tm_min, 0);
        assert_eq!(t.tm_sec, 0);
        assert_eq!(t.tm_wday, 4); // Thursday
        assert_eq!(t.tm_yday, 0);
    }

    #[test]
    fn known_timestamp() {
        // 2024-01-01 00:00:00 UTC = 1704067200
        let t = epoch_to_broken_down(1_704_067_200);
        assert_eq!(t.tm_year, 124); // 2024 - 1900
        assert_eq!(t.tm_mon, 0); // January
        assert_eq!(t.tm_mday, 1);
        assert_eq!(t.tm_hour, 0);
        assert_eq!(t.tm_min, 0);
        assert_eq!(t.tm_sec, 0);
        assert_eq!(t.tm_wday, 1); // Monday
        assert_eq!(t.tm_yday, 0);
    }

    #[test]
    fn leap_year_feb29() {
        // 2024-02-29 12:00:00 UTC = 1709208000
        let t = epoch_to_broken_down(1_709_208_000);
        assert_eq!(t.tm_year, 124);
        assert_eq!(t.tm_mon, 1); // February
        assert_eq!(t.tm_mday, 29);
        assert_eq!(t.tm_hour, 12);
    }

    #[test]
    fn negative_epoch() {
        // 1969-12-31 23:59:59 UTC = -1
        let t = epoch_to_broken_down(-1);
        assert_eq!(t.tm_year, 69); // 1969
        assert_eq!(t.tm_mon, 11); // December
        assert_eq!(t.tm_mday, 31);
        assert_eq!(t.tm_hour, 23);
        assert_eq!(t.tm_min, 59);
        assert_eq!(t.tm_sec, 59);
        assert_eq!(t.tm_wday, 3); // Wednesday
    }

    #[test]
    fn year_2000_boundary() {
        // 2000-01-01 00:00:00 UTC = 946684800
        let t = epoch_to_broken_down(946_684_800);
        assert_eq!(t.tm_year, 100);
        assert_eq!(t.tm_mon, 0);
        assert_eq!(t.tm_mday, 1);
        assert_eq!(t.tm_wday, 6); // Saturday
    }

    #[test]
    fn is_leap_year_check() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn end_of_year() {
        // 2023-12-31 23:59:59 UTC = 1704067199
        let t = epoch_to_broken_down(1_704_067_199);
        assert_eq!(t.tm_year, 123);
        assert_eq!(t.tm_mon, 11); // December
        assert_eq!(t.tm_mday, 31);
        assert_eq!(t.tm_hour, 23);
        assert_eq!(t.tm_min, 59);
        assert_eq!(t.tm_sec, 59);
        assert_eq!(t.tm_yday, 364);
    }

    #[test]
    fn strftime_lesson_format() {
        // 2024-02-29 12:00:00 UTC
        let t = epoch_to_broken_down(1_709_208_000);
        assert_eq!(strftime("%Y-%m-%d %H:%M:%S", &t), "2024-02-29 12:00:00");
        assert_eq!(strftime("%a %b %e %j", &t), "Thu Feb 29 060");
        assert_eq!(strftime("%A, %B %d %I%p", &t), "Thursday, February 29 12PM");
        assert_eq!(strftime("100%% %F %T %q", &t), "100% 2024-02-29 12:00:00 %q");
        assert_eq!(strftime("trailing %", &t), "trailing %");
    }

    #[test]
    fn localtime_applies_offset() {
        let t = localtime_with_offset(0, 2 * 3600 + 30 * 60);
        assert_eq!((t.tm_hour, t.tm_min), (2, 30));
        assert_eq!(strftime("%z", &t), "+0230");

        let west = localtime_with_offset(0, -5 * 3600);
        assert_eq!(west.tm_year, 69);
        assert_eq!(west.tm_hour, 19);
        assert_eq!(strftime("%z", &west), "-0500");
    }

    #[test]
    fn strftime_into_refuses_overflow() {
        let t = epoch_to_broken_down(0);
        let mut small = BoundedBuf::new(8);
        assert_eq!(strftime_into(&mut small, "%Y-%m-%d", &t), 0);
        assert!(small.is_empty());

        let mut big = BoundedBuf::new(64);
        assert_eq!(strftime_into(&mut big, "%Y-%m-%d", &t), 10);
        assert_eq!(big.as_bytes(), b"1970-01-01");
    }

    #[test]
    fn utc_millis_rendering() {
        assert_eq!(format_utc_millis(1_704_067_199, 42), "2023-12-31T23:59:59.042Z");
    }

    #[test]
    fn clock_reads_after_2020() {
        assert!(now_epoch() > 1_577_836_800);
    }
}
