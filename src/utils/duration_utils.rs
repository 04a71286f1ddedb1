use regex::Regex;
use std::sync::LazyLock;

static ISO8601_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("duration pattern is valid")
});

/// Splits an ISO-8601 duration such as `PT1H2M3S` or `P1DT4M` into
/// `(days, hours, minutes, seconds)`. Weeks are folded into days.
///
/// Returns `None` for anything the API would not send: fractional values,
/// years/months, a designator with no components (`P`, `PT`), or a total
/// that does not fit in `u64` seconds.
pub fn parse_iso8601_duration(value: &str) -> Option<(u64, u64, u64, u64)> {
    let captures = ISO8601_DURATION.captures(value)?;

    let mut any = false;
    let mut component = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => {
                any = true;
                m.as_str().parse::<u64>().ok()
            }
            None => Some(0),
        }
    };

    let weeks = component(1)?;
    let days = component(2)?;
    let hours = component(3)?;
    let minutes = component(4)?;
    let seconds = component(5)?;

    if !any {
        return None;
    }

    let days = weeks.checked_mul(7)?.checked_add(days)?;
    // total seconds must be representable
    days.checked_mul(24)?
        .checked_add(hours)?
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(60)?
        .checked_add(seconds)?;

    Some((days, hours, minutes, seconds))
}
