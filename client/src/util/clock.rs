//! Calendar year for the footer copyright line.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current UTC year.
///
/// Server render and hydration both read UTC so the footer text they produce
/// agrees regardless of the reader's time zone.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
