//! First-day-of-week newtype (0 = Sunday ..= 6 = Saturday).

use chrono::Weekday;

use crate::error::CalendarError;

/// Weekdays indexed from Sunday, matching the numbering of [`WeekStart`].
pub(crate) const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The weekday a calendar week starts on.
///
/// Stored as an index in `0..=6` where Sunday is 0 and Saturday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WeekStart(u8);

impl WeekStart {
    /// Weeks starting on Sunday.
    pub const SUNDAY: Self = Self(0);
    /// Weeks starting on Monday.
    pub const MONDAY: Self = Self(1);
    /// Weeks starting on Saturday.
    pub const SATURDAY: Self = Self(6);

    /// Creates a new `WeekStart` from a weekday index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekStart`] if `index` is not in 0..=6.
    pub fn new(index: i64) -> Result<Self, CalendarError> {
        if !(0..=6).contains(&index) {
            return Err(CalendarError::InvalidWeekStart { index });
        }
        Ok(Self(index as u8))
    }

    /// Creates a `WeekStart` from a chrono [`Weekday`].
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }

    /// Returns the inner index (0..=6).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the weekday this week start names.
    pub fn weekday(self) -> Weekday {
        WEEKDAYS_FROM_SUNDAY[self.0 as usize]
    }

    /// Returns the seven weekdays of a week in display order.
    pub fn days(self) -> [Weekday; 7] {
        std::array::from_fn(|i| WEEKDAYS_FROM_SUNDAY[(self.0 as usize + i) % 7])
    }

    /// Number of days between the start of the week and `weekday`.
    pub fn offset_of(self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_sunday() + 7 - u32::from(self.0)) % 7
    }
}

impl TryFrom<i64> for WeekStart {
    type Error = CalendarError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        start.weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(WeekStart::new(0).unwrap(), WeekStart::SUNDAY);
        assert_eq!(WeekStart::new(1).unwrap(), WeekStart::MONDAY);
        assert_eq!(WeekStart::new(6).unwrap(), WeekStart::SATURDAY);
    }

    #[test]
    fn new_invalid_negative() {
        assert_eq!(
            WeekStart::new(-1).unwrap_err(),
            CalendarError::InvalidWeekStart { index: -1 }
        );
    }

    #[test]
    fn new_invalid_seven() {
        assert_eq!(
            WeekStart::new(7).unwrap_err(),
            CalendarError::InvalidWeekStart { index: 7 }
        );
    }

    #[test]
    fn default_is_sunday() {
        assert_eq!(WeekStart::default(), WeekStart::SUNDAY);
    }

    #[test]
    fn weekday_roundtrip_all() {
        for i in 0..=6 {
            let start = WeekStart::new(i).unwrap();
            assert_eq!(WeekStart::from_weekday(start.weekday()), start);
        }
    }

    #[test]
    fn days_start_at_week_start() {
        let days = WeekStart::MONDAY.days();
        assert_eq!(days[0], Weekday::Mon);
        assert_eq!(days[6], Weekday::Sun);
    }

    #[test]
    fn days_cover_every_weekday_once() {
        for i in 0..=6 {
            let mut days = WeekStart::new(i).unwrap().days().to_vec();
            days.sort_by_key(|d| d.num_days_from_sunday());
            assert_eq!(days, WEEKDAYS_FROM_SUNDAY.to_vec(), "start index {i}");
        }
    }

    #[test]
    fn offset_of() {
        assert_eq!(WeekStart::SUNDAY.offset_of(Weekday::Sun), 0);
        assert_eq!(WeekStart::SUNDAY.offset_of(Weekday::Sat), 6);
        assert_eq!(WeekStart::MONDAY.offset_of(Weekday::Sun), 6);
        assert_eq!(WeekStart::SATURDAY.offset_of(Weekday::Mon), 2);
    }

    #[test]
    fn table_integrity() {
        for (i, day) in WEEKDAYS_FROM_SUNDAY.iter().enumerate() {
            assert_eq!(day.num_days_from_sunday() as usize, i);
        }
    }
}
