/// Julian Day of 1 Muharram, year 1 AH (Islamic civil epoch)
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;

/// Julian Day of 1 January, year 1 CE (proleptic Gregorian epoch)
pub const CIVIL_EPOCH: f64 = 1_721_425.5;

/// Length of the 30-year tabular Hijri cycle in days
pub const DAYS_PER_CYCLE: i64 = 10_631;

/// Hijri years per tabular cycle
pub const YEARS_PER_CYCLE: i64 = 30;

/// Mean length of a Hijri year across the 30-year cycle, in days
pub const MEAN_HIJRI_YEAR: f64 = 354.367;

/// Maximum valid civil year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (both calendars have 12)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for rollovers
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Month number for Muharram
pub const MUHARRAM: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Hijri month under the tabular scheme (index 0 = Muharram).
/// Odd months have 30 days, even months 29; the occasional leap-day
/// adjustment to Dhu al-Hijjah used by the true Umm-al-Qura calendar is
/// not applied.
pub const HIJRI_MONTH_LENGTHS: [u8; 12] = [
    30, // Muharram
    29, // Safar
    30, // Rabi' al-Awwal
    29, // Rabi' al-Thani
    30, // Jumada al-Ula
    29, // Jumada al-Akhira
    30, // Rajab
    29, // Sha'ban
    30, // Ramadan
    29, // Shawwal
    30, // Dhu al-Qi'dah
    29, // Dhu al-Hijjah
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
