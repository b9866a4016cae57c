use crate::HijriDate;
use crate::civil::CivilDate;
use crate::prelude::*;

/// Hijri month names in Arabic (index 0 = Muharram)
const ARABIC_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Hijri month names in Indonesian (index 0 = Muharram)
const INDONESIAN_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulqaidah",
    "Dzulhijjah",
];

/// Hijri month names in English (index 0 = Muharram)
const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi'ul Awwal",
    "Rabi'ul Akhir",
    "Jumadal Ula",
    "Jumadal Akhira",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhul Qa'dah",
    "Dhul Hijjah",
];

/// Formatting locale for Hijri dates.
///
/// Arabic is the default; locale tags that don't resolve to a supported
/// language fall back to it rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Locale {
    #[default]
    #[display(fmt = "ar")]
    Arabic,
    #[display(fmt = "id")]
    Indonesian,
    #[display(fmt = "en")]
    English,
}

impl Locale {
    /// Resolves a locale tag (`"ar"`, `"id-ID"`, `"en_US"`, ...) by its
    /// primary subtag, case-insensitively. Unrecognized tags resolve to
    /// Arabic.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "id" => Self::Indonesian,
            "en" => Self::English,
            _ => Self::Arabic,
        }
    }

    /// The 12-entry month-name table for this locale.
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Arabic => &ARABIC_MONTH_NAMES,
            Self::Indonesian => &INDONESIAN_MONTH_NAMES,
            Self::English => &ENGLISH_MONTH_NAMES,
        }
    }

    /// The calendar-era marker appended after the year.
    const fn calendar_marker(self) -> &'static str {
        match self {
            Self::Indonesian => "H",
            Self::Arabic | Self::English => "هـ",
        }
    }
}

impl HijriDate {
    /// Month name in the given locale, or `None` when the month lies
    /// outside the 12-month table (the resolver's thirteenth-month
    /// artifact).
    pub fn month_name(&self, locale: Locale) -> Option<&'static str> {
        let index = usize::from(self.month()).checked_sub(1)?;
        locale.month_names().get(index).copied()
    }

    /// Renders the date as `"{day} {month name} {year}"` with the locale's
    /// calendar marker appended when `calendar_suffix` is set.
    ///
    /// Only Indonesian has a distinct output shape (`"... H"`); every other
    /// locale uses the default `"... هـ"` shape. Digits are not localized
    /// and fields are not padded. A month with no table entry renders as
    /// its numeral.
    pub fn format(&self, locale: Locale, calendar_suffix: bool) -> String {
        let mut out = match self.month_name(locale) {
            Some(name) => format!("{} {} {}", self.day(), name, self.year()),
            None => format!("{} {} {}", self.day(), self.month(), self.year()),
        };
        if calendar_suffix {
            out.push(' ');
            out.push_str(locale.calendar_marker());
        }
        out
    }
}

/// Converts a civil date and renders it in one step.
pub fn format_civil_as_hijri(date: &CivilDate, locale: Locale, calendar_suffix: bool) -> String {
    HijriDate::from_civil(date).format(locale, calendar_suffix)
}
