//! Localized name tables keyed by numeric index.
//!
//! Every table is indexed by the 0-based cycle index the scanner produces.
//! Lookups wrap modulo the table length, so an index can never fall off the
//! end of a table even if a cycle and its table disagree in size.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::tithi::{Paksha, paksha_for_tithi, tithi_in_paksha};

/// Language of the name tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Sanskrit transliterations, English weekday names.
    #[default]
    English,
    /// Devanagari.
    Hindi,
}

/// The cycles that carry a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleKind {
    Tithi,
    Nakshatra,
    Karana,
    Yoga,
}

#[rustfmt::skip]
const TITHI_EN: [&str; 30] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi", "Saptami",
    "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi",
    "Purnima",
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi", "Saptami",
    "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi",
    "Amavasya",
];

#[rustfmt::skip]
const TITHI_HI: [&str; 30] = [
    "प्रतिपदा", "द्वितीया", "तृतीया", "चतुर्थी", "पंचमी", "षष्ठी", "सप्तमी",
    "अष्टमी", "नवमी", "दशमी", "एकादशी", "द्वादशी", "त्रयोदशी", "चतुर्दशी",
    "पूर्णिमा",
    "प्रतिपदा", "द्वितीया", "तृतीया", "चतुर्थी", "पंचमी", "षष्ठी", "सप्तमी",
    "अष्टमी", "नवमी", "दशमी", "एकादशी", "द्वादशी", "त्रयोदशी", "चतुर्दशी",
    "अमावस्या",
];

#[rustfmt::skip]
const NAKSHATRA_EN: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu",
    "Pushya", "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra",
    "Swati", "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha",
    "Shravana", "Dhanishtha", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada",
    "Revati",
];

#[rustfmt::skip]
const NAKSHATRA_HI: [&str; 27] = [
    "अश्विनी", "भरणी", "कृत्तिका", "रोहिणी", "मृगशिरा", "आर्द्रा", "पुनर्वसु",
    "पुष्य", "आश्लेषा", "मघा", "पूर्वा फाल्गुनी", "उत्तरा फाल्गुनी", "हस्त", "चित्रा",
    "स्वाती", "विशाखा", "अनुराधा", "ज्येष्ठा", "मूल", "पूर्वाषाढ़ा", "उत्तराषाढ़ा",
    "श्रवण", "धनिष्ठा", "शतभिषा", "पूर्वा भाद्रपद", "उत्तरा भाद्रपद", "रेवती",
];

#[rustfmt::skip]
const KARANA_EN: [&str; 11] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti", "Shakuni",
    "Chatushpada", "Naga", "Kimstughna",
];

#[rustfmt::skip]
const KARANA_HI: [&str; 11] = [
    "बव", "बालव", "कौलव", "तैतिल", "गर", "वणिज", "विष्टि", "शकुनि", "चतुष्पद", "नाग",
    "किंस्तुघ्न",
];

#[rustfmt::skip]
const YOGA_EN: [&str; 27] = [
    "Vishkambha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda", "Sukarma",
    "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra",
    "Siddhi", "Vyatipata", "Variyan", "Parigha", "Shiva", "Siddha", "Sadhya", "Shubha",
    "Shukla", "Brahma", "Indra", "Vaidhriti",
];

#[rustfmt::skip]
const YOGA_HI: [&str; 27] = [
    "विष्कम्भ", "प्रीति", "आयुष्मान", "सौभाग्य", "शोभन", "अतिगण्ड", "सुकर्मा", "धृति",
    "शूल", "गण्ड", "वृद्धि", "ध्रुव", "व्याघात", "हर्षण", "वज्र", "सिद्धि", "व्यतीपात",
    "वरीयान", "परिघ", "शिव", "सिद्ध", "साध्य", "शुभ", "शुक्ल", "ब्रह्म", "इन्द्र", "वैधृति",
];

#[rustfmt::skip]
const WEEKDAY_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

#[rustfmt::skip]
const WEEKDAY_HI: [&str; 7] = [
    "रविवार", "सोमवार", "मंगलवार", "बुधवार", "गुरुवार", "शुक्रवार", "शनिवार",
];

fn lookup(table: &[&'static str], index: u8) -> &'static str {
    table[index as usize % table.len()]
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }

    /// Name of the cycle element at `index`.
    pub fn name(self, kind: CycleKind, index: u8) -> &'static str {
        let table: &[&'static str] = match (self, kind) {
            (Self::English, CycleKind::Tithi) => &TITHI_EN,
            (Self::English, CycleKind::Nakshatra) => &NAKSHATRA_EN,
            (Self::English, CycleKind::Karana) => &KARANA_EN,
            (Self::English, CycleKind::Yoga) => &YOGA_EN,
            (Self::Hindi, CycleKind::Tithi) => &TITHI_HI,
            (Self::Hindi, CycleKind::Nakshatra) => &NAKSHATRA_HI,
            (Self::Hindi, CycleKind::Karana) => &KARANA_HI,
            (Self::Hindi, CycleKind::Yoga) => &YOGA_HI,
        };
        lookup(table, index)
    }

    /// Weekday name, 0 = Sunday.
    pub fn weekday_name(self, index: u8) -> &'static str {
        match self {
            Self::English => lookup(&WEEKDAY_EN, index),
            Self::Hindi => lookup(&WEEKDAY_HI, index),
        }
    }

    /// Tithi name qualified by its paksha, e.g. "Krishna Panchami".
    ///
    /// Purnima and Amavasya already name their fortnight and are returned
    /// bare.
    pub fn tithi_full_name(self, index: u8) -> String {
        let name = self.name(CycleKind::Tithi, index);
        if tithi_in_paksha(index) == 15 {
            return name.to_string();
        }
        let paksha = match (self, paksha_for_tithi(index)) {
            (Self::English, p) => p.name(),
            (Self::Hindi, Paksha::Waxing) => "शुक्ल",
            (Self::Hindi, Paksha::Waning) => "कृष्ण",
        };
        format!("{paksha} {name}")
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            _ => Err(VedicError::UnknownLocale(s.to_string())),
        }
    }
}
