//! Career pathways and pathway sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the three career pathways a student is ranked on.
///
/// The declaration order is the fixed alternative order used by the ranking:
/// it decides both the matrix row and the tie break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jalur {
    Studi,
    Kerja,
    Wirausaha,
}

impl Jalur {
    /// All pathways in alternative order.
    pub const ALL: [Jalur; 3] = [Jalur::Studi, Jalur::Kerja, Jalur::Wirausaha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Jalur::Studi => "studi",
            Jalur::Kerja => "kerja",
            Jalur::Wirausaha => "wirausaha",
        }
    }

    /// Decision label stored on a recommendation.
    pub fn label(&self) -> &'static str {
        match self {
            Jalur::Studi => "Melanjutkan Studi",
            Jalur::Kerja => "Bekerja",
            Jalur::Wirausaha => "Berwirausaha",
        }
    }

    /// Keyword matched against alumni status when listing relevant alumni.
    pub fn alumni_keyword(&self) -> &'static str {
        match self {
            Jalur::Studi => "Kuliah",
            Jalur::Kerja => "Bekerja",
            Jalur::Wirausaha => "Wirausaha",
        }
    }

    /// Recovers the pathway from a stored decision label.
    pub fn from_label(label: &str) -> Option<Jalur> {
        Jalur::ALL.into_iter().find(|j| j.label() == label)
    }

    /// Matrix row of this pathway.
    pub fn index(&self) -> usize {
        match self {
            Jalur::Studi => 0,
            Jalur::Kerja => 1,
            Jalur::Wirausaha => 2,
        }
    }
}

impl fmt::Display for Jalur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jalur {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "studi" => Ok(Jalur::Studi),
            "kerja" => Ok(Jalur::Kerja),
            "wirausaha" => Ok(Jalur::Wirausaha),
            other => Err(ValidationError::invalid_format(
                "jalur",
                format!("unknown pathway '{}'", other),
            )),
        }
    }
}

/// A set of pathways, stored as `all` or a comma-separated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JalurSet {
    studi: bool,
    kerja: bool,
    wirausaha: bool,
}

impl JalurSet {
    pub const EMPTY: JalurSet = JalurSet {
        studi: false,
        kerja: false,
        wirausaha: false,
    };

    pub const ALL: JalurSet = JalurSet {
        studi: true,
        kerja: true,
        wirausaha: true,
    };

    pub fn of(jalur: &[Jalur]) -> Self {
        jalur.iter().fold(Self::EMPTY, |set, j| set.with(*j))
    }

    pub fn with(mut self, jalur: Jalur) -> Self {
        match jalur {
            Jalur::Studi => self.studi = true,
            Jalur::Kerja => self.kerja = true,
            Jalur::Wirausaha => self.wirausaha = true,
        }
        self
    }

    pub fn contains(&self, jalur: Jalur) -> bool {
        match jalur {
            Jalur::Studi => self.studi,
            Jalur::Kerja => self.kerja,
            Jalur::Wirausaha => self.wirausaha,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.studi || self.kerja || self.wirausaha)
    }

    pub fn is_all(&self) -> bool {
        self.studi && self.kerja && self.wirausaha
    }

    pub fn iter(&self) -> impl Iterator<Item = Jalur> + '_ {
        Jalur::ALL.into_iter().filter(move |j| self.contains(*j))
    }

    /// Parses the storage form. Empty input is the empty set.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut set = Self::EMPTY;
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("all") {
                return Ok(Self::ALL);
            }
            set = set.with(token.parse()?);
        }
        Ok(set)
    }

    /// Storage form: `all` when every pathway is present, otherwise the
    /// pathways in alternative order joined by commas.
    pub fn to_storage(&self) -> String {
        if self.is_all() {
            return "all".to_string();
        }
        self.iter().map(|j| j.as_str()).collect::<Vec<_>>().join(",")
    }
}

impl TryFrom<String> for JalurSet {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<JalurSet> for String {
    fn from(value: JalurSet) -> Self {
        value.to_storage()
    }
}

impl fmt::Display for JalurSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_storage())
    }
}
