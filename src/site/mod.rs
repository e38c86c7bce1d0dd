// src/site/mod.rs

//! Construction site: a small building catalogue and its factory functions.
//!
//! Every building kind only differs by a handful of constants, so kinds map
//! to a [`BuildingSpec`] through a lookup table ([`catalogue`]) and the
//! factory ([`factory`]) fills a plain [`Building`] record from it.

pub mod catalogue;
pub mod factory;

use std::fmt;
use std::str::FromStr;

pub use catalogue::BuildingSpec;
pub use factory::{construct_school, construct_university, custom_eastwood};

/// Broad family a building belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    School,
    University,
}

impl Category {
    /// Category path as shown on licences, e.g. `Educational Building : School`.
    pub fn type_name(self) -> &'static str {
        match self {
            Category::School => "Educational Building : School",
            Category::University => "Educational Building : University",
        }
    }
}

/// Every building the site knows how to put up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    PublicSchool,
    PrivateSchool,
    LanguageSchool,
    EastwoodSchool,
    SohagUniversity,
    MeritUniversity,
    BritishUniversity,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 7] = [
        BuildingKind::PublicSchool,
        BuildingKind::PrivateSchool,
        BuildingKind::LanguageSchool,
        BuildingKind::EastwoodSchool,
        BuildingKind::SohagUniversity,
        BuildingKind::MeritUniversity,
        BuildingKind::BritishUniversity,
    ];

    pub fn category(self) -> Category {
        match self {
            BuildingKind::PublicSchool
            | BuildingKind::PrivateSchool
            | BuildingKind::LanguageSchool
            | BuildingKind::EastwoodSchool => Category::School,
            BuildingKind::SohagUniversity
            | BuildingKind::MeritUniversity
            | BuildingKind::BritishUniversity => Category::University,
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuildingKind::PublicSchool => "public_school",
            BuildingKind::PrivateSchool => "private_school",
            BuildingKind::LanguageSchool => "language_school",
            BuildingKind::EastwoodSchool => "eastwood_school",
            BuildingKind::SohagUniversity => "sohag_university",
            BuildingKind::MeritUniversity => "merit_university",
            BuildingKind::BritishUniversity => "british_university",
        };
        f.write_str(s)
    }
}

impl FromStr for BuildingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        BuildingKind::ALL
            .into_iter()
            .find(|k| k.to_string() == wanted)
            .ok_or_else(|| format!("unknown building kind: {s}"))
    }
}

/// Licence categories and their anchor numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenceType {
    School,
    University,
    Hospital,
    Station,
}

impl LicenceType {
    pub fn anchor_number(self) -> u32 {
        match self {
            LicenceType::School => 500,
            LicenceType::University => 600,
            LicenceType::Hospital => 750,
            LicenceType::Station => 123,
        }
    }
}

/// Licence issued to a constructed building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Licence {
    pub licence_type: LicenceType,
    pub text: String,
}

/// A constructed, licensed building.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: String,
    pub kind: BuildingKind,
    pub spec: BuildingSpec,
    pub licence: Licence,
    /// Languages taught (language schools only).
    pub languages: Vec<String>,
    /// Faculties offered (universities only).
    pub faculties: Vec<String>,
}

impl Building {
    pub fn type_name(&self) -> &'static str {
        self.kind.category().type_name()
    }
}
