// src/site/catalogue.rs

//! Constant building data keyed by [`BuildingKind`].

use super::BuildingKind;

/// Dimensions and materials of one building kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingSpec {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub bricks: u64,
    pub brick_type: &'static str,
    pub concrete: u64,
    pub concrete_type: &'static str,
    pub corners: u64,
}

const SCHOOL_BRICKS: &str = "Bricky 342";
const SCHOOL_CONCRETE: &str = "Steel A1";
const UNIVERSITY_BRICKS: &str = "Bricky 111";
const UNIVERSITY_CONCRETE: &str = "Metallic A2";

const STANDARD_SCHOOL: BuildingSpec = BuildingSpec {
    width: 300.0,
    height: 500.0,
    length: 500.0,
    bricks: 4_000,
    brick_type: SCHOOL_BRICKS,
    concrete: 300,
    concrete_type: SCHOOL_CONCRETE,
    corners: 50,
};

impl BuildingKind {
    /// Look up the constant spec for this kind.
    ///
    /// Private schools and Merit University have no plans of their own; the
    /// site builds them as a public school and as Sohag University.
    pub fn spec(self) -> BuildingSpec {
        match self {
            BuildingKind::PublicSchool
            | BuildingKind::PrivateSchool
            | BuildingKind::LanguageSchool => STANDARD_SCHOOL,
            // Public school with an extension.
            BuildingKind::EastwoodSchool => BuildingSpec {
                width: STANDARD_SCHOOL.width + 100.0,
                height: STANDARD_SCHOOL.height + 10.0,
                length: STANDARD_SCHOOL.length + 100.0,
                bricks: STANDARD_SCHOOL.bricks + 30,
                concrete: STANDARD_SCHOOL.concrete + 20,
                corners: STANDARD_SCHOOL.corners + 5,
                ..STANDARD_SCHOOL
            },
            BuildingKind::SohagUniversity | BuildingKind::MeritUniversity => BuildingSpec {
                width: 600.0,
                height: 500.0,
                length: 500.0,
                bricks: 50_000,
                brick_type: UNIVERSITY_BRICKS,
                concrete: 100_000,
                concrete_type: UNIVERSITY_CONCRETE,
                corners: 1_000,
            },
            BuildingKind::BritishUniversity => BuildingSpec {
                width: 6_000.0,
                height: 5_000.0,
                length: 5_000.0,
                bricks: 500_000,
                brick_type: UNIVERSITY_BRICKS,
                concrete: 1_000_000,
                concrete_type: UNIVERSITY_CONCRETE,
                corners: 10_000,
            },
        }
    }

    /// Name used when the factory picks it, not the caller.
    pub fn default_name(self) -> Option<&'static str> {
        match self {
            BuildingKind::EastwoodSchool => Some("Eastwood School for Boys"),
            BuildingKind::SohagUniversity => Some("Sohag University"),
            BuildingKind::BritishUniversity => Some("British University"),
            BuildingKind::PublicSchool
            | BuildingKind::PrivateSchool
            | BuildingKind::LanguageSchool
            | BuildingKind::MeritUniversity => None,
        }
    }
}
