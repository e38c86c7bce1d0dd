// src/site/factory.rs

use tracing::debug;

use crate::errors::{DaemonError, Result};

use super::{Building, BuildingKind, Category, Licence, LicenceType};

const LANGUAGES: [&str; 2] = ["Eng", "Span"];
const BRITISH_FACULTIES: [&str; 4] = ["Pharmacy", "Dentistry", "Engineering", "Economy"];
const SOHAG_FACULTIES: [&str; 4] = ["Medicine", "Pharmacy", "Computer Science", "Engineering"];

/// Construct and license a school.
///
/// Language schools come with their languages; any other school kind is
/// built as a plain public school. Licence text is `"<name> <anchor>"`.
pub fn construct_school(kind: BuildingKind, name: &str) -> Result<Building> {
    ensure_category(kind, Category::School)?;

    let (kind, languages) = match kind {
        BuildingKind::LanguageSchool => (kind, to_strings(&LANGUAGES)),
        _ => (BuildingKind::PublicSchool, Vec::new()),
    };

    let licence_type = LicenceType::School;
    let building = Building {
        name: name.to_string(),
        kind,
        spec: kind.spec(),
        licence: Licence {
            licence_type,
            text: format!("{name} {}", licence_type.anchor_number()),
        },
        languages,
        faculties: Vec::new(),
    };

    debug!(name, %kind, "school constructed");
    Ok(building)
}

/// Construct and license a university.
///
/// Anything that isn't British is built as Sohag. The licence is typed as a
/// university but numbered with the school anchor.
pub fn construct_university(kind: BuildingKind) -> Result<Building> {
    ensure_category(kind, Category::University)?;

    let (kind, faculties) = match kind {
        BuildingKind::BritishUniversity => (kind, to_strings(&BRITISH_FACULTIES)),
        _ => (BuildingKind::SohagUniversity, to_strings(&SOHAG_FACULTIES)),
    };
    let name = kind.default_name().unwrap_or_default().to_string();

    let building = Building {
        licence: Licence {
            licence_type: LicenceType::University,
            text: format!("{name} {}", LicenceType::School.anchor_number()),
        },
        name,
        kind,
        spec: kind.spec(),
        languages: Vec::new(),
        faculties,
    };

    debug!(name = %building.name, %kind, "university constructed");
    Ok(building)
}

/// The Eastwood school, built and licensed by hand instead of via the factory.
pub fn custom_eastwood() -> Building {
    let kind = BuildingKind::EastwoodSchool;
    Building {
        name: kind.default_name().unwrap_or_default().to_string(),
        kind,
        spec: kind.spec(),
        licence: Licence {
            licence_type: LicenceType::School,
            text: format!("{} : Private Custom", kind.category().type_name()),
        },
        languages: Vec::new(),
        faculties: Vec::new(),
    }
}

fn ensure_category(kind: BuildingKind, expected: Category) -> Result<()> {
    if kind.category() == expected {
        return Ok(());
    }
    let expected = match expected {
        Category::School => "school",
        Category::University => "university",
    };
    Err(DaemonError::WrongCategory {
        kind: kind.to_string(),
        expected,
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
