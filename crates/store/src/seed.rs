//! Demonstration records for a fresh store.
//!
//! Eight cases covering both statuses and a spread of tags, so the
//! dashboard has something to list, filter, and page through before
//! any submission happens. Officer entries are derived from the office
//! list with deterministic ids.

use casedesk_core::case::{Case, CaseStatus, Office, Officer};
use casedesk_core::types::{CaseId, Timestamp};

const AVATAR_HOMICIDE: &str = "https://images.unsplash.com/photo-1491528323818-fdd1faba62cc?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_INTEL: &str = "https://images.unsplash.com/photo-1550525811-e5869dd03032?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_NARCOTICS: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2.25&w=256&h=256&q=80";
const AVATAR_FRAUD: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_INTEGRITY: &str = "https://images.unsplash.com/photo-1566492031773-4f4e44671857?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_MAJOR_CRIMES: &str = "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_ART_THEFT: &str = "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_ARSON: &str = "https://images.unsplash.com/photo-1552058544-f2b08422138a?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

/// Build the demonstration collection, newest case first.
pub fn seed_cases() -> Vec<Case> {
    let mut cases = vec![
        seed_case(
            1,
            "Downtown Robbery",
            &["Casualties", "Violent"],
            "Armed robbery at downtown bank with two casualties",
            CaseStatus::Active,
            "2023-06-15T09:30:00Z",
            &[
                ("Homicide Unit", AVATAR_HOMICIDE),
                ("Intelligence Division", AVATAR_INTEL),
            ],
        ),
        seed_case(
            2,
            "Harbor Drug Bust",
            &["Narcotics", "International"],
            "Major international drug smuggling operation at the harbor",
            CaseStatus::Inactive,
            "2023-05-22T14:45:00Z",
            &[("Narcotics Division", AVATAR_NARCOTICS)],
        ),
        seed_case(
            3,
            "City Hall Corruption",
            &["Corruption", "Fraud"],
            "Investigation into alleged corruption at city hall",
            CaseStatus::Inactive,
            "2023-04-18T11:20:00Z",
            &[
                ("Fraud Division", AVATAR_FRAUD),
                ("Public Integrity Unit", AVATAR_INTEGRITY),
            ],
        ),
        seed_case(
            4,
            "Museum Heist",
            &["Theft", "Organized Crime"],
            "Sophisticated theft of valuable artifacts from the National Museum",
            CaseStatus::Active,
            "2023-06-02T08:15:00Z",
            &[
                ("Major Crimes Unit", AVATAR_MAJOR_CRIMES),
                ("Art Theft Division", AVATAR_ART_THEFT),
            ],
        ),
        seed_case(
            5,
            "Serial Arsonist",
            &["Casualties", "Arson"],
            "Investigation into series of suspicious fires in the downtown area",
            CaseStatus::Active,
            "2023-05-28T19:45:00Z",
            &[("Arson Investigation Unit", AVATAR_ARSON)],
        ),
        seed_case(
            6,
            "University Hacking",
            &["Cyber Crime", "Data Breach"],
            "Breach of university systems with sensitive student data compromised",
            CaseStatus::Active,
            "2023-06-10T13:30:00Z",
            &[
                ("Cyber Crimes Unit", AVATAR_HOMICIDE),
                ("Intelligence Division", AVATAR_INTEL),
            ],
        ),
        seed_case(
            7,
            "Pharmacy Robberies",
            &["Theft", "Narcotics", "Casualties"],
            "Series of armed robberies targeting pharmacies for prescription drugs",
            CaseStatus::Active,
            "2023-06-08T22:15:00Z",
            &[
                ("Robbery Division", AVATAR_NARCOTICS),
                ("Narcotics Division", AVATAR_FRAUD),
            ],
        ),
        seed_case(
            8,
            "Waterfront Murder",
            &["Casualties", "Homicide", "Organized Crime"],
            "Body discovered at the waterfront with suspected ties to organized crime",
            CaseStatus::Inactive,
            "2023-05-15T07:40:00Z",
            &[
                ("Homicide Unit", AVATAR_HOMICIDE),
                ("Organized Crime Unit", AVATAR_INTEL),
            ],
        ),
    ];

    // Store invariant: newest record first.
    cases.reverse();
    cases
}

fn seed_case(
    id: CaseId,
    name: &str,
    tags: &[&str],
    summary: &str,
    status: CaseStatus,
    report_time: &str,
    offices: &[(&str, &str)],
) -> Case {
    let offices: Vec<Office> = offices
        .iter()
        .map(|(name, avatar)| Office {
            name: name.to_string(),
            avatar_url: avatar.to_string(),
        })
        .collect();

    // Derived display officers, one per office, deterministic ids.
    let officers: Vec<Officer> = offices
        .iter()
        .enumerate()
        .map(|(i, office)| Officer {
            id: id * 100 + i as CaseId,
            name: office.name.clone(),
            avatar_url: Some(office.avatar_url.clone()),
            department: Some("Department".to_string()),
        })
        .collect();

    Case {
        id,
        name: name.to_string(),
        description: Some(format!("Case #{id} investigation details")),
        summary: Some(summary.to_string()),
        summary_url: Some(format!("/cases/{id}")),
        report_time: parse_ts(report_time),
        status,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        offices,
        officers: Some(officers),
        officer_name: None,
        officer_avatar: None,
        department: None,
    }
}

fn parse_ts(s: &str) -> Timestamp {
    s.parse().expect("seed timestamps are valid RFC 3339")
}
