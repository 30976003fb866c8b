//! Registration draft and its submission payload.
//!
//! The draft mirrors the wizard's inputs verbatim (select values stay
//! strings); [`RegistrationDraft::to_payload`] does the coercion the backend
//! expects: numeric city id, integer experience flag, default coordinates,
//! trimmed optionals.

use serde::{Deserialize, Serialize};

/// Geocoordinate defaults used when the provider leaves them blank
/// (Riyadh city center).
pub const DEFAULT_LAT: &str = "24.7136";
pub const DEFAULT_LANG: &str = "46.6753";

/// A selectable city option from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Built-in city list used when the city provider is unavailable, so the
/// address step stays usable.
const FALLBACK_CITY_NAMES: [(i64, &str); 6] = [
    (1, "Riyadh"),
    (2, "Jeddah"),
    (3, "Dammam"),
    (4, "Mecca"),
    (5, "Medina"),
    (6, "Khobar"),
];

pub fn fallback_cities() -> Vec<City> {
    FALLBACK_CITY_NAMES
        .iter()
        .map(|&(id, name)| City { id, name: name.to_string() })
        .collect()
}

/// Replaces an unavailable or empty fetch result with the built-in list.
pub fn cities_or_fallback(fetched: Option<Vec<City>>) -> Vec<City> {
    match fetched {
        Some(cities) if !cities.is_empty() => cities,
        _ => fallback_cities(),
    }
}

/// Tri-state answer to the prior-experience question on step 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExperienceAnswer {
    #[default]
    Unanswered,
    YesWithCompany,
    No,
}

/// In-progress state of the provider-onboarding form. Owned exclusively by
/// the wizard instance; discarded after a successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationDraft {
    // Step 1: contact
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    // Step 2: address
    pub address: String,
    pub postcode: String,
    pub city_id: String,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
    // Step 3: experience
    pub experience: ExperienceAnswer,
    pub company: String,
    // Step 4: schedule
    pub start_date: String,
}

/// Payload shape the registration endpoint expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postcode: String,
    pub city_id: i64,
    pub region: String,
    #[serde(rename = "lat")]
    pub latitude: String,
    // The backend's field really is spelled "lang".
    #[serde(rename = "lang")]
    pub longitude: String,
    pub has_experience: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub start_date: String,
}

impl RegistrationDraft {
    /// Transforms the draft into the endpoint payload.
    pub fn to_payload(&self) -> RegistrationPayload {
        let opt = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
        };
        RegistrationPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            city_id: self.city_id.trim().parse().unwrap_or(0),
            region: self.region.trim().to_string(),
            latitude: opt(&self.latitude).unwrap_or_else(|| DEFAULT_LAT.to_string()),
            longitude: opt(&self.longitude).unwrap_or_else(|| DEFAULT_LANG.to_string()),
            has_experience: i64::from(self.experience == ExperienceAnswer::YesWithCompany),
            company: match self.experience {
                ExperienceAnswer::YesWithCompany => opt(&self.company),
                _ => None,
            },
            start_date: self.start_date.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: " Amal ".to_string(),
            last_name: "Hassan".to_string(),
            email: "amal@example.com".to_string(),
            phone: "+966500000001".to_string(),
            address: "12 King Fahd Rd".to_string(),
            postcode: "11564".to_string(),
            city_id: "1".to_string(),
            region: "Riyadh Province".to_string(),
            latitude: String::new(),
            longitude: String::new(),
            experience: ExperienceAnswer::YesWithCompany,
            company: "CleanCo".to_string(),
            start_date: "2026-09-01".to_string(),
        }
    }

    #[test]
    fn payload_coerces_city_id_and_experience_flag() {
        let payload = full_draft().to_payload();
        assert_eq!(payload.city_id, 1);
        assert_eq!(payload.has_experience, 1);
        assert_eq!(payload.company.as_deref(), Some("CleanCo"));
        assert_eq!(payload.first_name, "Amal");
    }

    #[test]
    fn payload_defaults_blank_coordinates() {
        let payload = full_draft().to_payload();
        assert_eq!(payload.latitude, DEFAULT_LAT);
        assert_eq!(payload.longitude, DEFAULT_LANG);

        let mut draft = full_draft();
        draft.latitude = " 21.5 ".to_string();
        draft.longitude = "39.2".to_string();
        let payload = draft.to_payload();
        assert_eq!(payload.latitude, "21.5");
        assert_eq!(payload.longitude, "39.2");
    }

    #[test]
    fn payload_drops_company_without_experience() {
        let mut draft = full_draft();
        draft.experience = ExperienceAnswer::No;
        let payload = draft.to_payload();
        assert_eq!(payload.has_experience, 0);
        assert_eq!(payload.company, None);
    }

    #[test]
    fn payload_serializes_backend_field_names() {
        let raw = serde_json::to_string(&full_draft().to_payload()).unwrap();
        assert!(raw.contains("\"cityId\":1"));
        assert!(raw.contains("\"lat\""));
        assert!(raw.contains("\"lang\""));
        assert!(raw.contains("\"hasExperience\":1"));
    }

    #[test]
    fn unparseable_city_id_coerces_to_zero() {
        let mut draft = full_draft();
        draft.city_id = String::new();
        assert_eq!(draft.to_payload().city_id, 0);
    }

    #[test]
    fn fallback_kicks_in_when_provider_unavailable() {
        let fetched = vec![City { id: 9, name: "Abha".to_string() }];
        assert_eq!(cities_or_fallback(Some(fetched.clone())), fetched);

        let names: Vec<String> = cities_or_fallback(None).into_iter().map(|c| c.name).collect();
        assert!(names.contains(&"Riyadh".to_string()));

        let names: Vec<String> = cities_or_fallback(Some(Vec::new()))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert!(names.contains(&"Riyadh".to_string()));
    }
}
