//! Declarative per-step validation.
//!
//! Each step declares a flat list of rules; validation evaluates them
//! uniformly and returns every violation in rule order, not just the first.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::draft::{ExperienceAnswer, RegistrationDraft};
use super::Step;

/// One required-field predicate with the message shown when it fails.
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    check: fn(&RegistrationDraft) -> bool,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // Basic shape check only; the backend owns real address validation.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    })
}

pub fn email_shape_ok(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

pub fn start_date_ok(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
}

const CONTACT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "firstName",
        message: "First name is required",
        check: |d| !d.first_name.trim().is_empty(),
    },
    FieldRule {
        field: "lastName",
        message: "Last name is required",
        check: |d| !d.last_name.trim().is_empty(),
    },
    FieldRule {
        field: "email",
        message: "A valid email address is required",
        check: |d| email_shape_ok(&d.email),
    },
    FieldRule {
        field: "phone",
        message: "Phone number is required",
        check: |d| !d.phone.trim().is_empty(),
    },
];

const ADDRESS_RULES: &[FieldRule] = &[
    FieldRule {
        field: "address",
        message: "Address is required",
        check: |d| !d.address.trim().is_empty(),
    },
    FieldRule {
        field: "postcode",
        message: "Postcode is required",
        check: |d| !d.postcode.trim().is_empty(),
    },
    FieldRule {
        field: "cityId",
        message: "Select a city",
        check: |d| d.city_id.trim().parse::<i64>().map(|id| id > 0).unwrap_or(false),
    },
    FieldRule {
        field: "region",
        message: "Region is required",
        check: |d| !d.region.trim().is_empty(),
    },
];

const EXPERIENCE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "experience",
        message: "Select whether you have prior experience",
        check: |d| d.experience != ExperienceAnswer::Unanswered,
    },
    FieldRule {
        field: "company",
        message: "Company is required when you have prior experience",
        check: |d| {
            d.experience != ExperienceAnswer::YesWithCompany || !d.company.trim().is_empty()
        },
    },
];

const SCHEDULE_RULES: &[FieldRule] = &[FieldRule {
    field: "startDate",
    message: "Pick a start date",
    check: |d| start_date_ok(&d.start_date),
}];

pub fn step_rules(step: Step) -> &'static [FieldRule] {
    match step {
        Step::Contact => CONTACT_RULES,
        Step::Address => ADDRESS_RULES,
        Step::Experience => EXPERIENCE_RULES,
        Step::Schedule => SCHEDULE_RULES,
    }
}

/// Evaluates only the given step's rules; returns every violation message
/// in declaration order.
pub fn validate_step(step: Step, draft: &RegistrationDraft) -> Vec<String> {
    step_rules(step)
        .iter()
        .filter(|rule| !(rule.check)(draft))
        .map(|rule| rule.message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contact_step_reports_every_violation_in_order() {
        let violations = validate_step(Step::Contact, &RegistrationDraft::default());
        assert_eq!(
            violations,
            vec![
                "First name is required",
                "Last name is required",
                "A valid email address is required",
                "Phone number is required",
            ]
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(email_shape_ok("a@b.co"));
        assert!(email_shape_ok("  amal@example.com  "));
        assert!(!email_shape_ok(""));
        assert!(!email_shape_ok("not-an-email"));
        assert!(!email_shape_ok("a@b"));
        assert!(!email_shape_ok("a b@c.de"));
    }

    #[test]
    fn city_must_be_a_positive_selection() {
        let mut draft = RegistrationDraft {
            address: "12 King Fahd Rd".to_string(),
            postcode: "11564".to_string(),
            region: "Riyadh Province".to_string(),
            ..RegistrationDraft::default()
        };
        assert_eq!(validate_step(Step::Address, &draft), vec!["Select a city"]);
        draft.city_id = "0".to_string();
        assert_eq!(validate_step(Step::Address, &draft), vec!["Select a city"]);
        draft.city_id = "3".to_string();
        assert!(validate_step(Step::Address, &draft).is_empty());
    }

    #[test]
    fn company_required_only_with_experience() {
        let mut draft = RegistrationDraft::default();
        assert_eq!(
            validate_step(Step::Experience, &draft),
            vec!["Select whether you have prior experience"]
        );

        draft.experience = ExperienceAnswer::YesWithCompany;
        assert_eq!(
            validate_step(Step::Experience, &draft),
            vec!["Company is required when you have prior experience"]
        );

        draft.company = "CleanCo".to_string();
        assert!(validate_step(Step::Experience, &draft).is_empty());

        draft.experience = ExperienceAnswer::No;
        draft.company = String::new();
        assert!(validate_step(Step::Experience, &draft).is_empty());
    }

    #[test]
    fn start_date_must_parse() {
        let mut draft = RegistrationDraft::default();
        assert_eq!(validate_step(Step::Schedule, &draft), vec!["Pick a start date"]);
        draft.start_date = "01/09/2026".to_string();
        assert_eq!(validate_step(Step::Schedule, &draft), vec!["Pick a start date"]);
        draft.start_date = "2026-09-01".to_string();
        assert!(validate_step(Step::Schedule, &draft).is_empty());
    }
}
