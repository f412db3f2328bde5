//! Person contact.

use super::contact::{ContactKind, ContactMeta};
use super::property::{Property, PropertyRegistry, NO_DATA, NO_NUMBER};
use crate::domain::{format_birthdate, parse_birthdate, Gender, ValidationError};
use chrono::NaiveDate;

/// Raw input for creating a person, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct PersonDraft {
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub gender: String,
    pub number: String,
}

/// A person in the phone book.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    surname: String,
    birthdate: Option<NaiveDate>,
    gender: Option<Gender>,
    meta: ContactMeta,
}

static PERSON_PROPERTIES: [Property<Person>; 5] = [
    Property {
        name: "name",
        label: "Name",
        placeholder: NO_DATA,
        get: Person::name_text,
        set: Person::set_name,
    },
    Property {
        name: "surname",
        label: "Surname",
        placeholder: NO_DATA,
        get: Person::surname_text,
        set: Person::set_surname,
    },
    Property {
        name: "birth",
        label: "Birth date",
        placeholder: NO_DATA,
        get: Person::birthdate_text,
        set: Person::set_birthdate,
    },
    Property {
        name: "gender",
        label: "Gender",
        placeholder: NO_DATA,
        get: Person::gender_text,
        set: Person::set_gender,
    },
    Property {
        name: "number",
        label: "Number",
        placeholder: NO_NUMBER,
        get: Person::number_text,
        set: Person::set_number,
    },
];

impl Person {
    /// Create a person, validating birth date, gender and number the same way
    /// an edit would.
    ///
    /// Rejected values are left empty and their errors returned alongside the
    /// person; the person is created either way.
    pub fn new(draft: PersonDraft) -> (Self, Vec<ValidationError>) {
        let mut person = Self {
            name: draft.name,
            surname: draft.surname,
            birthdate: None,
            gender: None,
            meta: ContactMeta::new(),
        };

        let warnings = [
            person.set_birthdate(&draft.birthdate),
            person.set_gender(&draft.gender),
            person.set_number(&draft.number),
        ]
        .into_iter()
        .flatten()
        .collect();

        (person, warnings)
    }

    /// First name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last name.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Birth date, if a valid one was given.
    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.birthdate
    }

    /// Gender, if a valid one was given.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    fn name_text(&self) -> String {
        self.name.clone()
    }

    fn surname_text(&self) -> String {
        self.surname.clone()
    }

    fn birthdate_text(&self) -> String {
        self.birthdate.as_ref().map(format_birthdate).unwrap_or_default()
    }

    fn gender_text(&self) -> String {
        self.gender.map(|g| g.code().to_string()).unwrap_or_default()
    }

    fn number_text(&self) -> String {
        self.meta.phone_text()
    }

    fn set_name(&mut self, value: &str) -> Option<ValidationError> {
        self.name = value.to_string();
        None
    }

    fn set_surname(&mut self, value: &str) -> Option<ValidationError> {
        self.surname = value.to_string();
        None
    }

    fn set_birthdate(&mut self, value: &str) -> Option<ValidationError> {
        match parse_birthdate(value) {
            Ok(date) => {
                self.birthdate = Some(date);
                None
            }
            Err(e) => {
                self.birthdate = None;
                Some(e)
            }
        }
    }

    fn set_gender(&mut self, value: &str) -> Option<ValidationError> {
        match value.parse::<Gender>() {
            Ok(gender) => {
                self.gender = Some(gender);
                None
            }
            Err(e) => {
                self.gender = None;
                Some(e)
            }
        }
    }

    fn set_number(&mut self, value: &str) -> Option<ValidationError> {
        self.meta.set_phone(value)
    }
}

impl PropertyRegistry for Person {
    const KIND: ContactKind = ContactKind::Person;

    fn properties() -> &'static [Property<Self>] {
        &PERSON_PROPERTIES
    }

    fn meta(&self) -> &ContactMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ContactMeta {
        &mut self.meta
    }

    fn label(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, UpdateOutcome};

    fn ann() -> PersonDraft {
        PersonDraft {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            birthdate: "1990-01-01".to_string(),
            gender: "F".to_string(),
            number: "+1-234-5678".to_string(),
        }
    }

    #[test]
    fn test_person_new_valid() {
        let (person, warnings) = Person::new(ann());
        assert!(warnings.is_empty());
        assert_eq!(person.name(), "Ann");
        assert_eq!(person.surname(), "Lee");
        assert_eq!(person.gender(), Some(Gender::Female));
        assert_eq!(person.birthdate(), NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(person.phone_number(), "+1-234-5678");
        assert_eq!(person.created_at(), person.edited_at());
    }

    #[test]
    fn test_person_new_collects_warnings() {
        let (person, warnings) = Person::new(PersonDraft {
            gender: "X".to_string(),
            birthdate: "someday".to_string(),
            number: "abc!!".to_string(),
            ..ann()
        });

        assert_eq!(
            warnings,
            vec![
                ValidationError::InvalidBirthdate("someday".to_string()),
                ValidationError::InvalidGender("X".to_string()),
                ValidationError::InvalidPhone("abc!!".to_string()),
            ]
        );
        assert_eq!(person.field_value("gender").unwrap(), "");
        assert_eq!(person.field_value("birth").unwrap(), "");
        assert_eq!(person.field_value("number").unwrap(), "");
        assert_eq!(person.name(), "Ann");
    }

    #[test]
    fn test_person_new_blank_birth_and_gender_warn() {
        let (person, warnings) = Person::new(PersonDraft {
            name: "A".to_string(),
            ..Default::default()
        });

        assert_eq!(
            warnings,
            vec![
                ValidationError::InvalidBirthdate(String::new()),
                ValidationError::InvalidGender(String::new()),
            ]
        );
        assert_eq!(person.birthdate(), None);
        assert_eq!(person.gender(), None);
        assert_eq!(person.phone_number(), "");
    }

    #[test]
    fn test_person_update_blank_gender_is_cleared() {
        let (mut person, _) = Person::new(ann());

        let outcome = person.update_field("gender", "").unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Cleared(ValidationError::InvalidGender(String::new()))
        );
        assert_eq!(person.gender(), None);
    }

    #[test]
    fn test_person_field_names_in_order() {
        let (person, _) = Person::new(ann());
        assert_eq!(
            person.field_names(),
            vec!["name", "surname", "birth", "gender", "number"]
        );
    }

    #[test]
    fn test_person_describe() {
        let (person, _) = Person::new(ann());
        let text = person.describe();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name: Ann");
        assert_eq!(lines[1], "Surname: Lee");
        assert_eq!(lines[2], "Birth date: 1990-01-01");
        assert_eq!(lines[3], "Gender: F");
        assert_eq!(lines[4], "Number: +1-234-5678");
        assert!(lines[5].starts_with("Time created: "));
        assert!(lines[6].starts_with("Time last edit: "));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_person_describe_placeholders() {
        let (person, _) = Person::new(PersonDraft {
            name: "Bo".to_string(),
            ..Default::default()
        });
        let text = person.describe();

        assert!(text.contains("Surname: [no data]"));
        assert!(text.contains("Birth date: [no data]"));
        assert!(text.contains("Gender: [no data]"));
        assert!(text.contains("Number: [no number]"));
    }

    #[test]
    fn test_person_search_key_and_label() {
        let (person, _) = Person::new(PersonDraft {
            gender: String::new(),
            ..ann()
        });
        assert_eq!(person.search_key(), "Ann\nLee\n1990-01-01\n\n+1-234-5678");
        assert_eq!(person.display_label(), "Ann Lee");
    }

    #[test]
    fn test_person_update_plain_field() {
        let (mut person, _) = Person::new(ann());
        let outcome = person.update_field("surname", "Park").unwrap();
        assert_eq!(outcome, UpdateOutcome::Applied);
        assert_eq!(person.surname(), "Park");
    }

    #[test]
    fn test_person_update_rejected_value_clears_field() {
        let (mut person, _) = Person::new(ann());

        let outcome = person.update_field("gender", "female").unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Cleared(ValidationError::InvalidGender("female".to_string()))
        );
        assert_eq!(person.gender(), None);

        let outcome = person.update_field("birth", "1990-02-30").unwrap();
        assert!(matches!(outcome, UpdateOutcome::Cleared(_)));
        assert_eq!(person.birthdate(), None);
    }

    #[test]
    fn test_person_update_unknown_field() {
        let (mut person, _) = Person::new(ann());
        let before = person.search_key();
        assert!(person.update_field("address", "Main St").is_err());
        assert_eq!(person.search_key(), before);
    }
}
