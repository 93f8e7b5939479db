use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The six free-text columns of a directory entry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Surname,
    FirstName,
    Patronym,
    Organization,
    WorkPhone,
    MobilePhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::FirstName,
        Field::Patronym,
        Field::Organization,
        Field::WorkPhone,
        Field::MobilePhone,
    ];

    /// Key used for this field in the store file.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Surname => "Фамилия",
            Field::FirstName => "Имя",
            Field::Patronym => "Отчество",
            Field::Organization => "Организация",
            Field::WorkPhone => "Рабочий_телефон",
            Field::MobilePhone => "Сотовый_телефон",
        }
    }

    /// Human label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::FirstName => "First name",
            Field::Patronym => "Patronym",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work phone",
            Field::MobilePhone => "Mobile phone",
        }
    }
}

/// The text values of a record, without its id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub surname: String,
    pub first_name: String,
    pub patronym: String,
    pub organization: String,
    pub work_phone: String,
    pub mobile_phone: String,
}

impl RecordFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Patronym => &self.patronym,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::MobilePhone => &self.mobile_phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Surname => self.surname = value,
            Field::FirstName => self.first_name = value,
            Field::Patronym => self.patronym = value,
            Field::Organization => self.organization = value,
            Field::WorkPhone => self.work_phone = value,
            Field::MobilePhone => self.mobile_phone = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Field/value pairs in display order.
    pub fn entries(&self) -> Vec<(Field, &str)> {
        Field::ALL.iter().map(|f| (*f, self.get(*f))).collect()
    }
}

/// One directory entry as persisted in the store.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(rename = "Фамилия")]
    pub surname: String,
    #[serde(rename = "Имя")]
    pub first_name: String,
    #[serde(rename = "Отчество")]
    pub patronym: String,
    #[serde(rename = "Организация")]
    pub organization: String,
    #[serde(rename = "Рабочий_телефон")]
    pub work_phone: String,
    #[serde(rename = "Сотовый_телефон")]
    pub mobile_phone: String,
}

impl Record {
    pub fn new(id: u64, fields: RecordFields) -> Self {
        Self {
            id,
            surname: fields.surname,
            first_name: fields.first_name,
            patronym: fields.patronym,
            organization: fields.organization,
            work_phone: fields.work_phone,
            mobile_phone: fields.mobile_phone,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Patronym => &self.patronym,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::MobilePhone => &self.mobile_phone,
        }
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            surname: self.surname.clone(),
            first_name: self.first_name.clone(),
            patronym: self.patronym.clone(),
            organization: self.organization.clone(),
            work_phone: self.work_phone.clone(),
            mobile_phone: self.mobile_phone.clone(),
        }
    }

    /// Overwrites every text field; the id is untouched.
    pub fn replace_fields(&mut self, fields: RecordFields) {
        let id = self.id;
        *self = Record::new(id, fields);
    }
}

/// Per-field exact-match filter. Empty values mean "don't filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    terms: BTreeMap<Field, String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.terms.insert(field, value.into());
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.terms.insert(field, value.into());
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| value.is_empty() || record.get(*field) == value)
    }
}

impl From<RecordFields> for SearchCriteria {
    fn from(fields: RecordFields) -> Self {
        let mut criteria = SearchCriteria::new();
        for (field, value) in fields.entries() {
            criteria.set(field, value);
        }
        criteria
    }
}
