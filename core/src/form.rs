//! Form field values collected by the wizard.
//!
//! [`FormState`] serializes straight into the relay payload: the use-case
//! selection and the identity block are flattened so the wire object stays
//! flat, with camelCase keys.

use serde::Serialize;
use zeroize::Zeroize;

use crate::error::{WizardError, WizardResult};
use crate::schema::{
    Field, FormSchema, IdentityFields, Location, Platform, Reliability, Role, SelectionMode, UseCase,
};
use crate::secret::SecretString;

/// Use-case selection, shaped by [`SelectionMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UseCaseSelection {
    Single {
        #[serde(rename = "useCase")]
        use_case: UseCase,
    },
    Multiple {
        #[serde(rename = "useCases")]
        use_cases: Vec<UseCase>,
    },
}

impl UseCaseSelection {
    /// Whether `use_case` is currently selected.
    pub fn contains(&self, use_case: UseCase) -> bool {
        match self {
            UseCaseSelection::Single { use_case: selected } => *selected == use_case,
            UseCaseSelection::Multiple { use_cases } => use_cases.contains(&use_case),
        }
    }

    /// Single mode selects; multiple mode adds or removes.
    pub fn toggle(&mut self, use_case: UseCase) {
        match self {
            UseCaseSelection::Single { use_case: selected } => *selected = use_case,
            UseCaseSelection::Multiple { use_cases } => {
                if let Some(pos) = use_cases.iter().position(|u| *u == use_case) {
                    use_cases.remove(pos);
                } else {
                    use_cases.push(use_case);
                }
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            UseCaseSelection::Single { .. } => false,
            UseCaseSelection::Multiple { use_cases } => use_cases.is_empty(),
        }
    }

    fn text(&self) -> String {
        match self {
            UseCaseSelection::Single { use_case } => use_case.label().to_string(),
            UseCaseSelection::Multiple { use_cases } => use_cases
                .iter()
                .map(|u| u.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Identity block, shaped by [`IdentityFields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Identity {
    Account {
        #[serde(rename = "accountName")]
        account_name: String,
    },
    Contact {
        #[serde(rename = "fullName")]
        full_name: String,
        email: String,
    },
}

/// All values entered in the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(flatten)]
    pub selection: UseCaseSelection,
    pub platform: Platform,
    pub role: Role,
    pub location: Location,
    pub reliability: Reliability,
    #[serde(flatten)]
    pub identity: Identity,
    pub server_name: String,
    pub login: String,
    pub password: SecretString,
}

impl FormState {
    /// Fresh form with the preset defaults of `schema`.
    pub fn new(schema: &FormSchema) -> Self {
        let defaults = schema.default_use_cases();
        let selection = match schema.selection {
            SelectionMode::Single => UseCaseSelection::Single {
                use_case: defaults.first().copied().unwrap_or(UseCase::ForexApi),
            },
            SelectionMode::Multiple => UseCaseSelection::Multiple { use_cases: defaults },
        };
        let identity = match schema.identity {
            IdentityFields::AccountName => Identity::Account {
                account_name: String::new(),
            },
            IdentityFields::Contact => Identity::Contact {
                full_name: String::new(),
                email: String::new(),
            },
        };

        Self {
            selection,
            platform: Platform::Mt5,
            role: Role::Subscriber,
            location: Location::London,
            reliability: Reliability::High,
            identity,
            server_name: String::new(),
            login: String::new(),
            password: SecretString::default(),
        }
    }

    /// Text value of a field, `None` if the field is not in this form.
    ///
    /// The password comes back masked; its plain value only leaves through
    /// serialization.
    pub fn text(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::UseCase => self.selection.text(),
            Field::Platform => self.platform.code().to_string(),
            Field::Location => self.location.code().to_string(),
            Field::AccountName => match &self.identity {
                Identity::Account { account_name } => account_name.clone(),
                Identity::Contact { .. } => return None,
            },
            Field::FullName => match &self.identity {
                Identity::Contact { full_name, .. } => full_name.clone(),
                Identity::Account { .. } => return None,
            },
            Field::Email => match &self.identity {
                Identity::Contact { email, .. } => email.clone(),
                Identity::Account { .. } => return None,
            },
            Field::ServerName => self.server_name.clone(),
            Field::Login => self.login.clone(),
            Field::Password => self.password.masked(),
        };
        Some(value)
    }

    /// Whether `field` is empty or missing from this form. Copies nothing.
    pub fn is_blank(&self, field: Field) -> bool {
        match (field, &self.identity) {
            (Field::UseCase, _) => self.selection.is_empty(),
            (Field::Platform | Field::Location, _) => false,
            (Field::AccountName, Identity::Account { account_name }) => account_name.is_empty(),
            (Field::FullName, Identity::Contact { full_name, .. }) => full_name.is_empty(),
            (Field::Email, Identity::Contact { email, .. }) => email.is_empty(),
            (Field::AccountName | Field::FullName | Field::Email, _) => true,
            (Field::ServerName, _) => self.server_name.is_empty(),
            (Field::Login, _) => self.login.is_empty(),
            (Field::Password, _) => self.password.is_empty(),
        }
    }

    /// Set one field from its text representation.
    ///
    /// Enumerated fields must match one of their codes. For the use case
    /// this goes through [`UseCaseSelection::toggle`].
    pub fn set(&mut self, field: Field, value: &str) -> WizardResult<()> {
        let invalid = || WizardError::InvalidChoice {
            field,
            value: value.to_string(),
        };

        match field {
            Field::UseCase => {
                let use_case = UseCase::from_label(value).ok_or_else(invalid)?;
                self.selection.toggle(use_case);
            }
            Field::Platform => self.platform = Platform::from_code(value).ok_or_else(invalid)?,
            Field::Location => self.location = Location::from_code(value).ok_or_else(invalid)?,
            Field::AccountName => match &mut self.identity {
                Identity::Account { account_name } => *account_name = value.to_string(),
                Identity::Contact { .. } => return Err(WizardError::FieldUnavailable(field)),
            },
            Field::FullName => match &mut self.identity {
                Identity::Contact { full_name, .. } => *full_name = value.to_string(),
                Identity::Account { .. } => return Err(WizardError::FieldUnavailable(field)),
            },
            Field::Email => match &mut self.identity {
                Identity::Contact { email, .. } => *email = value.to_string(),
                Identity::Account { .. } => return Err(WizardError::FieldUnavailable(field)),
            },
            Field::ServerName => self.server_name = value.to_string(),
            Field::Login => self.login = value.to_string(),
            Field::Password => self.password.set(value),
        }
        Ok(())
    }

    /// Account name or full name, whichever this form collects.
    pub fn identity_name(&self) -> &str {
        match &self.identity {
            Identity::Account { account_name } => account_name.as_str(),
            Identity::Contact { full_name, .. } => full_name.as_str(),
        }
    }

    /// Email to reply to, when one was entered.
    pub fn reply_to(&self) -> Option<&str> {
        match &self.identity {
            Identity::Contact { email, .. } if !email.is_empty() => Some(email.as_str()),
            _ => None,
        }
    }

    /// Wipe broker credentials.
    pub fn clear_sensitive(&mut self) {
        self.server_name.zeroize();
        self.login.zeroize();
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_defaults() {
        let form = FormState::new(&FormSchema::provisioning());
        assert_eq!(
            form.selection,
            UseCaseSelection::Multiple {
                use_cases: vec![UseCase::ForexApi, UseCase::RiskManagementApi]
            }
        );
        assert_eq!(form.platform, Platform::Mt5);
        assert_eq!(form.location, Location::London);
        assert_eq!(form.text(Field::AccountName).as_deref(), Some(""));
        assert_eq!(form.text(Field::Email), None);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_field_updates_are_independent() {
        let schema = FormSchema::onboarding();
        let edits = [
            (Field::UseCase, "Copy trading"),
            (Field::Platform, "MT4"),
            (Field::Location, "singapore"),
            (Field::FullName, "Jane Doe"),
            (Field::Email, "jane@x.com"),
            (Field::ServerName, "ICMarkets-Live01"),
            (Field::Login, "555111"),
            (Field::Password, "secret"),
        ];

        for (field, value) in edits {
            let before = FormState::new(&schema);
            let mut after = before.clone();
            after.set(field, value).unwrap();

            let expected = match field {
                Field::Password => "••••••",
                _ => value,
            };
            assert_eq!(after.text(field).as_deref(), Some(expected));
            for (other, _) in edits.iter().filter(|(f, _)| *f != field) {
                assert_eq!(after.text(*other), before.text(*other), "{:?} changed {:?}", field, other);
            }
        }
    }

    #[test]
    fn test_toggle_use_cases() {
        let mut form = FormState::new(&FormSchema::provisioning());
        form.set(Field::UseCase, "Forex API").unwrap();
        assert!(!form.selection.contains(UseCase::ForexApi));
        form.set(Field::UseCase, "MetaStats API").unwrap();
        assert_eq!(form.text(Field::UseCase).as_deref(), Some("Risk management API, MetaStats API"));

        let mut single = FormState::new(&FormSchema::onboarding());
        single.set(Field::UseCase, "Copy trading").unwrap();
        assert!(single.selection.contains(UseCase::CopyTrading));
        assert!(!single.selection.contains(UseCase::ForexApi));
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut form = FormState::new(&FormSchema::provisioning());
        assert_eq!(
            form.set(Field::Platform, "MT6"),
            Err(WizardError::InvalidChoice {
                field: Field::Platform,
                value: "MT6".into()
            })
        );
        assert_eq!(
            form.set(Field::Email, "a@b.c"),
            Err(WizardError::FieldUnavailable(Field::Email))
        );
        assert_eq!(form, FormState::new(&FormSchema::provisioning()));
    }

    #[test]
    fn test_login_accepts_any_text() {
        let mut form = FormState::new(&FormSchema::provisioning());
        form.set(Field::Login, "not-a-number").unwrap();
        assert_eq!(form.login, "not-a-number");
    }

    #[test]
    fn test_password_text_never_exposed() {
        let mut form = FormState::new(&FormSchema::provisioning());
        assert!(form.is_blank(Field::Password));

        form.set(Field::Password, "hunter2").unwrap();
        assert!(!form.is_blank(Field::Password));
        assert_eq!(form.text(Field::Password).as_deref(), Some("•••••••"));
        assert_eq!(form.password.expose(), "hunter2");
    }

    #[test]
    fn test_blank_fields() {
        let mut form = FormState::new(&FormSchema::onboarding());
        assert!(form.is_blank(Field::FullName));
        assert!(form.is_blank(Field::AccountName));
        assert!(!form.is_blank(Field::Platform));
        assert!(!form.is_blank(Field::UseCase));

        form.set(Field::FullName, "Jane Doe").unwrap();
        assert!(!form.is_blank(Field::FullName));

        let mut modules = FormState::new(&FormSchema::provisioning());
        modules.set(Field::UseCase, "Forex API").unwrap();
        modules.set(Field::UseCase, "Risk management API").unwrap();
        assert!(modules.is_blank(Field::UseCase));
    }

    #[test]
    fn test_clear_sensitive() {
        let mut form = FormState::new(&FormSchema::provisioning());
        form.set(Field::AccountName, "Desk").unwrap();
        form.set(Field::ServerName, "Broker-01").unwrap();
        form.set(Field::Login, "123").unwrap();
        form.set(Field::Password, "pw").unwrap();

        form.clear_sensitive();
        assert!(form.server_name.is_empty());
        assert!(form.login.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.identity_name(), "Desk");
    }

    #[test]
    fn test_reply_to_only_when_present() {
        let mut form = FormState::new(&FormSchema::onboarding());
        assert_eq!(form.reply_to(), None);
        form.set(Field::Email, "jane@x.com").unwrap();
        assert_eq!(form.reply_to(), Some("jane@x.com"));
    }
}
