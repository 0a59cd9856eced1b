//! Field schema shared by both wizard variants.
//!
//! The onboarding form shipped in two shapes: a provisioning form with a
//! multi-select module list and an account name, and a later signup form
//! with a single use case, a contact identity and required-field gating.
//! [`FormSchema`] describes either shape so the state machine has one
//! implementation.

use serde::Serialize;

// =============================================================================
// Enumerated Choices
// =============================================================================

/// MetaTrader platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "MT4")]
    Mt4,
    #[serde(rename = "MT5")]
    Mt5,
}

impl Platform {
    /// Display order.
    pub const ALL: [Platform; 2] = [Platform::Mt4, Platform::Mt5];

    /// Wire and display value.
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Mt4 => "MT4",
            Platform::Mt5 => "MT5",
        }
    }

    /// Exact, case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Hosting region for the provisioned server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    London,
    NewYork,
    Singapore,
    Frankfurt,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::London,
        Location::NewYork,
        Location::Singapore,
        Location::Frankfurt,
    ];

    /// Wire value, also shown (uppercased) on the summary.
    pub fn code(&self) -> &'static str {
        match self {
            Location::London => "london",
            Location::NewYork => "new-york",
            Location::Singapore => "singapore",
            Location::Frankfurt => "frankfurt",
        }
    }

    /// Option label in the region picker.
    pub fn label(&self) -> &'static str {
        match self {
            Location::London => "London (Recommended)",
            Location::NewYork => "New York",
            Location::Singapore => "Singapore",
            Location::Frankfurt => "Frankfurt",
        }
    }

    /// Inverse of [`Location::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Product module the customer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UseCase {
    #[serde(rename = "Forex API")]
    ForexApi,
    #[serde(rename = "Copy trading")]
    CopyTrading,
    #[serde(rename = "Risk management API")]
    RiskManagementApi,
    #[serde(rename = "MetaStats API")]
    MetaStatsApi,
}

impl UseCase {
    pub const ALL: [UseCase; 4] = [
        UseCase::ForexApi,
        UseCase::CopyTrading,
        UseCase::RiskManagementApi,
        UseCase::MetaStatsApi,
    ];

    /// Wire and display value.
    pub fn label(&self) -> &'static str {
        match self {
            UseCase::ForexApi => "Forex API",
            UseCase::CopyTrading => "Copy trading",
            UseCase::RiskManagementApi => "Risk management API",
            UseCase::MetaStatsApi => "MetaStats API",
        }
    }

    /// Inverse of [`UseCase::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Infrastructure tier. Only one is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Reliability {
    #[default]
    High,
}

impl Reliability {
    /// Tier card heading.
    pub fn label(&self) -> &'static str {
        "High Reliability"
    }

    pub fn description(&self) -> &'static str {
        "Redundant infrastructure for 24/7 production workloads."
    }
}

/// Account role attached to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Role {
    #[default]
    Subscriber,
}

// =============================================================================
// Field Identifiers
// =============================================================================

/// Every user-editable field across both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UseCase,
    Platform,
    Location,
    AccountName,
    FullName,
    Email,
    ServerName,
    Login,
    Password,
}

impl Field {
    /// Key of the field in the relay payload.
    pub fn key(&self) -> &'static str {
        match self {
            Field::UseCase => "useCase",
            Field::Platform => "platform",
            Field::Location => "location",
            Field::AccountName => "accountName",
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::ServerName => "serverName",
            Field::Login => "login",
            Field::Password => "password",
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Single or multiple use-case selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// One use case, sent as `useCase`.
    Single,
    /// A set of modules, sent as `useCases`.
    Multiple,
}

/// How the customer identifies themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityFields {
    /// Dashboard account name only.
    AccountName,
    /// Full name and email; the email becomes the reply-to address.
    Contact,
}

/// Subject line shape for the relay message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectStyle {
    /// `NEW DEPLOYMENT REQUEST: {identity} ({platform})`
    DeploymentRequest,
    /// `{product} ONBOARDING: {identity} ({platform})`
    Onboarding,
}

/// Field set definition of a wizard variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub selection: SelectionMode,
    /// Identity fields shown on the credentials step.
    pub identity: IdentityFields,
    /// Disable submit while any required field is empty.
    pub gate_required: bool,
    /// Relay subject line.
    pub subject: SubjectStyle,
}

impl FormSchema {
    /// Provisioning variant: module multi-select, account name, no gating.
    pub const fn provisioning() -> Self {
        Self {
            selection: SelectionMode::Multiple,
            identity: IdentityFields::AccountName,
            gate_required: false,
            subject: SubjectStyle::DeploymentRequest,
        }
    }

    /// Signup variant: single use case, name and email, gated submit.
    pub const fn onboarding() -> Self {
        Self {
            selection: SelectionMode::Single,
            identity: IdentityFields::Contact,
            gate_required: true,
            subject: SubjectStyle::Onboarding,
        }
    }

    /// Whether this variant shows `field` at all.
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::AccountName => self.identity == IdentityFields::AccountName,
            Field::FullName | Field::Email => self.identity == IdentityFields::Contact,
            _ => true,
        }
    }

    /// Fields that must be non-empty before submit is enabled.
    pub fn required_fields(&self) -> &'static [Field] {
        if !self.gate_required {
            return &[];
        }
        match self.identity {
            IdentityFields::Contact => &[Field::FullName, Field::Email, Field::ServerName],
            IdentityFields::AccountName => &[Field::AccountName, Field::ServerName],
        }
    }

    /// Use cases preselected when the form opens.
    pub fn default_use_cases(&self) -> Vec<UseCase> {
        match self.selection {
            SelectionMode::Single => vec![UseCase::ForexApi],
            SelectionMode::Multiple => vec![UseCase::ForexApi, UseCase::RiskManagementApi],
        }
    }

    /// `_subject` of the relay message.
    pub fn subject_line(&self, product: &str, identity: &str, platform: Platform) -> String {
        match self.subject {
            SubjectStyle::DeploymentRequest => {
                format!("NEW DEPLOYMENT REQUEST: {} ({})", identity, platform.code())
            }
            SubjectStyle::Onboarding => {
                format!("{} ONBOARDING: {} ({})", product, identity, platform.code())
            }
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::provisioning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        assert_eq!(Platform::from_code("MT4"), Some(Platform::Mt4));
        assert_eq!(Platform::from_code("mt4"), None);
        assert_eq!(Location::from_code("new-york"), Some(Location::NewYork));
        assert_eq!(Location::from_code("paris"), None);
        assert_eq!(UseCase::from_label("MetaStats API"), Some(UseCase::MetaStatsApi));
    }

    #[test]
    fn test_serialized_values_match_codes() {
        assert_eq!(serde_json::to_value(Platform::Mt5).unwrap(), "MT5");
        assert_eq!(serde_json::to_value(Location::NewYork).unwrap(), "new-york");
        assert_eq!(serde_json::to_value(UseCase::CopyTrading).unwrap(), "Copy trading");
        assert_eq!(serde_json::to_value(Reliability::High).unwrap(), "High");
        assert_eq!(serde_json::to_value(Role::Subscriber).unwrap(), "Subscriber");
    }

    #[test]
    fn test_variant_field_sets() {
        let provisioning = FormSchema::provisioning();
        assert!(provisioning.has_field(Field::AccountName));
        assert!(!provisioning.has_field(Field::Email));
        assert!(provisioning.required_fields().is_empty());

        let onboarding = FormSchema::onboarding();
        assert!(onboarding.has_field(Field::FullName));
        assert!(!onboarding.has_field(Field::AccountName));
        assert_eq!(
            onboarding.required_fields(),
            &[Field::FullName, Field::Email, Field::ServerName]
        );
    }

    #[test]
    fn test_subject_lines() {
        let subject = FormSchema::provisioning().subject_line("SHUSH.CASH", "Desk 1", Platform::Mt5);
        assert_eq!(subject, "NEW DEPLOYMENT REQUEST: Desk 1 (MT5)");

        let subject = FormSchema::onboarding().subject_line("SHUSH.CASH", "Jane Doe", Platform::Mt4);
        assert_eq!(subject, "SHUSH.CASH ONBOARDING: Jane Doe (MT4)");
    }
}
