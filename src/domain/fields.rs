//! Field model for one prompt-generation request.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// The eight free-text fields of a [`FieldSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Domain,
    Specialization,
    SpecificGoal,
    Details,
    Constraints,
    Format,
    Structure,
    UnwantedResult,
}

impl ScalarField {
    /// All scalar fields in form order.
    pub const ALL: [ScalarField; 8] = [
        ScalarField::Domain,
        ScalarField::Specialization,
        ScalarField::SpecificGoal,
        ScalarField::Details,
        ScalarField::Constraints,
        ScalarField::Format,
        ScalarField::Structure,
        ScalarField::UnwantedResult,
    ];

    /// Wire key used in field maps and fields files.
    pub fn key(&self) -> &'static str {
        match self {
            ScalarField::Domain => "domain",
            ScalarField::Specialization => "specialization",
            ScalarField::SpecificGoal => "specificGoal",
            ScalarField::Details => "details",
            ScalarField::Constraints => "constraints",
            ScalarField::Format => "format",
            ScalarField::Structure => "structure",
            ScalarField::UnwantedResult => "unwantedResult",
        }
    }

    /// Parse a field from its wire key. Snake-case spellings are accepted too.
    pub fn from_key(key: &str) -> Option<ScalarField> {
        match key.trim() {
            "domain" => Some(ScalarField::Domain),
            "specialization" => Some(ScalarField::Specialization),
            "specificGoal" | "specific_goal" => Some(ScalarField::SpecificGoal),
            "details" => Some(ScalarField::Details),
            "constraints" => Some(ScalarField::Constraints),
            "format" => Some(ScalarField::Format),
            "structure" => Some(ScalarField::Structure),
            "unwantedResult" | "unwanted_result" => Some(ScalarField::UnwantedResult),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Wire key of the action list.
pub const ACTION_KEY: &str = "action";

/// Kind of an [`ActionStep`]; selects the verb rendered in the action block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ActionKind {
    /// Real-time web search.
    #[default]
    Search,
    /// Knowledge or literature lookup on a topic.
    Lookup,
    /// Read a specific web page.
    Browse,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Search, ActionKind::Lookup, ActionKind::Browse];

    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Search => "Search",
            ActionKind::Lookup => "Lookup",
            ActionKind::Browse => "Browse",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ActionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" => Ok(ActionKind::Search),
            "lookup" => Ok(ActionKind::Lookup),
            "browse" => Ok(ActionKind::Browse),
            _ => Err(AppError::InvalidActionKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for ActionKind {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One typed, user-supplied instruction in the action block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionStep {
    #[serde(default, alias = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub value: String,
}

impl ActionStep {
    pub fn new(kind: ActionKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed_value(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed_value().is_empty()
    }
}

/// All user-supplied values for one request.
///
/// Missing or null keys deserialize as blank values and unrecognized keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSet {
    #[serde(deserialize_with = "null_as_empty")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub specialization: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub specific_goal: String,
    #[serde(deserialize_with = "deserialize_actions")]
    pub action: Vec<ActionStep>,
    #[serde(deserialize_with = "null_as_empty")]
    pub details: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub constraints: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub format: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub structure: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub unwanted_result: String,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from key/value pairs, ignoring unrecognized keys.
    ///
    /// The `action` key takes newline-separated text; each non-blank line
    /// becomes a `Search` step.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        for (key, value) in pairs {
            fields.apply(key.as_ref(), value);
        }
        fields
    }

    /// Assign a value by wire key. Returns `false` when the key is not recognized.
    pub fn apply(&mut self, key: &str, value: impl Into<String>) -> bool {
        if key.trim() == ACTION_KEY {
            self.action.extend(actions_from_text(&value.into()));
            return true;
        }
        match ScalarField::from_key(key) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Builder-style scalar assignment.
    pub fn with(mut self, field: ScalarField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder-style action append.
    pub fn with_action(mut self, kind: ActionKind, value: impl Into<String>) -> Self {
        self.action.push(ActionStep::new(kind, value));
        self
    }

    pub fn get(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Domain => &self.domain,
            ScalarField::Specialization => &self.specialization,
            ScalarField::SpecificGoal => &self.specific_goal,
            ScalarField::Details => &self.details,
            ScalarField::Constraints => &self.constraints,
            ScalarField::Format => &self.format,
            ScalarField::Structure => &self.structure,
            ScalarField::UnwantedResult => &self.unwanted_result,
        }
    }

    pub fn set(&mut self, field: ScalarField, value: impl Into<String>) {
        let slot = match field {
            ScalarField::Domain => &mut self.domain,
            ScalarField::Specialization => &mut self.specialization,
            ScalarField::SpecificGoal => &mut self.specific_goal,
            ScalarField::Details => &mut self.details,
            ScalarField::Constraints => &mut self.constraints,
            ScalarField::Format => &mut self.format,
            ScalarField::Structure => &mut self.structure,
            ScalarField::UnwantedResult => &mut self.unwanted_result,
        };
        *slot = value.into();
    }

    /// Trimmed value of a scalar field, or `None` when it is blank.
    pub fn filled(&self, field: ScalarField) -> Option<&str> {
        let value = self.get(field).trim();
        (!value.is_empty()).then_some(value)
    }

    /// Action steps with a non-blank value, in input order.
    pub fn filled_actions(&self) -> impl Iterator<Item = &ActionStep> {
        self.action.iter().filter(|step| !step.is_blank())
    }
}

fn actions_from_text(text: &str) -> Vec<ActionStep> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| ActionStep::new(ActionKind::Search, line.trim()))
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts the shapes the form has produced for `action` over time.
#[derive(Deserialize)]
#[serde(untagged)]
enum ActionInput {
    List(Vec<ActionEntry>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ActionEntry {
    Step(RawActionStep),
    Text(String),
}

/// Step with its kind still as text, so a bad kind is reported by name
/// instead of as an untagged-enum mismatch.
#[derive(Deserialize)]
struct RawActionStep {
    #[serde(default, alias = "type")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    value: String,
}

impl RawActionStep {
    fn into_step(self) -> Result<ActionStep, AppError> {
        let kind = match self.kind {
            Some(kind) => kind.parse()?,
            None => ActionKind::default(),
        };
        Ok(ActionStep::new(kind, self.value))
    }
}

fn deserialize_actions<'de, D>(deserializer: D) -> Result<Vec<ActionStep>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<ActionInput>::deserialize(deserializer)?;
    match input {
        None => Ok(Vec::new()),
        Some(ActionInput::Text(text)) => Ok(actions_from_text(&text)),
        Some(ActionInput::List(entries)) => entries
            .into_iter()
            .map(|entry| match entry {
                ActionEntry::Step(raw) => raw.into_step().map_err(D::Error::custom),
                ActionEntry::Text(value) => Ok(ActionStep::new(ActionKind::Search, value)),
            })
            .collect(),
    }
}
