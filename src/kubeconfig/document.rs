//! In-memory kubeconfig model.
//!
//! Only `current-context` and `contexts[].name` drive behavior. Every struct keeps a
//! flattened `extra` map so keys this crate does not model are written back untouched.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

/// Root of a kubeconfig file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion", default, deserialize_with = "scalar_as_string")]
    pub api_version: String,

    #[serde(default, deserialize_with = "scalar_as_string")]
    pub kind: String,

    #[serde(
        rename = "current-context",
        default,
        deserialize_with = "scalar_as_string"
    )]
    pub current_context: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<NamedAuthInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Mapping>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedContext {
    #[serde(deserialize_with = "scalar_as_string")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub context: ContextInfo,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextInfo {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub cluster: String,

    #[serde(default, deserialize_with = "scalar_as_string")]
    pub user: String,

    #[serde(
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub namespace: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedCluster {
    #[serde(deserialize_with = "scalar_as_string")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: ClusterInfo,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterInfo {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub server: String,

    #[serde(
        rename = "certificate-authority",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_authority: Option<String>,

    #[serde(
        rename = "certificate-authority-data",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_authority_data: Option<String>,

    #[serde(
        rename = "insecure-skip-tls-verify",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub insecure_skip_tls_verify: bool,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedAuthInfo {
    #[serde(deserialize_with = "scalar_as_string")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user: AuthInfo,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Credentials for one user entry. `auth-provider` is carried as an opaque map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthInfo {
    #[serde(
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<String>,

    #[serde(
        rename = "client-certificate",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_certificate: Option<String>,

    #[serde(
        rename = "client-key",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_key: Option<String>,

    #[serde(
        rename = "client-certificate-data",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_certificate_data: Option<String>,

    #[serde(
        rename = "client-key-data",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_key_data: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecConfig>,

    #[serde(
        rename = "auth-provider",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_provider: Option<Mapping>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Exec credential plugin settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecConfig {
    #[serde(
        rename = "apiVersion",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_version: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub command: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalars_as_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub args: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<ExecEnvVar>,

    #[serde(
        rename = "interactiveMode",
        default,
        deserialize_with = "optional_scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub interactive_mode: Option<String>,

    #[serde(
        rename = "provideClusterInfo",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub provide_cluster_info: bool,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecEnvVar {
    #[serde(deserialize_with = "scalar_as_string")]
    pub name: String,

    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: String,
}

impl Kubeconfig {
    /// Active context name, or `None` when `current-context` is empty.
    ///
    /// The value is returned as written even if no context carries that name.
    pub fn current_context(&self) -> Option<&str> {
        if self.current_context.is_empty() {
            None
        } else {
            Some(self.current_context.as_str())
        }
    }

    /// Context names in document order.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(|c| c.name.as_str())
    }

    /// First context whose name equals `name` exactly (case-sensitive).
    pub fn find_context(&self, name: &str) -> Option<&NamedContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn set_current_context(&mut self, name: &str) {
        self.current_context = name.to_string();
    }
}

/// Several tools write `contexts: null` or `current-context: null` for empty values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Plain scalars such as `2024` or `true` decode as YAML numbers and booleans;
/// string fields take them as their text. Null reads as empty.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_scalar_as_string(deserializer)?.unwrap_or_default())
}

fn optional_scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text(Value::deserialize(deserializer)?).map_err(D::Error::custom)
}

fn scalars_as_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|value| scalar_text(value).map(Option::unwrap_or_default))
        .collect::<Result<_, _>>()
        .map_err(D::Error::custom)
}

fn scalar_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Tagged(tagged) => scalar_text(tagged.value),
        Value::Sequence(_) => Err("invalid type: sequence, expected a string".to_string()),
        Value::Mapping(_) => Err("invalid type: map, expected a string".to_string()),
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
