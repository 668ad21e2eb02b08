//! Typed views of the JSON argument object carried by each tool call.
//!
//! Decoding happens once per invocation through [`decode`], which also
//! enforces each tool's required fields. Unknown fields are ignored.
//! Numeric fields accept either a JSON number or a numeric string.

use super::entities::ToolName;
use super::value_objects::ToolError;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

/// A per-tool argument structure.
pub trait ToolArguments: DeserializeOwned {
    const TOOL: ToolName;

    /// Check required-field constraints after decoding.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Decode and validate the raw argument JSON of a tool call.
///
/// An empty payload is treated as `{}`.
pub fn decode<T: ToolArguments>(raw: &str) -> Result<T, ToolError> {
    let raw = if raw.trim().is_empty() { "{}" } else { raw };
    let args: T = serde_json::from_str(raw)
        .map_err(|e| ToolError::argument(T::TOOL.as_str(), e.to_string()))?;
    args.validate()
        .map_err(|message| ToolError::argument(T::TOOL.as_str(), message))?;
    Ok(args)
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("missing required field '{}'", field))
    } else {
        Ok(())
    }
}

/// Trimmed, non-empty view of an optional string field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

/// Accept `8080`, `"8080"`, `""` or `null`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("number out of range: {}", n))),
        Some(NumberOrString::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<u32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected a non-negative integer, got '{}'", s)))
        }
    }
}

/// Accept a list of strings or `null`.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect())
}

/// Accept `true`, `false` or `null`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Process listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PsArgs {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pid: Option<u32>,
    #[serde(default, deserialize_with = "string_list")]
    pub options: Vec<String>,
}

impl PsArgs {
    pub fn user(&self) -> Option<&str> {
        present(&self.user)
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }
}

impl ToolArguments for PsArgs {
    const TOOL: ToolName = ToolName::Ps;
}

/// File search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FindArgs {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub maxdepth: Option<u32>,
}

impl FindArgs {
    /// Search root, `.` when not given.
    pub fn path(&self) -> &str {
        present(&self.path).unwrap_or(".")
    }

    pub fn kind(&self) -> Option<&str> {
        present(&self.kind)
    }

    /// Depth limit; zero means unlimited.
    pub fn maxdepth(&self) -> Option<u32> {
        self.maxdepth.filter(|d| *d > 0)
    }
}

impl ToolArguments for FindArgs {
    const TOOL: ToolName = ToolName::Find;

    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        match self.kind() {
            None | Some("f") | Some("d") => Ok(()),
            Some(other) => Err(format!("'type' must be 'f' or 'd', got '{}'", other)),
        }
    }
}

/// Text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GrepArgs {
    #[serde(default)]
    pub pattern: String,
    /// One or more paths, whitespace separated
    #[serde(default)]
    pub file: String,
    #[serde(default, deserialize_with = "flag")]
    pub recursive: bool,
    #[serde(default, deserialize_with = "flag")]
    pub ignore_case: bool,
    #[serde(default, deserialize_with = "flag")]
    pub count_only: bool,
}

impl GrepArgs {
    pub fn files(&self) -> Vec<&str> {
        self.file.split_whitespace().collect()
    }
}

impl ToolArguments for GrepArgs {
    const TOOL: ToolName = ToolName::Grep;

    fn validate(&self) -> Result<(), String> {
        // Whitespace is a valid pattern; only an absent one is rejected.
        if self.pattern.is_empty() {
            return Err("missing required field 'pattern'".to_string());
        }
        require("file", &self.file)
    }
}

/// Download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WgetArgs {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub output_file: Option<String>,
}

impl WgetArgs {
    pub fn url(&self) -> &str {
        self.url.trim()
    }

    pub fn output_file(&self) -> Option<&str> {
        present(&self.output_file)
    }

    /// Success sentence reported once the download finishes.
    pub fn success_message(&self) -> String {
        match self.output_file() {
            Some(out) => format!("Successfully downloaded from {} to {}.", self.url(), out),
            None => format!("Successfully downloaded from {}.", self.url()),
        }
    }
}

impl ToolArguments for WgetArgs {
    const TOOL: ToolName = ToolName::Wget;

    fn validate(&self) -> Result<(), String> {
        require("url", &self.url)
    }
}

/// Socket statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SsArgs {
    #[serde(default, deserialize_with = "string_list")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub port: Option<u32>,
    #[serde(default)]
    pub protocol: Option<String>,
}

impl SsArgs {
    pub fn port(&self) -> Option<u32> {
        self.port.filter(|p| *p > 0)
    }

    /// Socket-family flag selected by `protocol`.
    pub fn protocol_flag(&self) -> Option<&'static str> {
        present(&self.protocol).and_then(protocol_flag)
    }
}

fn protocol_flag(protocol: &str) -> Option<&'static str> {
    match protocol.to_ascii_lowercase().as_str() {
        "tcp" => Some("-t"),
        "udp" => Some("-u"),
        "unix" => Some("-x"),
        "raw" => Some("-w"),
        _ => None,
    }
}

impl ToolArguments for SsArgs {
    const TOOL: ToolName = ToolName::Ss;

    fn validate(&self) -> Result<(), String> {
        match present(&self.protocol) {
            Some(p) if protocol_flag(p).is_none() => Err(format!(
                "unsupported protocol '{}' (expected tcp, udp, unix or raw)",
                p
            )),
            _ => Ok(()),
        }
    }
}

/// Open-file inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LsofArgs {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub port: Option<u32>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub options: Vec<String>,
}

impl LsofArgs {
    pub fn path(&self) -> Option<&str> {
        present(&self.path)
    }

    pub fn port(&self) -> Option<u32> {
        self.port.filter(|p| *p > 0)
    }

    pub fn user(&self) -> Option<&str> {
        present(&self.user)
    }
}

impl ToolArguments for LsofArgs {
    const TOOL: ToolName = ToolName::Lsof;

    fn validate(&self) -> Result<(), String> {
        if self.path().is_none()
            && self.port().is_none()
            && self.user().is_none()
            && self.options.is_empty()
        {
            return Err(
                "at least one of 'port', 'path', 'user' or 'options' must be provided".to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argument_message(err: ToolError) -> String {
        match err {
            ToolError::Argument { message, .. } => message,
            other => panic!("expected argument error, got {:?}", other),
        }
    }

    #[test]
    fn test_grep_whitespace_pattern_is_kept() {
        let args: GrepArgs = decode(r#"{"pattern": " ", "file": "a.txt"}"#).unwrap();
        assert_eq!(args.pattern, " ");
        assert_eq!(args.files(), vec!["a.txt"]);

        let err = decode::<GrepArgs>(r#"{"pattern": "", "file": "a.txt"}"#).unwrap_err();
        assert_eq!(argument_message(err), "missing required field 'pattern'");
        let err = decode::<GrepArgs>(r#"{"pattern": "x", "file": "  "}"#).unwrap_err();
        assert_eq!(argument_message(err), "missing required field 'file'");
    }

    #[test]
    fn test_empty_payload_decodes_defaults() {
        let args: PsArgs = decode("").unwrap();
        assert_eq!(args, PsArgs::default());
    }

    #[test]
    fn test_malformed_json_is_argument_error() {
        let err = decode::<PsArgs>("{not json").unwrap_err();
        assert!(matches!(err, ToolError::Argument { ref tool, .. } if tool == "ps"));
    }

    #[test]
    fn test_find_requires_name() {
        let err = decode::<FindArgs>(r#"{"path": "/tmp"}"#).unwrap_err();
        assert_eq!(argument_message(err), "missing required field 'name'");

        let err = decode::<FindArgs>(r#"{"name": "   "}"#).unwrap_err();
        assert_eq!(argument_message(err), "missing required field 'name'");
    }

    #[test]
    fn test_find_defaults_and_lenient_depth() {
        let args: FindArgs = decode(r#"{"name": "*.log", "maxdepth": "2"}"#).unwrap();
        assert_eq!(args.path(), ".");
        assert_eq!(args.maxdepth(), Some(2));

        let args: FindArgs = decode(r#"{"name": "*.log", "maxdepth": 0}"#).unwrap();
        assert_eq!(args.maxdepth(), None);

        assert!(decode::<FindArgs>(r#"{"name": "x", "type": "l"}"#).is_err());
    }

    #[test]
    fn test_grep_requires_pattern_and_file() {
        assert!(decode::<GrepArgs>(r#"{"pattern": "error"}"#).is_err());
        assert!(decode::<GrepArgs>(r#"{"file": "a.txt"}"#).is_err());

        let args: GrepArgs =
            decode(r#"{"pattern": "error", "file": "a.log  b.log", "ignore_case": true}"#).unwrap();
        assert_eq!(args.files(), vec!["a.log", "b.log"]);
        assert!(args.ignore_case);
        assert!(!args.recursive);
    }

    #[test]
    fn test_wget_requires_url() {
        assert!(decode::<WgetArgs>(r#"{"output_file": "x"}"#).is_err());

        let args: WgetArgs = decode(r#"{"url": "https://example.com/a.tar"}"#).unwrap();
        assert_eq!(
            args.success_message(),
            "Successfully downloaded from https://example.com/a.tar."
        );
    }

    #[test]
    fn test_ss_protocol_and_port() {
        let args: SsArgs = decode(r#"{"port": "8080", "protocol": "UDP"}"#).unwrap();
        assert_eq!(args.port(), Some(8080));
        assert_eq!(args.protocol_flag(), Some("-u"));

        let err = decode::<SsArgs>(r#"{"protocol": "sctp"}"#).unwrap_err();
        assert!(argument_message(err).contains("sctp"));
    }

    #[test]
    fn test_lsof_requires_a_filter() {
        assert!(decode::<LsofArgs>("{}").is_err());
        assert!(decode::<LsofArgs>(r#"{"options": []}"#).is_err());

        let args: LsofArgs = decode(r#"{"port": 22}"#).unwrap();
        assert_eq!(args.port(), Some(22));
    }

    #[test]
    fn test_null_fields_and_unknown_fields() {
        let args: PsArgs =
            decode(r#"{"options": null, "pid": null, "extra": 1, "name": "nginx"}"#).unwrap();
        assert!(args.options.is_empty());
        assert_eq!(args.pid, None);
        assert_eq!(args.name(), Some("nginx"));
    }

    #[test]
    fn test_negative_port_rejected() {
        assert!(decode::<LsofArgs>(r#"{"port": -1}"#).is_err());
        assert!(decode::<LsofArgs>(r#"{"port": "abc"}"#).is_err());
    }
}
