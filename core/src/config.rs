//! Widget configuration and the accept policy compiled from it.
//!
//! The default configuration accepts everything: any file type, any size,
//! any number of files per drop.
//!
//! # Accept patterns
//!
//! | Pattern        | Matches                                  |
//! |----------------|------------------------------------------|
//! | `.pdf`         | file names ending in `.pdf` (any case)   |
//! | `.tar.gz`      | file names ending in `.tar.gz`           |
//! | `image/png`    | exactly that MIME type                   |
//! | `image/*`      | any MIME type in the `image` family      |
//! | `*/*` or `*`   | everything                               |
//!
//! # Example
//!
//! ```rust
//! use dropzone_core::DropzoneConfig;
//!
//! let config = DropzoneConfig::from_json(r#"{"accept": [".csv", "text/*"], "maxSize": 1048576}"#).unwrap();
//! assert_eq!(config.max_size, Some(1_048_576));
//! assert!(config.multiple);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, RejectionReason};
use crate::types::{DragItem, FileHandle};

/// Configuration of a drop target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropzoneConfig {
    /// Accept patterns, empty means accept everything
    pub accept: Vec<String>,
    /// Minimum size in bytes (inclusive)
    pub min_size: Option<u64>,
    /// Maximum size in bytes (inclusive)
    pub max_size: Option<u64>,
    /// Whether more than one file may be dropped at once
    pub multiple: bool,
    /// Ignore all interaction
    pub disabled: bool,
    /// Whether clicking the target opens the file picker
    pub click_to_browse: bool,
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            accept: Vec::new(),
            min_size: None,
            max_size: None,
            multiple: true,
            disabled: false,
            click_to_browse: true,
        }
    }
}

impl DropzoneConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_accept<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_click_to_browse(mut self, enabled: bool) -> Self {
        self.click_to_browse = enabled;
        self
    }

    /// Check patterns and size bounds. Blank accept entries are ignored.
    pub fn validate(&self) -> ConfigResult<()> {
        self.policy().map(|_| ())
    }

    /// Compile the accept policy.
    pub fn policy(&self) -> ConfigResult<AcceptPolicy> {
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(ConfigError::SizeBounds { min, max });
            }
        }

        let patterns = self
            .accept
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| AcceptPattern::parse(p))
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(AcceptPolicy {
            patterns,
            min_size: self.min_size,
            max_size: self.max_size,
        })
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attribute(&self) -> String {
        self.accept
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// Accept Patterns
// =============================================================================

/// A single compiled accept pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptPattern {
    Any,
    /// Lowercased extension without the leading dot, may hold inner dots
    Extension(String),
    /// Lowercased `type/subtype`
    MimeExact(String),
    /// Lowercased top-level type of a `type/*` pattern
    MimeWildcard(String),
}

impl AcceptPattern {
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let pattern = raw.trim().to_ascii_lowercase();
        let invalid = || ConfigError::InvalidAcceptPattern(raw.to_string());

        if pattern == "*" || pattern == "*/*" {
            return Ok(AcceptPattern::Any);
        }

        if let Some(ext) = pattern.strip_prefix('.') {
            if ext.split('.').any(str::is_empty)
                || ext.contains(['/', '*'])
                || ext.contains(char::is_whitespace)
            {
                return Err(invalid());
            }
            return Ok(AcceptPattern::Extension(ext.to_string()));
        }

        let (top, sub) = pattern.split_once('/').ok_or_else(invalid)?;
        if top.is_empty()
            || sub.is_empty()
            || top == "*"
            || sub.contains('/')
            || pattern.contains(char::is_whitespace)
        {
            return Err(invalid());
        }

        if sub == "*" {
            Ok(AcceptPattern::MimeWildcard(top.to_string()))
        } else {
            Ok(AcceptPattern::MimeExact(pattern))
        }
    }

    /// Match a MIME type, parameters after `;` are ignored.
    pub fn matches_mime(&self, mime: &str) -> bool {
        let mime = essence(mime);
        match self {
            AcceptPattern::Any => true,
            AcceptPattern::Extension(_) => false,
            AcceptPattern::MimeExact(expected) => mime.eq_ignore_ascii_case(expected),
            AcceptPattern::MimeWildcard(top) => mime
                .split_once('/')
                .is_some_and(|(t, _)| t.eq_ignore_ascii_case(top)),
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            AcceptPattern::Any => true,
            AcceptPattern::Extension(ext) => name.to_ascii_lowercase().ends_with(&format!(".{ext}")),
            _ => false,
        }
    }

    fn is_extension(&self) -> bool {
        matches!(self, AcceptPattern::Extension(_))
    }
}

fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or("").trim()
}

// =============================================================================
// Accept Policy
// =============================================================================

/// Type and size filter applied to dragged and dropped files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptPolicy {
    patterns: Vec<AcceptPattern>,
    min_size: Option<u64>,
    max_size: Option<u64>,
}

impl AcceptPolicy {
    pub fn accept_all() -> Self {
        Self::default()
    }

    fn accepts_any_type(&self) -> bool {
        self.patterns.is_empty() || self.patterns.contains(&AcceptPattern::Any)
    }

    /// Drag-time check for a single item.
    ///
    /// Only files qualify. Extension patterns cannot be checked before the
    /// drop, so a policy holding one admits every file item.
    pub fn admits_drag_item(&self, item: &DragItem) -> bool {
        if !item.is_file() {
            return false;
        }
        if self.accepts_any_type() {
            return true;
        }
        self.patterns
            .iter()
            .any(|p| p.is_extension() || p.matches_mime(&item.mime_type))
    }

    /// Drop-time type check on a name and MIME type.
    pub fn admits_type(&self, name: &str, mime: &str) -> bool {
        self.accepts_any_type()
            || self
                .patterns
                .iter()
                .any(|p| p.matches_name(name) || p.matches_mime(mime))
    }

    /// Every reason `file` would be rejected, empty when it is accepted.
    pub fn evaluate<F: FileHandle>(&self, file: &F) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();

        if !self.admits_type(file.name(), file.mime_type()) {
            reasons.push(RejectionReason::TypeNotAccepted {
                mime: file.mime_type().to_string(),
            });
        }

        let size = file.size();
        if let Some(min) = self.min_size {
            if size < min {
                reasons.push(RejectionReason::TooSmall { size, min });
            }
        }
        if let Some(max) = self.max_size {
            if size > max {
                reasons.push(RejectionReason::TooLarge { size, max });
            }
        }

        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoryFile;

    #[test]
    fn test_default_config() {
        let config = DropzoneConfig::default();
        assert!(config.accept.is_empty());
        assert!(config.multiple);
        assert!(config.click_to_browse);
        assert!(!config.disabled);
        assert_eq!(config.policy().unwrap(), AcceptPolicy::accept_all());
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let config = DropzoneConfig::from_json(r#"{"multiple": false}"#).unwrap();
        assert!(!config.multiple);
        assert!(config.click_to_browse);
        assert_eq!(config.max_size, None);
    }

    #[test]
    fn test_from_json_camel_case() {
        let config =
            DropzoneConfig::from_json(r#"{"minSize": 1, "maxSize": 10, "clickToBrowse": false}"#).unwrap();
        assert_eq!(config.min_size, Some(1));
        assert_eq!(config.max_size, Some(10));
        assert!(!config.click_to_browse);
    }

    #[test]
    fn test_from_json_rejects_bad_bounds() {
        let err = DropzoneConfig::from_json(r#"{"minSize": 10, "maxSize": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::SizeBounds { min: 10, max: 1 }));
    }

    #[test]
    fn test_from_json_rejects_bad_pattern() {
        let err = DropzoneConfig::from_json(r#"{"accept": ["pdf"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAcceptPattern(p) if p == "pdf"));
    }

    #[test]
    fn test_pattern_parsing() {
        assert_eq!(AcceptPattern::parse("*").unwrap(), AcceptPattern::Any);
        assert_eq!(AcceptPattern::parse("*/*").unwrap(), AcceptPattern::Any);
        assert_eq!(
            AcceptPattern::parse(" .PDF ").unwrap(),
            AcceptPattern::Extension("pdf".into())
        );
        assert_eq!(
            AcceptPattern::parse("Image/*").unwrap(),
            AcceptPattern::MimeWildcard("image".into())
        );
        assert_eq!(
            AcceptPattern::parse("text/csv").unwrap(),
            AcceptPattern::MimeExact("text/csv".into())
        );

        for bad in ["", ".", "..", ".tar..gz", ".gz.", "csv", "*/png", "text/", "/csv", "a/b/c", "text /csv"] {
            assert!(AcceptPattern::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_multi_dot_extension() {
        let config = DropzoneConfig::from_json(r#"{"accept": [".Tar.GZ"]}"#).unwrap();
        assert_eq!(
            AcceptPattern::parse(&config.accept[0]).unwrap(),
            AcceptPattern::Extension("tar.gz".into())
        );

        let policy = config.policy().unwrap();
        assert!(policy.admits_type("backup.TAR.gz", ""));
        assert!(!policy.admits_type("backup.gz", "application/gzip"));
        assert!(!policy.admits_type("tar.gz", ""));

        let gz = AcceptPattern::Extension("gz".into());
        assert!(gz.matches_name("archive.tar.gz"));
    }

    #[test]
    fn test_blank_accept_entries_ignored() {
        let config = DropzoneConfig::default().with_accept(["image/png", "", "  "]);
        assert!(config.validate().is_ok());
        assert_eq!(config.accept_attribute(), "image/png");

        let policy = config.policy().unwrap();
        assert!(policy.admits_type("a.png", "image/png"));
        assert!(!policy.admits_type("a.txt", "text/plain"));
    }

    #[test]
    fn test_pattern_matching() {
        let wildcard = AcceptPattern::MimeWildcard("image".into());
        assert!(wildcard.matches_mime("image/png"));
        assert!(!wildcard.matches_mime("text/plain"));

        let exact = AcceptPattern::MimeExact("text/csv".into());
        assert!(exact.matches_mime("text/csv; charset=utf-8"));
        assert!(exact.matches_mime("TEXT/CSV"));

        let ext = AcceptPattern::Extension("csv".into());
        assert!(ext.matches_name("works.CSV"));
        assert!(!ext.matches_name("csv"));
        assert!(!ext.matches_mime("text/csv"));
    }

    #[test]
    fn test_drag_item_admission() {
        let images = DropzoneConfig::default().with_accept(["image/*"]).policy().unwrap();
        assert!(images.admits_drag_item(&DragItem::file("image/jpeg")));
        assert!(!images.admits_drag_item(&DragItem::file("application/pdf")));
        assert!(!images.admits_drag_item(&DragItem::string("text/plain")));

        // extensions are only known at drop time
        let csv = DropzoneConfig::default().with_accept([".csv"]).policy().unwrap();
        assert!(csv.admits_drag_item(&DragItem::file("")));

        let all = AcceptPolicy::accept_all();
        assert!(all.admits_drag_item(&DragItem::file("")));
        assert!(!all.admits_drag_item(&DragItem::string("text/uri-list")));
    }

    #[test]
    fn test_evaluate_reports_every_reason() {
        let policy = DropzoneConfig::default()
            .with_accept([".csv"])
            .with_max_size(4)
            .policy()
            .unwrap();

        let file = MemoryFile::new("photo.png", "image/png", vec![0; 8]);
        let reasons = policy.evaluate(&file);
        assert_eq!(
            reasons,
            vec![
                RejectionReason::TypeNotAccepted { mime: "image/png".into() },
                RejectionReason::TooLarge { size: 8, max: 4 },
            ]
        );

        let ok = MemoryFile::new("works.csv", "", vec![0; 4]);
        assert!(policy.evaluate(&ok).is_empty());
    }

    #[test]
    fn test_evaluate_min_size() {
        let policy = DropzoneConfig::default().with_min_size(1).policy().unwrap();
        let empty = MemoryFile::new("empty.txt", "text/plain", Vec::new());
        assert_eq!(
            policy.evaluate(&empty),
            vec![RejectionReason::TooSmall { size: 0, min: 1 }]
        );
    }

    #[test]
    fn test_accept_attribute() {
        let config = DropzoneConfig::default().with_accept([".csv", " text/* ", ""]);
        assert_eq!(config.accept_attribute(), ".csv,text/*");
    }
}
