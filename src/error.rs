use std::path::PathBuf;

/// Library-level structured errors for lintfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum LintfixError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid substitution {input:?}: {reason}")]
	InvalidSubstitution { input: String, reason: String },

	#[error("Invalid rule {name:?}: {reason}")]
	InvalidRule { name: String, reason: String },

	#[error("Root directory not found: {path}")]
	RootNotFound { path: PathBuf },

	#[error("Failed to walk directory tree: {root}")]
	WalkFailed {
		root: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to read file: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8: {path}")]
	DecodeFailed {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write file: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using LintfixError.
pub type Result<T> = std::result::Result<T, LintfixError>;
