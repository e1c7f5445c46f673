/*!
 * Front-end build configuration.
 *
 * Typed model of the static-site build configuration used for the desktop
 * front-end: which compiler warnings are suppressed, the ordered
 * preprocessing steps and the output adapter. The desktop shell has no
 * server runtime to render pages on request, so the only accepted adapter
 * is the static one that prerenders every page at build time.
 */

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::BuildConfigError;

/// Position of a warning in its source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A compiler warning as reported by the front-end compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Warning identifier, e.g. "a11y-missing-attribute"
    pub code: String,

    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
}

impl Warning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            filename: None,
            start: None,
        }
    }
}

/// What to do with a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningAction {
    /// Drop the warning silently
    Suppress,
    /// Pass the warning on to the default handler
    Forward,
}

impl std::fmt::Display for WarningAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suppress => write!(f, "suppress"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

/// Suppresses warnings whose code starts with one of the configured prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarningFilter {
    #[serde(default = "default_suppressed_prefixes")]
    pub suppressed_prefixes: Vec<String>,
}

impl Default for WarningFilter {
    fn default() -> Self {
        Self {
            suppressed_prefixes: default_suppressed_prefixes(),
        }
    }
}

impl WarningFilter {
    pub fn decide_code(&self, code: &str) -> WarningAction {
        if self
            .suppressed_prefixes
            .iter()
            .any(|prefix| code.starts_with(prefix.as_str()))
        {
            WarningAction::Suppress
        } else {
            WarningAction::Forward
        }
    }

    pub fn decide(&self, warning: &Warning) -> WarningAction {
        self.decide_code(&warning.code)
    }
}

/// One preprocessing step applied to component sources before compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preprocessor {
    /// Preprocessor identifier, e.g. "vite"
    pub name: String,

    /// Options handed to the preprocessor as-is
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl Preprocessor {
    /// The bundler's own preprocessor with no options
    pub fn vite() -> Self {
        Self {
            name: "vite".to_string(),
            options: Map::new(),
        }
    }
}

/// Options of the static (prerendering) adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticAdapterOptions {
    /// Directory for prerendered pages
    #[serde(default = "default_output_dir")]
    pub pages: String,

    /// Directory for static assets
    #[serde(default = "default_output_dir")]
    pub assets: String,

    /// Fallback page for routes that are not prerendered (SPA mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    /// Emit brotli/gzip copies of the output
    #[serde(default)]
    pub precompress: bool,

    /// Fail the build when a route cannot be prerendered
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for StaticAdapterOptions {
    fn default() -> Self {
        Self {
            pages: default_output_dir(),
            assets: default_output_dir(),
            fallback: None,
            precompress: false,
            strict: default_true(),
        }
    }
}

/// Server adapters take no options here; any field is rejected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerAdapterOptions {}

/// Output target of the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Adapter {
    /// Prerender every page to static files (SSG)
    Static(StaticAdapterOptions),
    /// Node.js server runtime
    Node(ServerAdapterOptions),
    /// Let the build tool detect the deployment target
    Auto(ServerAdapterOptions),
}

impl Default for Adapter {
    fn default() -> Self {
        Self::Static(StaticAdapterOptions::default())
    }
}

impl Adapter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static(_) => "static",
            Self::Node(_) => "node",
            Self::Auto(_) => "auto",
        }
    }

    pub fn requires_server(&self) -> bool {
        !matches!(self, Self::Static(_))
    }
}

/// Build configuration handed to the external static-site builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default)]
    pub warning_filter: WarningFilter,

    #[serde(default = "default_preprocess")]
    pub preprocess: Vec<Preprocessor>,

    #[serde(default)]
    pub adapter: Adapter,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            warning_filter: WarningFilter::default(),
            preprocess: default_preprocess(),
            adapter: Adapter::default(),
        }
    }
}

impl BuildConfig {
    /// Run the warning through the filter and hand it to `handler` unless
    /// it is suppressed.
    pub fn on_warn<F>(&self, warning: &Warning, handler: F) -> WarningAction
    where
        F: FnOnce(&Warning),
    {
        let action = self.warning_filter.decide(warning);
        match action {
            WarningAction::Suppress => trace!("Suppressed warning: {}", warning.code),
            WarningAction::Forward => handler(warning),
        }
        action
    }

    pub fn validate(&self) -> Result<(), BuildConfigError> {
        if let Some(index) = self
            .warning_filter
            .suppressed_prefixes
            .iter()
            .position(|p| p.is_empty())
        {
            return Err(BuildConfigError::EmptyPrefix(index));
        }

        if let Some(index) = self.preprocess.iter().position(|p| p.name.trim().is_empty()) {
            return Err(BuildConfigError::EmptyPreprocessor(index));
        }

        match &self.adapter {
            Adapter::Static(options) => {
                if options.pages.trim().is_empty() {
                    return Err(BuildConfigError::EmptyOutputDir("pages"));
                }
                if options.assets.trim().is_empty() {
                    return Err(BuildConfigError::EmptyOutputDir("assets"));
                }
            }
            other => return Err(BuildConfigError::ServerAdapter(other.name().to_string())),
        }

        Ok(())
    }
}

fn default_suppressed_prefixes() -> Vec<String> {
    vec!["a11y-".to_string(), "css-unused-selector".to_string()]
}

fn default_preprocess() -> Vec<Preprocessor> {
    vec![Preprocessor::vite()]
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_true() -> bool {
    true
}
