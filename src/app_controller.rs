use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::io::Write;

use crate::app_config::Config;
use crate::build_config::{Warning, WarningAction};
use crate::language_utils;
use crate::pos_tags::PosTags;

// @module: Application controller behind the CLI subcommands

/// Runs the CLI operations against a loaded configuration and writes
/// their output to the given writer
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Built-in tables merged with the configured extra file
    tags: PosTags,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let tags = config.pos_tags()?;
        Ok(Self { config, tags })
    }

    pub fn tags(&self) -> &PosTags {
        &self.tags
    }

    /// Print one POS entry; a miss is an error
    pub fn describe_pos(&self, language: &str, code: &str, out: &mut impl Write) -> Result<()> {
        let entry = self
            .tags
            .lookup_normalized(language, code)
            .ok_or_else(|| anyhow!("No POS '{}' for language '{}'", code, language))?;

        writeln!(out, "{} ({}): {}", entry.long, entry.code, entry.desc)?;
        Ok(())
    }

    /// Print every entry of a language table, one per line, tab separated
    pub fn list_language(&self, language: &str, out: &mut impl Write) -> Result<()> {
        let table = self
            .tags
            .language_normalized(language)
            .ok_or_else(|| anyhow!("No POS table for language '{}'", language))?;

        debug!("Listing {} POS codes for '{}'", table.len(), table.language());
        for entry in table.entries() {
            writeln!(out, "{}\t{}\t{}", entry.code, entry.long, entry.desc)?;
        }
        Ok(())
    }

    pub fn list_languages(&self, out: &mut impl Write) -> Result<()> {
        for language in self.tags.languages() {
            let name = language_utils::get_language_name(language)
                .unwrap_or_else(|_| "unknown".to_string());
            writeln!(out, "{}\t{}", language, name)?;
        }
        Ok(())
    }

    /// Print "suppress" or "forward" for a warning code
    pub fn check_warning(&self, code: &str, out: &mut impl Write) -> Result<WarningAction> {
        let warning = Warning::new(code, String::new());
        let action = self.config.build.on_warn(&warning, |w| {
            info!("Forwarding warning: {}", w.code);
        });

        writeln!(out, "{}", action)?;
        Ok(action)
    }

    pub fn print_build_config(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.config.build)
            .context("Failed to serialize build configuration")?;

        writeln!(out, "{}", json)?;
        Ok(())
    }
}
