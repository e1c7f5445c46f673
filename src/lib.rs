/*!
 * # vardnica - Latvian/English WordNet dictionary support library
 *
 * Static reference data and build settings for the dictionary's desktop
 * front-end.
 *
 * ## Features
 *
 * - Part-of-speech label tables for Latvian and English WordNet codes
 * - Extra POS tables loaded from JSON and merged over the built-in ones
 * - ISO 639-1 and ISO 639-2 language code support for lookups
 * - Typed static-site build configuration with a compiler warning filter
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `pos_tags`: POS code to name/description tables
 * - `build_config`: Front-end build configuration (warning filter,
 *   preprocessing, output adapter)
 * - `app_config`: Configuration management
 * - `app_controller`: Operations behind the CLI subcommands
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod build_config;
pub mod errors;
pub mod language_utils;
pub mod pos_tags;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use build_config::{Adapter, BuildConfig, Warning, WarningAction, WarningFilter};
pub use errors::{AppError, BuildConfigError, PosTagError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1_or_part2t};
pub use pos_tags::{LanguageTable, PosEntry, PosTags, lookup};
