/*!
 * # slideforge
 *
 * A Rust library for AI-assisted rewriting and restyling of presentation decks.
 *
 * ## Features
 *
 * - Extract the text content of each slide
 * - Rewrite it through an external text-generation provider (Groq)
 * - Rebuild each slide around the rewritten content: one fresh text
 *   container with classified, styled paragraphs
 * - Apply a uniform visual theme (font, color roles, sizes, background)
 * - Degrade gracefully: a failed rewrite affects one slide, never the run
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management, palettes, and design settings
 * - `document`: In-memory presentation object model and its byte container
 * - `markup`: Inline bold/italic markup tokenizer
 * - `paragraph`: Line classification and paragraph building
 * - `rebuild`: Destructive slide reconstruction
 * - `theme`: Idempotent visual theme application
 * - `providers`: Rewrite provider clients:
 *   - `providers::groq`: Groq chat-completions client
 *   - `providers::mock`: Deterministic stub for tests
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod markup;
pub mod paragraph;
pub mod providers;
pub mod rebuild;
pub mod theme;

// Re-export main types for easier usage
pub use app_config::{Config, DesignSettings};
pub use app_controller::Controller;
pub use document::Presentation;
pub use errors::{AppError, DocumentError, ProviderError};
pub use markup::{tokenize, StyledSpan};
pub use paragraph::{classify, ParagraphRole, ParagraphSpec};
