/*!
 * Rewrite provider implementations.
 *
 * The slide reconstructor talks to the external text-generation service
 * through the [`Rewriter`] trait so that HTTP and transport concerns stay
 * out of the pipeline and a deterministic stub can stand in during tests.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Capability interface for the external content rewrite.
///
/// `text` is the slide's extracted content; `instructions` is the caller's
/// free-form guidance. Implementations return the rewritten content as plain
/// text carrying the inline markup dialect (leading `#` headings, bullet
/// markers, `**`/`*` styling).
#[async_trait]
pub trait Rewriter: Send + Sync + Debug {
    /// Rewrite slide content, or fail with a provider error.
    ///
    /// Failures are never fatal for the run: the caller degrades the one
    /// slide to diagnostic text and continues.
    async fn rewrite(&self, text: &str, instructions: &str) -> Result<String, ProviderError>;
}

pub mod groq;
pub mod mock;
