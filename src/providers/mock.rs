/*!
 * Mock rewriter implementations for testing.
 *
 * This module provides mock rewriters that simulate different behaviors:
 * - `MockRewriter::working()` - Always succeeds with canned structured content
 * - `MockRewriter::echo()` - Returns the input text unchanged
 * - `MockRewriter::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::Rewriter;

/// Behavior mode for the mock rewriter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with canned structured content
    Working,
    /// Returns the input text unchanged
    Echo,
    /// Always fails with an error
    Failing,
}

/// Mock rewriter for testing pipeline behavior
#[derive(Debug)]
pub struct MockRewriter {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional, overrides Working output)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockRewriter {
    /// Create a new mock rewriter with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock that returns canned structured content
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that echoes the input back
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set a custom response generator taking (text, instructions)
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of rewrite calls received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockRewriter {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Rewriter for MockRewriter {
    async fn rewrite(&self, text: &str, instructions: &str) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                let content = if let Some(generator) = self.custom_response {
                    generator(text, instructions)
                } else {
                    "# Understanding the topic\n- **Key** point\n- Second point\nA *closing* remark"
                        .to_string()
                };
                Ok(content)
            }

            MockBehavior::Echo => Ok(text.to_string()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }
}
