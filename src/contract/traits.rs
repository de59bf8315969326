//! Seams between request validation, contract generation and rendering.

use super::layout::Layout;
use super::ContractError;

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    type Output;

    /// Generate a document from the request.
    fn generate(&self, request: Req) -> Result<Self::Output, ContractError>;
}

/// Turns a laid-out document into a concrete output format.
pub trait RenderBackend {
    fn mime_type(&self) -> &'static str;

    fn render(&self, layout: &Layout) -> Result<Vec<u8>, ContractError>;
}
