//! Email dispatch module for the EmailJS REST API

mod client;
mod traits;

pub use client::{EmailJsClient, DEFAULT_API_URL};
pub use traits::{DispatchError, EmailDispatcher, TemplateParams};

#[cfg(test)]
pub use traits::MockEmailDispatcher;
