use thiserror::Error;

/// Errors from shared-resource access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// A view asked for a resource before the composition root
    /// installed it. This is a programming error and is surfaced
    /// immediately rather than masked with a default.
    #[error("no provider installed for '{resource}'")]
    ProviderMissing { resource: &'static str },
}

/// Explicit slot for a resource shared with the view tree.
pub struct Provider<T> {
    resource: &'static str,
    value: Option<T>,
}

impl<T> Provider<T> {
    /// An empty slot, named for error messages.
    pub fn empty(resource: &'static str) -> Self {
        Self {
            resource,
            value: None,
        }
    }

    /// Install or replace the shared resource.
    pub fn install(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Read the resource, failing fast when nothing is installed.
    pub fn get(&self) -> Result<&T, ContextError> {
        self.value.as_ref().ok_or(ContextError::ProviderMissing {
            resource: self.resource,
        })
    }
}
