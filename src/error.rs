use thiserror::Error;

/// Failures reported by the containers in this crate.
///
/// Only accessors fail: `get`, `pop`, `peek`, `dequeue`. Removal of an
/// absent target (`remove`, `remove_front`, `remove_back`, `delete_value`)
/// is a silent no-op instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("index {index} is out of bounds")]
    IndexOutOfBounds { index: usize },

    #[error("{container} is empty")]
    Empty { container: &'static str },
}

impl ContainerError {
    pub(crate) fn out_of_bounds(index: usize) -> Self {
        Self::IndexOutOfBounds { index }
    }

    pub(crate) fn empty(container: &'static str) -> Self {
        Self::Empty { container }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContainerError::out_of_bounds(7).to_string(),
            "index 7 is out of bounds"
        );
        assert_eq!(
            ContainerError::empty("stack").to_string(),
            "stack is empty"
        );
    }
}
