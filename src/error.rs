//! Host setup errors.
//!
//! The simulation itself cannot fail; everything that can go wrong happens
//! while wiring the page (missing DOM elements) or bringing up the GPU.

use std::fmt;

#[derive(Debug)]
pub enum SetupError {
    /// No global `window`/`document` (not running in a browser page).
    NoWindow,

    /// A required DOM element is absent from the page.
    MissingElement {
        /// Element id that was looked up.
        id: &'static str,
    },

    /// The element exists but is not the expected HTML element type.
    WrongElementType {
        id: &'static str,
        expected: &'static str,
    },

    /// The canvas could not be turned into a render surface.
    Surface(String),

    /// No compatible GPU adapter.
    Adapter(String),

    /// The adapter refused to create a device.
    Device(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no browser window available"),
            SetupError::MissingElement { id } => {
                write!(f, "required element '#{}' not found", id)
            }
            SetupError::WrongElementType { id, expected } => {
                write!(f, "element '#{}' is not a {}", id, expected)
            }
            SetupError::Surface(msg) => write!(f, "failed to create render surface: {}", msg),
            SetupError::Adapter(msg) => write!(f, "no suitable GPU adapter: {}", msg),
            SetupError::Device(msg) => write!(f, "failed to create GPU device: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_element() {
        let err = SetupError::MissingElement { id: "resetBtn" };
        assert_eq!(err.to_string(), "required element '#resetBtn' not found");

        let err = SetupError::WrongElementType {
            id: "pauseToggle",
            expected: "HtmlInputElement",
        };
        assert!(err.to_string().contains("HtmlInputElement"));
    }
}
