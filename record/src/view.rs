//! Photo views requested from the user.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;

/// One of the three full-body photos the measurement service needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// Facing the camera.
    Front,
    /// Turned sideways.
    Side,
    /// Natural standing pose.
    Standing,
}

impl View {
    /// All views in multipart wire order.
    pub const ALL: [Self; 3] = [Self::Front, Self::Side, Self::Standing];

    /// Multipart field name the service expects for this view.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Standing => "standing",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front View",
            Self::Side => "Side View",
            Self::Standing => "Standing View",
        }
    }

    /// Short posing hint shown under the label.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Front => "Face the camera directly",
            Self::Side => "Stand sideways to camera",
            Self::Standing => "Natural standing pose",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Front => "\u{1F464}",
            Self::Side => "\u{27A1}",
            Self::Standing => "\u{1F465}",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
