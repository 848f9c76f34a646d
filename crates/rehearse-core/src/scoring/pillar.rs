//! The five sales-skill pillars.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// A sales-skill dimension scored independently from the transcript.
///
/// Variant order is the declaration order used for feedback lines and
/// qualitative detail, so `Ord` follows it as well.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pillar {
    Rapport,
    Pain,
    Needs,
    Teach,
    Close,
}

impl Pillar {
    /// All pillars in declaration order.
    pub fn ordered() -> impl Iterator<Item = Pillar> {
        Pillar::iter()
    }

    /// Display title, e.g. `Rapport`.
    pub fn title(self) -> &'static str {
        match self {
            Pillar::Rapport => "Rapport",
            Pillar::Pain => "Pain",
            Pillar::Needs => "Needs",
            Pillar::Teach => "Teach",
            Pillar::Close => "Close",
        }
    }
}
