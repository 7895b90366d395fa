use derive_more::{Deref, Display};
use strum::{Display as StrumDisplay, EnumCount, EnumIter};

/// Opaque identifier of a display label, resolved to text by a
/// [`LabelResolver`](crate::labels::LabelResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deref)]
pub struct LabelKey(&'static str);

impl LabelKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase")]
pub enum SpeedLevel {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl SpeedLevel {
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Next position clockwise; `High` wraps back to `Off`.
    pub const fn advance(self) -> Self {
        match self {
            Self::Off => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Off,
        }
    }

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn label_key(self) -> LabelKey {
        match self {
            Self::Off => LabelKey::new("fan_off"),
            Self::Low => LabelKey::new("fan_low"),
            Self::Medium => LabelKey::new("fan_medium"),
            Self::High => LabelKey::new("fan_high"),
        }
    }
}
