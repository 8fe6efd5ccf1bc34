//! Settings catalogs for structured prompt generation.
//!
//! Each catalog is a closed, ordered set of values; catalog order determines
//! the default selection (first entry) and the ordering a UI should present.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A (value, display label) pair exposed to UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Overall rendering style for the generated image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum OutputStyle {
    #[strum(serialize = "Photorealistic")]
    Photorealistic,
    #[strum(serialize = "Cinematic")]
    Cinematic,
    #[strum(serialize = "Futuristic")]
    Futuristic,
    #[strum(serialize = "Luxury Commercial")]
    LuxuryCommercial,
    #[strum(serialize = "Editorial Fashion")]
    EditorialFashion,
}

impl OutputStyle {
    pub const ALL: [Self; 5] = [
        Self::Photorealistic,
        Self::Cinematic,
        Self::Futuristic,
        Self::LuxuryCommercial,
        Self::EditorialFashion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photorealistic => "Photorealistic",
            Self::Cinematic => "Cinematic",
            Self::Futuristic => "Futuristic",
            Self::LuxuryCommercial => "Luxury Commercial",
            Self::EditorialFashion => "Editorial Fashion",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Camera perspective hint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Perspective {
    #[strum(serialize = "Centered Symmetrical")]
    CenteredSymmetrical,
    #[strum(serialize = "Worm's Eye View")]
    WormsEyeView,
    #[strum(serialize = "Top-Down View")]
    TopDownView,
    #[strum(serialize = "Low Angle")]
    LowAngle,
    #[strum(serialize = "Eye-Level")]
    EyeLevel,
    #[strum(serialize = "Shallow Depth of Field (DoF)")]
    ShallowDepthOfField,
}

impl Perspective {
    pub const ALL: [Self; 6] = [
        Self::CenteredSymmetrical,
        Self::WormsEyeView,
        Self::TopDownView,
        Self::LowAngle,
        Self::EyeLevel,
        Self::ShallowDepthOfField,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CenteredSymmetrical => "Centered Symmetrical",
            Self::WormsEyeView => "Worm's Eye View",
            Self::TopDownView => "Top-Down View",
            Self::LowAngle => "Low Angle",
            Self::EyeLevel => "Eye-Level",
            Self::ShallowDepthOfField => "Shallow Depth of Field (DoF)",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Lighting mood.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum LightingMood {
    #[strum(serialize = "Cinematic Volumetric")]
    CinematicVolumetric,
    #[strum(serialize = "Dramatic/Low Key")]
    DramaticLowKey,
    #[strum(serialize = "Studio Softbox")]
    StudioSoftbox,
    #[strum(serialize = "High Key/Clean")]
    HighKeyClean,
    #[strum(serialize = "Neon/Glow")]
    NeonGlow,
}

impl LightingMood {
    pub const ALL: [Self; 5] = [
        Self::CinematicVolumetric,
        Self::DramaticLowKey,
        Self::StudioSoftbox,
        Self::HighKeyClean,
        Self::NeonGlow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CinematicVolumetric => "Cinematic Volumetric",
            Self::DramaticLowKey => "Dramatic/Low Key",
            Self::StudioSoftbox => "Studio Softbox",
            Self::HighKeyClean => "High Key/Clean",
            Self::NeonGlow => "Neon/Glow",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Default for LightingMood {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Cultural focus used to bias the prompt-engineer persona.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum CulturalFocus {
    #[strum(serialize = "African/Black Fashion")]
    AfricanBlackFashion,
    #[strum(serialize = "Urban Streetwear")]
    UrbanStreetwear,
    #[strum(serialize = "Futuristic Sci-Fi")]
    FuturisticSciFi,
    #[strum(serialize = "Cultural")]
    Cultural,
    #[strum(serialize = "General")]
    General,
}

impl CulturalFocus {
    pub const ALL: [Self; 5] = [
        Self::AfricanBlackFashion,
        Self::UrbanStreetwear,
        Self::FuturisticSciFi,
        Self::Cultural,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AfricanBlackFashion => "African/Black Fashion",
            Self::UrbanStreetwear => "Urban Streetwear",
            Self::FuturisticSciFi => "Futuristic Sci-Fi",
            Self::Cultural => "Cultural",
            Self::General => "General",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Default for CulturalFocus {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// The four-field styling configuration attached to every text-optimization
/// request. Catalog membership is guaranteed by construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub output_style: OutputStyle,
    pub perspective: Perspective,
    pub lighting: LightingMood,
    pub cultural_focus: CulturalFocus,
}

fn options_from<T: Copy>(all: &'static [T], as_str: fn(&T) -> &'static str) -> Vec<SelectOption> {
    all.iter()
        .map(|v| SelectOption {
            value: as_str(v),
            label: as_str(v),
        })
        .collect()
}

/// Static catalog of (value, label) pairs, in presentation order.
pub fn output_style_options() -> Vec<SelectOption> {
    options_from(&OutputStyle::ALL, |v| v.as_str())
}

pub fn perspective_options() -> Vec<SelectOption> {
    options_from(&Perspective::ALL, |v| v.as_str())
}

pub fn lighting_options() -> Vec<SelectOption> {
    options_from(&LightingMood::ALL, |v| v.as_str())
}

pub fn cultural_focus_options() -> Vec<SelectOption> {
    options_from(&CulturalFocus::ALL, |v| v.as_str())
}
