// SPDX-License-Identifier: MPL-2.0
//! Static catalog of visual styles available for generation.
//!
//! Each style contributes a fixed prompt fragment appended to the user's
//! description. The catalog is pure data; new styles are added here and
//! nowhere else.

use std::fmt;

/// A named visual preset for icon generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    /// Flat vector look with geometric shapes and vibrant colors.
    #[default]
    PremiumFlat,
    /// Translucent glass look with refraction and gradients.
    Glassmorphism,
    /// Soft rounded 3D clay look with pastel colors.
    SoftClay,
    /// Glowing neon emblem on dark backgrounds.
    CyberNeon,
    /// Minimalist monochrome outline.
    MinimalStroke,
}

impl IconStyle {
    /// Returns every style in catalog order.
    #[must_use]
    pub fn all() -> &'static [IconStyle] {
        &[
            IconStyle::PremiumFlat,
            IconStyle::Glassmorphism,
            IconStyle::SoftClay,
            IconStyle::CyberNeon,
            IconStyle::MinimalStroke,
        ]
    }

    /// Stable identifier used in config files and persisted history.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            IconStyle::PremiumFlat => "modern-flat",
            IconStyle::Glassmorphism => "3d-glass",
            IconStyle::SoftClay => "clay",
            IconStyle::CyberNeon => "cyber-neon",
            IconStyle::MinimalStroke => "minimal-outline",
        }
    }

    /// Display label shown in the style selector and history captions.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IconStyle::PremiumFlat => "Premium Flat",
            IconStyle::Glassmorphism => "Glassmorphism",
            IconStyle::SoftClay => "Soft Clay",
            IconStyle::CyberNeon => "Cyber Neon",
            IconStyle::MinimalStroke => "Minimal Stroke",
        }
    }

    /// Prompt fragment appended to the generation request.
    #[must_use]
    pub fn prompt_suffix(&self) -> &'static str {
        match self {
            IconStyle::PremiumFlat => {
                "flat vector symbol, geometric abstraction, clean sharp lines, \
                 vibrant colors, white background"
            }
            IconStyle::Glassmorphism => {
                "translucent glass sculpture, realistic refraction, frosted \
                 textures, vivid gradient interior, luxury UI asset"
            }
            IconStyle::SoftClay => {
                "claymorphism style, soft rounded edges, matte finish, playful \
                 3d form, vibrant pastel colors"
            }
            IconStyle::CyberNeon => {
                "glowing futuristic emblem, vibrant neon light lines, tech \
                 aesthetic, dark-mode ready, sharp details"
            }
            IconStyle::MinimalStroke => {
                "minimalist outline logo, thick consistent strokes, balanced \
                 negative space, professional monochrome"
            }
        }
    }

    /// Looks up a style by its stable id (e.g. from the config file).
    #[must_use]
    pub fn from_id(id: &str) -> Option<IconStyle> {
        Self::all().iter().copied().find(|style| style.id() == id)
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
