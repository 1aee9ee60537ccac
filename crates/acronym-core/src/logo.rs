// Logo asset path resolution

use crate::company::Company;

/// Display sizes for a rendered logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogoSize {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

impl LogoSize {
    /// Edge length of the square placeholder image, in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            LogoSize::Small => 32,
            LogoSize::Medium => 48,
            LogoSize::Large => 64,
            LogoSize::ExtraLarge => 96,
        }
    }

    /// Parse the short size names used by front ends (`sm`, `md`, `lg`, `xl`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(LogoSize::Small),
            "md" => Some(LogoSize::Medium),
            "lg" => Some(LogoSize::Large),
            "xl" => Some(LogoSize::ExtraLarge),
            _ => None,
        }
    }
}

/// Asset path for a logo reference. Logos are served as PNG under `/logos/`
/// even when the table names an SVG.
pub fn logo_path(logo: &str) -> String {
    let file = match logo.strip_suffix(".svg") {
        Some(stem) => format!("{stem}.png"),
        None => logo.to_string(),
    };
    format!("/logos/{file}")
}

/// Asset path for a company's logo.
pub fn logo_asset_path(company: &Company) -> String {
    logo_path(&company.logo)
}

/// Fallback image used when a logo asset fails to load.
pub fn placeholder_asset_path(size: LogoSize, letter: char) -> String {
    let px = size.pixels();
    format!("/placeholder.svg?height={px}&width={px}&query={letter}")
}
