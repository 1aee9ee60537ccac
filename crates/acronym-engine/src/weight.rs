// Popularity tiers and selection weights

/// Companies most people recognize from the logo alone.
const POPULAR_COMPANIES: &[&str] = &[
    "Apple",
    "Google",
    "Microsoft",
    "Meta",
    "Amazon",
    "Netflix",
    "Tesla",
    "OpenAI",
    "Nvidia",
    "Adobe",
    "Spotify",
    "Discord",
    "GitHub",
    "LinkedIn",
];

/// Second tier of recognizable companies.
const WELL_KNOWN_COMPANIES: &[&str] = &[
    "Instagram",
    "WhatsApp",
    "YouTube",
    "TikTok",
    "Uber",
    "PayPal",
    "Reddit",
];

/// Recognition tier of a company; decides its roulette weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Popularity {
    Standard,
    WellKnown,
    Popular,
}

impl Popularity {
    /// Classify a company by exact name.
    pub fn of(name: &str) -> Self {
        if POPULAR_COMPANIES.contains(&name) {
            Popularity::Popular
        } else if WELL_KNOWN_COMPANIES.contains(&name) {
            Popularity::WellKnown
        } else {
            Popularity::Standard
        }
    }

    /// Roulette weight for this tier.
    pub fn weight(self) -> u32 {
        match self {
            Popularity::Popular => 5,
            Popularity::WellKnown => 3,
            Popularity::Standard => 1,
        }
    }
}

/// Roulette weight for a company name.
pub fn company_weight(name: &str) -> u32 {
    Popularity::of(name).weight()
}
