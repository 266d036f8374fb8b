//! Fixed destination catalog and the canned response blocks built from it.
//!
//! Every response the service produces is one of the blocks below: a header
//! line plus three catalog records rendered through [`render_destination`].
//! The blocks are editorial selections, not computed filters, so changing a
//! record here changes every block that picks it.

use crate::models::{ActivityType, BudgetCategory, Destination, Season};

const BALI: Destination = Destination {
    name: "Bali, Indonesia",
    description: "Beautiful beaches with vibrant culture and lush landscapes.",
    activity: ActivityType::Beach,
    budget: BudgetCategory::Moderate,
    season: Season::Summer,
    family_friendly: true,
};

const CANCUN: Destination = Destination {
    name: "Cancun, Mexico",
    description: "White sandy beaches with crystal clear waters and vibrant nightlife.",
    activity: ActivityType::Beach,
    budget: BudgetCategory::Moderate,
    season: Season::Winter,
    family_friendly: true,
};

const MALDIVES: Destination = Destination {
    name: "Maldives, Maldives",
    description: "Luxurious overwater bungalows and pristine beaches perfect for relaxation.",
    activity: ActivityType::Beach,
    budget: BudgetCategory::Luxury,
    season: Season::AllYear,
    family_friendly: true,
};

const KYOTO: Destination = Destination {
    name: "Kyoto, Japan",
    description: "Ancient temples, traditional gardens, and rich cultural heritage.",
    activity: ActivityType::Cultural,
    budget: BudgetCategory::Moderate,
    season: Season::Spring,
    family_friendly: true,
};

const ROME: Destination = Destination {
    name: "Rome, Italy",
    description: "Historic city with ancient ruins, art, and delicious cuisine.",
    activity: ActivityType::Cultural,
    budget: BudgetCategory::Moderate,
    season: Season::Spring,
    family_friendly: true,
};

const PRAGUE: Destination = Destination {
    name: "Prague, Czech Republic",
    description: "Historic architecture, affordable dining, and rich cultural experiences.",
    activity: ActivityType::Cultural,
    budget: BudgetCategory::Budget,
    season: Season::Spring,
    family_friendly: true,
};

const SANTORINI: Destination = Destination {
    name: "Santorini, Greece",
    description: "Beautiful sunsets, white-washed buildings, and Mediterranean cuisine.",
    activity: ActivityType::Relaxation,
    budget: BudgetCategory::Luxury,
    season: Season::Summer,
    family_friendly: true,
};

const ASPEN: Destination = Destination {
    name: "Aspen, USA",
    description: "World-class skiing, snowboarding, and luxurious alpine village.",
    activity: ActivityType::WinterSports,
    budget: BudgetCategory::Luxury,
    season: Season::Winter,
    family_friendly: false,
};

const CHAMONIX: Destination = Destination {
    name: "Chamonix, France",
    description: "Epic skiing and snowboarding with stunning Mont Blanc views.",
    activity: ActivityType::WinterSports,
    budget: BudgetCategory::Luxury,
    season: Season::Winter,
    family_friendly: true,
};

const NEW_YORK: Destination = Destination {
    name: "New York City, USA",
    description: "Iconic skyline, diverse neighborhoods, world-class museums, and entertainment.",
    activity: ActivityType::UrbanExploration,
    budget: BudgetCategory::Luxury,
    season: Season::AllYear,
    family_friendly: true,
};

/// Every destination the service knows about
pub const CATALOG: [Destination; 10] = [
    BALI, CANCUN, MALDIVES, KYOTO, ROME, PRAGUE, SANTORINI, ASPEN, CHAMONIX, NEW_YORK,
];

/// A fixed selection of three catalog records rendered under one header
#[derive(Debug, Clone, Copy)]
pub(crate) struct Block {
    header: &'static str,
    picks: [Destination; 3],
}

impl Block {
    /// Renders the block in the fixed display format
    pub(crate) fn render(&self) -> String {
        let entries: Vec<String> = self.picks.iter().map(render_destination).collect();
        format!("{}\n\n{}", self.header, entries.join("\n\n"))
    }
}

fn render_destination(destination: &Destination) -> String {
    format!(
        "📍 {}\n⭐️ {}\n🏷️ Activity: {} | Budget: {} | Best Season: {} | Family Friendly: {}",
        destination.name,
        destination.description,
        destination.activity,
        destination.budget,
        destination.season,
        if destination.family_friendly { "Yes" } else { "No" },
    )
}

pub(crate) const BEACH: Block = Block {
    header: "Here are some beach destinations for you:",
    picks: [BALI, CANCUN, MALDIVES],
};

pub(crate) const CULTURAL: Block = Block {
    header: "Here are some cultural destinations for you:",
    picks: [KYOTO, ROME, PRAGUE],
};

pub(crate) const LUXURY: Block = Block {
    header: "Here are some luxury destinations for you:",
    picks: [MALDIVES, SANTORINI, ASPEN],
};

pub(crate) const WINTER: Block = Block {
    header: "Here are some winter destinations for you:",
    picks: [ASPEN, CHAMONIX, CANCUN],
};

pub(crate) const FAMILY_FRIENDLY: Block = Block {
    header: "Here are some family-friendly destinations for you:",
    picks: [BALI, CANCUN, KYOTO],
};

/// Shared by the no-criteria fallthrough and the all-destinations listing
pub(crate) const POPULAR: Block = Block {
    header: "Here are some popular travel destinations:",
    picks: [BALI, CANCUN, MALDIVES],
};
