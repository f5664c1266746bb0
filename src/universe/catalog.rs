use serde::Serialize;

pub const MIN_YEAR: i32 = 1990;
pub const MAX_YEAR: i32 = 2024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResearchCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionProgram {
    pub name: &'static str,
    pub acronym: &'static str,
    pub active: bool,
}

pub static CATEGORIES: [ResearchCategory; 6] = [
    ResearchCategory {
        id: "human-biology",
        name: "Human Biology",
        color: "#EF4444",
        description: "Studies on human adaptation to space environments",
        keywords: &[
            "bone density",
            "muscle atrophy",
            "cardiovascular",
            "human physiology",
            "astronaut health",
        ],
    },
    ResearchCategory {
        id: "plant-biology",
        name: "Plant Biology",
        color: "#10B981",
        description: "Plant growth and development in microgravity",
        keywords: &[
            "plant growth",
            "photosynthesis",
            "agriculture",
            "crop production",
            "botany",
        ],
    },
    ResearchCategory {
        id: "microbiology",
        name: "Microbiology",
        color: "#3B82F6",
        description: "Microbial behavior and applications in space",
        keywords: &[
            "bacteria",
            "microorganisms",
            "infection",
            "immune system",
            "microbial ecology",
        ],
    },
    ResearchCategory {
        id: "cell-biology",
        name: "Cell Biology",
        color: "#8B5CF6",
        description: "Cellular processes and responses in space",
        keywords: &[
            "cell division",
            "DNA",
            "protein synthesis",
            "gene expression",
            "cellular biology",
        ],
    },
    ResearchCategory {
        id: "radiation-effects",
        name: "Radiation Effects",
        color: "#F59E0B",
        description: "Impact of cosmic radiation on biological systems",
        keywords: &[
            "cosmic radiation",
            "radiation protection",
            "DNA damage",
            "radiation exposure",
            "shielding",
        ],
    },
    ResearchCategory {
        id: "gravity-studies",
        name: "Gravity Studies",
        color: "#EC4899",
        description: "Effects of altered gravity on living systems",
        keywords: &[
            "microgravity",
            "weightlessness",
            "gravitational effects",
            "acceleration",
            "gravity simulation",
        ],
    },
];

pub const NASA_CENTERS: [&str; 7] = [
    "Ames Research Center",
    "Glenn Research Center",
    "Goddard Space Flight Center",
    "Johnson Space Center",
    "Kennedy Space Center",
    "Langley Research Center",
    "Marshall Space Flight Center",
];

pub static MISSION_PROGRAMS: [MissionProgram; 5] = [
    MissionProgram {
        name: "International Space Station",
        acronym: "ISS",
        active: true,
    },
    MissionProgram {
        name: "Artemis Program",
        acronym: "ARTEMIS",
        active: true,
    },
    MissionProgram {
        name: "Mars Exploration Program",
        acronym: "MEP",
        active: true,
    },
    MissionProgram {
        name: "Space Shuttle Program",
        acronym: "STS",
        active: false,
    },
    MissionProgram {
        name: "Commercial Crew Program",
        acronym: "CCP",
        active: true,
    },
];

pub const JOURNALS: [&str; 7] = [
    "Gravitational and Space Research",
    "Journal of Space Biology",
    "Microgravity Science and Technology",
    "Astrobiology",
    "Life Sciences in Space Research",
    "NASA Technical Reports",
    "Space Medicine & Medical Engineering",
];

pub(super) const STUDY_TYPES: [&str; 5] = [
    "Effects of",
    "Analysis of",
    "Investigation into",
    "Study on",
    "Research on",
];

pub(super) const ENVIRONMENTS: [&str; 4] = [
    "microgravity",
    "space environment",
    "ISS conditions",
    "simulated Mars conditions",
];

pub(super) const FIRST_NAMES: [&str; 10] = [
    "John", "Sarah", "Michael", "Lisa", "David", "Maria", "Robert", "Jennifer", "James", "Emily",
];

pub(super) const LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

/// Renders one of the four abstract templates. `variant` wraps modulo the
/// template count.
pub(super) fn render_abstract(variant: usize, keyword: &str, environment: &str) -> String {
    match variant % ABSTRACT_TEMPLATE_COUNT {
        0 => format!(
            "This study investigates the effects of {environment} on {keyword}, providing crucial insights for future Mars missions. Our findings demonstrate significant changes in biological processes that must be considered for long-duration spaceflight."
        ),
        1 => format!(
            "We present a comprehensive analysis of {keyword} under {environment} conditions. This research contributes to our understanding of biological adaptation mechanisms essential for human space exploration."
        ),
        2 => format!(
            "Through extensive experimentation aboard the International Space Station, we examined {keyword} responses to {environment}. These results inform mission planning and crew health protocols for deep space exploration."
        ),
        _ => format!(
            "This investigation focuses on {keyword} behavior in {environment}, revealing important implications for space biology and astronaut safety during extended missions to Mars and beyond."
        ),
    }
}

pub(super) const ABSTRACT_TEMPLATE_COUNT: usize = 4;

pub fn category_by_id(id: &str) -> Option<&'static ResearchCategory> {
    CATEGORIES.iter().find(|category| category.id == id)
}
