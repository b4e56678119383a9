//! Canned Jyotish answers and the topic matcher that selects them.

use serde::Serialize;

/// Topics with a prepared answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    VenusSeventhHouse,
    VimshottariDasha,
    RajaYoga,
    /// Fallback overview of the assistant.
    Overview,
}

/// A prepared answer with its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub topic: Topic,
    pub text: &'static str,
    pub citations: &'static [&'static str],
}

/// Starter questions offered before the first query.
pub const SUGGESTIONS: [&str; 3] = [
    "What does Venus in the 7th house signify?",
    "Explain the Vimshottari Dasha system",
    "What are Raja Yoga combinations?",
];

const VENUS_SEVENTH_HOUSE_ANSWER: &str = "Venus in the 7th house is considered one of the most favorable placements for marriage and partnerships. According to BPHS, Venus as the natural significator of love and beauty placed in the house of marriage brings:\n\
    \n\
    • **Attractive spouse** — The native tends to attract a beautiful and charming partner\n\
    • **Harmonious relationships** — Natural ability to maintain balance in partnerships\n\
    • **Artistic inclinations** — Often indicates involvement in arts, music, or fashion\n\
    • **Diplomatic nature** — Skilled in negotiation and compromise\n\
    \n\
    However, if Venus is afflicted by malefics (Saturn, Rahu, or Mars), it can indicate delays in marriage or challenges in maintaining harmony. Venus in its own sign (Taurus/Libra) in the 7th house gives Malavya Yoga, one of the Pancha Mahapurusha Yogas.";

const VENUS_SEVENTH_HOUSE_CITATIONS: &[&str] = &[
    "BPHS Ch. 24 — Effects of Planets in Houses",
    "Phaladeepika Ch. 7 — Marriage & Partnerships",
];

const VIMSHOTTARI_DASHA_ANSWER: &str = "The Vimshottari Dasha system is the most widely used planetary period system in Vedic astrology. It spans a total cycle of 120 years, divided among the 9 planets:\n\
    \n\
    | Planet | Period | Years |\n\
    |--------|--------|-------|\n\
    | Sun (Surya) | Ketu → Sun | 6 years |\n\
    | Moon (Chandra) | Sun → Moon | 10 years |\n\
    | Mars (Mangal) | Moon → Mars | 7 years |\n\
    | Rahu | Mars → Rahu | 18 years |\n\
    | Jupiter (Guru) | Rahu → Jupiter | 16 years |\n\
    | Saturn (Shani) | Jupiter → Saturn | 19 years |\n\
    | Mercury (Budha) | Saturn → Mercury | 17 years |\n\
    | Ketu | Mercury → Ketu | 7 years |\n\
    | Venus (Shukra) | Ketu → Venus | 20 years |\n\
    \n\
    The starting dasha is determined by the Moon's Nakshatra at birth. Each Mahadasha is further divided into Antardashas (sub-periods) proportional to the main periods.";

const VIMSHOTTARI_DASHA_CITATIONS: &[&str] = &[
    "BPHS Ch. 46 — Dasha Effects",
    "Uttara Kalamrita — Dasha Calculations",
];

const RAJA_YOGA_ANSWER: &str = "Raja Yoga in Vedic astrology indicates power, authority, and success. It forms when lords of Kendra (1, 4, 7, 10) and Trikona (1, 5, 9) houses combine through:\n\
    \n\
    • **Conjunction** — Kendra and Trikona lords placed together\n\
    • **Mutual aspect** — They aspect each other from their respective houses\n\
    • **Exchange** — Parivartana (sign exchange) between Kendra and Trikona lords\n\
    \n\
    **Key Raja Yogas:**\n\
    1. **Dharma-Karmadhipati Yoga** — 9th and 10th lord conjunction (strongest)\n\
    2. **Lakshmi Yoga** — 1st and 9th lord connection\n\
    3. **Gajakesari Yoga** — Jupiter in Kendra from Moon\n\
    4. **Pancha Mahapurusha** — Mercury, Venus, Mars, Jupiter, or Saturn in own/exalted sign in Kendra\n\
    \n\
    For a Raja Yoga to fully manifest, the participating planets should be strong (in own sign, exalted, or in good Shadbala) and free from malefic afflictions.";

const RAJA_YOGA_CITATIONS: &[&str] = &[
    "BPHS Ch. 41 — Combinations for Kingship",
    "Jataka Parijata Ch. 15 — Royal Yogas",
];

const OVERVIEW_ANSWER: &str = "This is a demo of the Jyotish AI Assistant. In the full Pro version, this feature uses a RAG (Retrieval-Augmented Generation) pipeline powered by:\n\
    \n\
    • **Ollama** — Local LLM for privacy-first AI responses\n\
    • **ChromaDB** — Vector store for classical text embeddings\n\
    • **LlamaIndex** — RAG orchestration with page-level citations\n\
    \n\
    The knowledge base includes classical texts like Brihat Parashara Hora Shastra, Phaladeepika, Uttara Kalamrita, and Jataka Parijata.\n\
    \n\
    Try asking about:\n\
    - \"Venus in 7th house\"\n\
    - \"Vimshottari Dasha system\"\n\
    - \"Raja Yoga combinations\"";

const OVERVIEW_CITATIONS: &[&str] = &[
    "Powered by Jyotish Holocron RAG Engine",
];

pub const GREETING: &str = "Namaste! I am the Jyotish AI Assistant, trained on classical Vedic astrology texts. Ask me anything about planetary placements, yogas, dashas, or chart interpretation.\n\
    \n\
    *This is a demo. Pro subscribers get access to the full RAG-powered engine with comprehensive text citations.*";

impl Topic {
    pub const fn answer(self) -> Answer {
        let (text, citations) = match self {
            Self::VenusSeventhHouse => (VENUS_SEVENTH_HOUSE_ANSWER, VENUS_SEVENTH_HOUSE_CITATIONS),
            Self::VimshottariDasha => (VIMSHOTTARI_DASHA_ANSWER, VIMSHOTTARI_DASHA_CITATIONS),
            Self::RajaYoga => (RAJA_YOGA_ANSWER, RAJA_YOGA_CITATIONS),
            Self::Overview => (OVERVIEW_ANSWER, OVERVIEW_CITATIONS),
        };
        Answer {
            topic: self,
            text,
            citations,
        }
    }
}

/// Match a query to a topic by lower-cased substring tests, first rule wins:
/// "venus" with "7", then "vimshottari" or "dasha", then any "yoga".
pub fn classify(query: &str) -> Topic {
    let q = query.to_lowercase();
    if q.contains("venus") && q.contains('7') {
        Topic::VenusSeventhHouse
    } else if q.contains("vimshottari") || q.contains("dasha") {
        Topic::VimshottariDasha
    } else if q.contains("yoga") {
        Topic::RajaYoga
    } else {
        Topic::Overview
    }
}

/// Answer for `query`.
pub fn find_answer(query: &str) -> Answer {
    classify(query).answer()
}
