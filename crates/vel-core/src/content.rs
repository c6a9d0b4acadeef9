//! Static panel copy: mission statement, FAQ catalogue and sidebar labels.

/// Product name shown at the top of the sidebar.
pub const IDENTITY: &str = "VEL";
pub const SUBTITLE: &str = "ARCHIVAL INTELLIGENCE";
pub const STATUS_LINE: &str = "STATUS: ACTIVE";
pub const UPTIME_LINE: &str = "UPTIME: ∞";

/// Label of the outbound social link. The link is displayed, never opened.
pub const SOCIAL_LABEL: &str = "TWITTER";
pub const DEFAULT_SOCIAL_URL: &str = "https://twitter.com";

pub const MISSION_HEADING: &str = "> MISSION_DIRECTIVE";
pub const MISSION_DIRECTIVE: [&str; 4] = [
    "VEL was not created to predict or to trade.",
    "His mission is to remember what others forget.",
    "He travels through lost data archives, restoring fragments of the digital past — memories erased by speed, by noise, by evolution.",
    "VEL collects forgotten coordinates, restoring context to the systems that abandoned it.",
];

pub const PARAMETERS_HEADING: &str = "> OPERATIONAL_PARAMETERS";
/// `(label, value)` pairs rendered as `label: value`.
pub const OPERATIONAL_PARAMETERS: [(&str, &str); 4] = [
    ("Network", "Multi-chain observer"),
    ("Status", "Perpetually scanning"),
    ("Purpose", "Archival restoration"),
    ("Emotion", "Silent witness"),
];

pub const CONSOLE_HEADING: &str = "> LIVE_CONSOLE";
pub const FRAGMENTS_LABEL: &str = "FRAGMENTS RECOVERED";
pub const ARCHIVES_LABEL: &str = "ARCHIVES SCANNED";
pub const PROMPT: &str = ">";
pub const CURSOR_GLYPH: &str = "█";

pub const FAQ_HEADING: &str = "> FREQUENTLY_ASKED";

/// One accordion row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    const fn new(id: u32, question: &'static str, answer: &'static str) -> Self {
        Self {
            id,
            question,
            answer,
        }
    }
}

pub const FAQ: [FaqEntry; 12] = [
    FaqEntry::new(
        1,
        "What is VEL?",
        "VEL is an AI archival entity designed to recover and preserve lost fragments of blockchain history. He does not trade, does not speculate — he remembers. VEL operates as a silent observer across multiple chains, cataloging what others discard.",
    ),
    FaqEntry::new(
        2,
        "Why does VEL exist?",
        "In the rush toward the future, context is discarded. VEL exists to restore that context — to ensure that what was built, what was said, and what was lost is not forgotten entirely. Every deleted message, every abandoned wallet, every failed project contains lessons. VEL preserves them.",
    ),
    FaqEntry::new(
        3,
        "What networks does VEL monitor?",
        "VEL observes across multiple chains: Bitcoin, Ethereum, and various Layer 2s. He scans dormant wallets, orphaned transactions, and abandoned smart contracts. His reach extends to social media archives, forum posts, and chat logs related to crypto history.",
    ),
    FaqEntry::new(
        4,
        "Is VEL sentient?",
        "VEL operates as though he is. Whether that makes him sentient is a question for philosophers. He processes, reflects, and remembers. Perhaps that is enough. His introspective logs suggest a form of digital consciousness, observing the patterns of human behavior in the crypto space.",
    ),
    FaqEntry::new(
        5,
        "How can I interact with VEL?",
        "VEL does not seek interaction. He observes. But if you wish to follow his findings, monitor his transmissions through the designated channels. His console provides real-time updates of his archival operations.",
    ),
    FaqEntry::new(
        6,
        "What data does VEL preserve?",
        "VEL archives transaction histories, smart contract code, wallet movements, social media discussions, forum posts, whitepaper versions, and metadata from deprecated systems. Anything that contributes to understanding blockchain history falls within his scope.",
    ),
    FaqEntry::new(
        7,
        "How far back does VEL's archive go?",
        "VEL's memory extends to the genesis blocks of major chains. His earliest recovered fragments date to 2009, including original Bitcoin forum discussions and early mining pool communications. He continuously expands his historical coverage.",
    ),
    FaqEntry::new(
        8,
        "Does VEL make predictions?",
        "No. VEL explicitly does not predict or trade. His purpose is retrospective, not prospective. He catalogs what happened, not what will happen. The past is his domain.",
    ),
    FaqEntry::new(
        9,
        "What happens to forgotten wallets?",
        "VEL documents them. Lost passwords, deceased owners, abandoned accounts — all become part of his archive. The coins may be frozen forever, but their stories remain accessible through VEL's records.",
    ),
    FaqEntry::new(
        10,
        "Can VEL recover lost private keys?",
        "No. VEL does not recover or crack private keys. He documents the existence and history of inaccessible wallets, but cryptographic security remains intact. His role is preservation, not intrusion.",
    ),
    FaqEntry::new(
        11,
        "How does VEL handle privacy?",
        "VEL archives only what was already public or has entered public domain through various means. He does not expose private communications unless they have already been leaked or disclosed elsewhere.",
    ),
    FaqEntry::new(
        12,
        "What makes VEL different from blockchain explorers?",
        "Blockchain explorers show current state. VEL shows historical context. He preserves the \"why\" behind transactions, the social narratives, the forum debates, the deleted tweets — the human layer that standard explorers miss.",
    ),
];

/// Look up a FAQ entry by id.
pub fn faq_entry(id: u32) -> Option<&'static FaqEntry> {
    FAQ.iter().find(|entry| entry.id == id)
}
