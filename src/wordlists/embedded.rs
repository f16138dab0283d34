//! Embedded generation dictionary
//!
//! A compact common-word list, lowercase and sorted. Big enough for the
//! generator to find playable letter sets; callers who want a larger pool
//! can pass their own file through the loader.

/// Number of embedded words
pub const WORD_COUNT: usize = 274;

/// The embedded dictionary, sorted ascending
pub const WORDS: &[&str] = &[
    "abide", "acre", "adore", "aged", "agenda", "aging", "agree", "aide", "aired", "alert",
    "alien", "alter", "amber", "amend", "anger", "arena", "argue", "arid", "arise", "atone",
    "audio", "badge", "badger", "baker", "banner", "barge", "beacon", "bead", "beard", "began",
    "begin", "being", "blade", "bland", "blend", "blind", "board", "brain", "brand", "bread",
    "break", "breed", "bride", "bridge", "brief", "bring", "broad", "cabin", "cable", "cadre",
    "candle", "cared", "caring", "cedar", "chain", "chair", "charge", "cheap", "chore", "cider",
    "cigar", "clean", "cleaning", "clear", "crane", "credit", "creed", "cried", "dagger", "dance",
    "dancer", "danger", "dare", "dared", "daring", "dawn", "dean", "dear", "decade", "decide",
    "denied", "denier", "dense", "derail", "design", "dial", "diner", "dining", "dinner", "dire",
    "dirge", "drain", "drained", "dread", "dried", "drier", "during", "eager", "eagle", "earn",
    "earned", "earning", "edge", "edging", "eight", "elder", "ended", "ending", "engine",
    "enrage", "enraged", "erase", "fable", "faced", "facing", "fading", "feign", "fiend",
    "finder", "finer", "fired", "floor", "friend", "fringe", "gain", "gained", "gaining",
    "garden", "gardenia", "garner", "gear", "genie", "giant", "ginger", "girder", "glade",
    "gland", "glare", "grade", "graded", "grain", "grained", "grand", "grander", "granite",
    "grease", "green", "grenade", "grid", "grin", "grind", "grinned", "gripe", "hand", "hanger",
    "harden", "heard", "hinge", "hired", "idea", "image", "indeed", "inert", "irate", "jade",
    "knead", "knee", "ladder", "laden", "lair", "land", "lane", "large", "lead", "leading",
    "lean", "leaning", "learn", "learning", "ledge", "legend", "line", "lined", "linen",
    "linger", "lining", "maiden", "main", "manner", "margin", "mend", "mind", "mined", "miner",
    "nadir", "naive", "name", "named", "near", "neared", "nerd", "nine", "ocean", "olden",
    "opera", "organ", "pardon", "plain", "plane", "pride", "prime", "raged", "raging", "raid",
    "raided", "rain", "rained", "raining", "rang", "range", "ranged", "ranger", "rated", "read",
    "reader", "reading", "regain", "regained", "reign", "reigned", "rein", "reined", "remain",
    "render", "ride", "ridge", "riding", "rigged", "rind", "ring", "ringed", "rinse", "robot",
    "sage", "sand", "slate", "snipe", "speed", "spread", "stage", "stand", "stone", "tanned",
    "tender", "tiger", "trade", "train", "trained", "trend", "under", "urban", "vigor", "vine",
    "wage", "wander", "warden", "wearing", "wide", "widen", "wind", "wing", "winner", "wired",
    "zebra",
];
