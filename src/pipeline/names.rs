use crate::pipeline::entropy::Entropy;

const ADJECTIVES: [&str; 64] = [
    "crimson", "azure", "emerald", "golden", "violet", "scarlet", "amber", "indigo",
    "silver", "copper", "jade", "ruby", "sapphire", "pearl", "coral", "ivory",
    "obsidian", "marble", "crystal", "diamond", "onyx", "garnet", "topaz", "opal",
    "mystic", "cosmic", "ethereal", "stellar", "lunar", "solar", "nova", "nebula",
    "electric", "neon", "plasma", "matrix", "cyber", "digital", "quantum", "atomic",
    "velvet", "silk", "satin", "linen", "cotton", "cashmere", "wool", "mohair",
    "frost", "shadow", "ember", "flame", "spark", "glow", "shimmer", "glitter",
    "deep", "bright", "dark", "light", "soft", "bold", "vivid", "muted",
];

const NOUNS: [&str; 72] = [
    "tiger", "wolf", "eagle", "dragon", "phoenix", "raven", "hawk", "falcon",
    "mountain", "ocean", "forest", "desert", "valley", "river", "lake", "canyon",
    "storm", "thunder", "lightning", "tempest", "hurricane", "tornado", "blizzard", "rain",
    "sunset", "sunrise", "twilight", "dawn", "dusk", "midnight", "noon", "morning",
    "galaxy", "comet", "meteor", "planet", "star", "moon", "sun", "cosmos",
    "crystal", "diamond", "emerald", "sapphire", "ruby", "pearl", "opal", "jade",
    "warrior", "knight", "guardian", "sentinel", "defender", "champion", "hero", "legend",
    "whisper", "echo", "shadow", "dream", "vision", "phantom", "spirit", "ghost",
    "blade", "arrow", "shield", "crown", "throne", "tower", "castle", "fortress",
];

/// `<prefix>_<adjective>_<noun>`, e.g. `neon_dark_comet`.
pub fn random_name(prefix: &str, entropy: &mut dyn Entropy) -> String {
    let adjective = ADJECTIVES[entropy.random_int(ADJECTIVES.len())];
    let noun = NOUNS[entropy.random_int(NOUNS.len())];
    format!("{prefix}_{adjective}_{noun}")
}
