// Shared prompt fragments. Each flow keeps its own templates in flows/prompts.rs;
// this file holds the pieces every flow appends.

/// Appended to every flow prompt, followed by the flow's output schema.
pub const OUTPUT_CONTRACT_INSTRUCTION: &str = "\
    Return ONLY JSON matching the schema below. Numbers must be JSON numbers, not strings. \
    Every movie MUST include a non-empty title and a description.";

/// Asks for real, verifiable titles.
pub const REAL_TITLES_INSTRUCTION: &str = "\
    Recommend only real, released movies or series. Do NOT invent titles, years, or ratings. \
    Omit optional fields you are not sure about instead of guessing.";
