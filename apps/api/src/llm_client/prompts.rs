// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts whose output is shown to the user verbatim.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with plain text only. \
    Do NOT wrap the answer in markdown code fences. \
    Do NOT add commentary before or after the answer.";
