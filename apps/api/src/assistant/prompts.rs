// Prompt templates for the resume assistant.
// User text is inserted exactly once; it is never rescanned for placeholders.

/// Resume optimization prompt. Replace `{resume_text}` before sending.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "\
Rewrite the following resume bullets to be concise, quantify achievements where possible, \
and use action verbs. Keep formatting as bullets when appropriate. \
Return only the rewritten resume text.

{resume_text}
";

/// Cover letter prompt built in a single pass over both inputs.
pub fn cover_letter_prompt(jd_text: &str, resume_text: &str) -> String {
    format!(
        "Write a one-page professional cover letter tailored to the following job description:\n\n\
         {jd_text}\n\n\
         And based on this resume text:\n\n\
         {resume_text}\n\n\
         Keep it concise and persuasive."
    )
}

/// System prompt for the resume writer persona.
pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer and career coach. \
    You never invent employers, dates, titles or metrics that are not present in the input.";
