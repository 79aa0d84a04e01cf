//! Prompt templates sent to the text provider.
//!
//! Each function is pure string interpolation; the wording is the instruction
//! the model sees, so changes here change generation behavior.

/// Inputs for the compose-email prompt. Optional considerations are passed as
/// empty strings when the caller omitted them.
pub struct EmailOutline<'a> {
    pub purpose: &'a str,
    pub recipient_info: &'a str,
    pub sender_name: &'a str,
    pub tone: &'a str,
    pub subject: &'a str,
    pub key_points: &'a str,
    pub context: &'a str,
    pub actions: &'a str,
    pub attachments: &'a str,
    pub length: &'a str,
}

/// Instruction to compose a full email from a structured outline.
pub fn compose_email(outline: &EmailOutline<'_>) -> String {
    format!(
        r#"Compose an email with the following characteristics:

*   **Purpose:** {purpose}
*   **Recipient:** {recipient_info}
*   **Sender:** {sender_name}
*   **Tone:** {tone}
*   **Subject:** {subject}
*   **Key Points/Content:**
    {key_points}
*   **Optional Considerations (when applicable):**
    *   **Context:** {context}
    *   **Actions Required:** {actions}
    *   **Attachments:** {attachments}
    *   **Desired Length:** {length}

Write the email including this information, with an appropriate greeting and closing, considering the desired tone."#,
        purpose = outline.purpose,
        recipient_info = outline.recipient_info,
        sender_name = outline.sender_name,
        tone = outline.tone,
        subject = outline.subject,
        key_points = outline.key_points,
        context = outline.context,
        actions = outline.actions,
        attachments = outline.attachments,
        length = outline.length,
    )
}

/// Instruction to paraphrase text with the given tone.
pub fn paraphrase(text: &str, tone: &str) -> String {
    format!(
        "Paraphrase the following text with a '{tone}' tone and return it in Markdown format:\n\n{text}"
    )
}

/// Instruction to summarize a received email as bullet points.
pub fn summarize(email_content: &str) -> String {
    format!(
        r#"Summarize the following email content concisely, extracting:
- The main purpose/request
- Any key deadlines or time-sensitive information
- Important details or context
- Any specific questions that need answers

Format the summary as bullet points.

Email content:
{email_content}"#
    )
}

/// Instruction to draft a personalized reply; embeds the summary produced by
/// [`summarize`].
pub fn reply(
    email_content: &str,
    summary: &str,
    tone: &str,
    sender_name: &str,
    additional_context: &str,
) -> String {
    format!(
        r#"Generate a personalized reply to the following email.

Original email:
{email_content}

Email summary:
{summary}

Reply characteristics:
- Tone: {tone}
- Sender name: {sender_name}
- Additional context or information to include: {additional_context}

Create a thoughtful reply that addresses the key points from the original email.
Include an appropriate greeting and signature."#
    )
}
