//! Prompt construction for expensive opportunity analysis

use crate::profile::CapabilityProfile;
use crate::sources::Opportunity;

pub const ANALYST_SYSTEM_PROMPT: &str = "You are an expert in government contracting and \
    IT/cybersecurity services. Analyze opportunities and provide detailed recommendations.";

/// Profile text is clipped to this many characters in the prompt.
pub const PROFILE_EXCERPT_LIMIT: usize = 2000;

/// Build the per-opportunity analysis prompt.
///
/// The response format instructions must stay in sync with the section
/// labels the parser looks for.
pub fn build_analysis_prompt(opportunity: &Opportunity, profile: &CapabilityProfile) -> String {
    let capabilities: String = profile.content.chars().take(PROFILE_EXCERPT_LIMIT).collect();
    let due_date = opportunity
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    format!(
        "Analyze this contracting opportunity and provide recommendations for our company.\n\
        \n\
        OPPORTUNITY DETAILS:\n\
        Title: {title}\n\
        Agency: {agency}\n\
        Description: {description}\n\
        Due Date: {due_date}\n\
        Classification Codes: {codes}\n\
        \n\
        OUR COMPANY CAPABILITIES:\n\
        {capabilities}\n\
        \n\
        Please provide:\n\
        1. Missing requirements that we don't currently have\n\
        2. Specific recommendations for this opportunity\n\
        3. Overall assessment of fit (High/Medium/Low)\n\
        4. REQUIRED_DOCUMENTS: the mandatory narrative or compliance documents to prepare \
        (e.g., technical proposal, past performance, resumes/CVs, corporate capabilities, \
        registrations, certificates, insurance, tax clearance).\n\
        5. REQUIRED_ATTACHMENTS: the specific attachment files typically uploaded with the \
        submission (e.g., completed forms, pricing sheets, resumes, certificates, signed \
        attachments), focusing on filenames/keywords we can use to find files.\n\
        \n\
        Format your response as:\n\
        MISSING_REQUIREMENTS: [list of missing requirements]\n\
        RECOMMENDATIONS: [list of specific recommendations]\n\
        REQUIRED_DOCUMENTS: [list of required documents]\n\
        REQUIRED_ATTACHMENTS: [list of required attachments]\n\
        ASSESSMENT: [High/Medium/Low]",
        title = opportunity.title,
        agency = opportunity.agency,
        description = opportunity.description,
        due_date = due_date,
        codes = opportunity.codes.join(", "),
        capabilities = capabilities,
    )
}
