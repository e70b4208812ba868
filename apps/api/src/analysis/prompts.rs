// All LLM prompt constants for the analysis module.

/// System prompt for job-posting analysis — enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str =
    "You are a career strategist for senior software engineers. \
    Given a job posting, you identify what the company actually needs and \
    propose concrete interview projects that prove the candidate can deliver it. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{posting}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze the following job posting and propose interview projects.

Return a JSON object with this EXACT schema (no extra fields):
{
  "company": {
    "name": "Acme Corp",
    "industry": "logistics SaaS",
    "signals": ["first infra hire", "mentions scaling pains"]
  },
  "gap": {
    "gap": "The one most exploitable need the posting reveals",
    "evidence": "The phrase or requirement in the posting that shows it",
    "opportunity": "How a candidate can turn that need into an advantage"
  },
  "project_ideas": [
    {
      "title": "Short project name",
      "description": "What to build, in two sentences",
      "rationale": "Why this project speaks to this specific posting",
      "complexity": "weekend",
      "tech": ["Rust", "axum"]
    }
  ],
  "talking_points": ["A question or observation to raise in the interview"],
  "strategy": "One sentence describing how to position the application."
}

Rules:

COMPLEXITY (pick exactly one per idea):
- "weekend": buildable in a weekend
- "week": roughly a week of evenings
- "ambitious": a stretch project — impressive but risky to promise

PROJECT IDEAS: exactly 3, ordered from least to most ambitious. Each must be
buildable by one person with no access to the company's systems, and each must
trace back to something the posting actually says.

TALKING POINTS: 3 to 5, each tied to a concrete detail in the posting — never
generic interview advice.

SIGNALS: read between the lines — stack choices, team shape, growth stage,
pain points the posting admits to.

JOB POSTING:
{posting}"#;
