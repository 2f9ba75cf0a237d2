// Canned text for the mock generation endpoints.
// Placeholders `{job_role}` and `{company}` are substituted verbatim.

const RESUME_BULLET_TEMPLATES: [&str; 3] = [
    "Developed and maintained scalable web applications using modern {job_role} technologies, \
     resulting in 25% improved user engagement.",
    "Led cross-functional team of 5 developers in {job_role} projects, delivering high-quality \
     solutions 15% ahead of schedule.",
    "Implemented advanced {job_role} features and optimizations that reduced loading time by 40% \
     and improved overall system performance.",
];

const PREP_PLAN_TEMPLATE: &str = "\
Interview Preparation Plan for {job_role} at {company}

1. TECHNICAL PREPARATION
   • Review core {job_role} concepts and best practices
   • Practice coding problems on platforms like LeetCode or HackerRank
   • Prepare to discuss your past projects and technical decisions
   • Review system design principles relevant to the role

2. COMPANY RESEARCH
   • Study {company}'s mission, values, and recent news
   • Research the team you'll be working with
   • Understand {company}'s products and services
   • Review the company's engineering culture and practices

3. BEHAVIORAL QUESTIONS
   • Prepare STAR method answers for common behavioral questions
   • Think of examples that demonstrate leadership, problem-solving, and teamwork
   • Practice explaining complex technical concepts in simple terms
   • Prepare questions to ask the interviewer about the role and company

4. SPECIFIC FOCUS AREAS
   • Research {company}'s technology stack and tools
   • Understand the specific requirements for {job_role} at {company}
   • Review any publicly available engineering blogs or documentation
   • Prepare for role-specific scenarios and challenges

5. FINAL PREPARATION
   • Practice mock interviews with peers or mentors
   • Review your resume and be ready to discuss every point
   • Prepare thoughtful questions about the role, team, and company culture
   • Plan your logistics for the interview day

Good luck with your interview!";

/// Three quantified resume bullets for the given role.
///
/// `experience` is accepted for parity with the real endpoint; the canned
/// bullets do not use it.
pub fn resume_bullets(job_role: &str, _experience: &str) -> Vec<String> {
    RESUME_BULLET_TEMPLATES
        .iter()
        .map(|template| template.replace("{job_role}", job_role))
        .collect()
}

pub fn prep_plan(job_role: &str, company: &str) -> String {
    PREP_PLAN_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{company}", company)
}
