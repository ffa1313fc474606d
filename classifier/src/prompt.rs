/// Fixed skill vocabulary the completion service classifies against.
/// Names (including their quirks) must match what is stored on the
/// technology nodes, so they are kept verbatim.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Backend",
    "API Management / Orchestration",
    "Mobile AR",
    "Unit Testing",
    "Linux",
    "Voice",
    "Agile Development",
    "Git",
    "IoT",
    "Accessibility",
    "Responsiviness",
    "ORM",
    "Animation",
    "Blockchain",
    "Dast / Sast",
    "Serverless Architecture",
    "WebSocket",
    "SEO",
    "Frontend",
    "NoSQL",
    "Data Science",
    "Clean Code",
    "Devops",
    "Microservices Architecture",
    "CI / CD",
    "Automated Testing",
    "Design Pattern",
    "SQL",
    "TDD",
    "Network",
    "Mixed Reality (AR/VR/XR)",
    "REST",
    "MacOs",
    "Cyber Security",
    "HTML",
    "CSS",
    "Python",
    "Java",
    "PHP",
    "C++",
    "Kotlin",
    "Rust",
    "Flutter",
    "Angular",
    "React Native",
    "React",
    "Redux",
    "Next.js",
    "Typescript",
    "Ruby",
    "SOLID",
    "Sass",
    "Gulp",
    "Yarn",
    "Jest",
    "Machine Learning",
    "ASP.NET MVC",
    "Xamarin / Maui",
    "Blazor",
    "AWS",
    "Shift",
    "CI/CD",
    "Apache",
    "Azure",
    "IIS",
    "Ngnix",
    "Windows",
    "C#",
    "Kubernets",
    "Javascript",
    ".NET",
    "Docker",
    "C",
    "Octopus",
    "Go",
    "Vue",
    "Google Tag Manager",
    "jQuery",
    "Entity Framework",
    ".NET Core",
    "Pug.js",
    "Salesforce Marketing Cloud",
    "Postgres",
    "Firebase",
    "Selenium",
    "Gunicorn",
    "Cypress",
    "Google Analytics",
    "Flask",
    "Rails",
    "Adobe Analytics",
    "Adobe Launch",
    "Node.js",
    "Vuforia",
    "NPM",
    "RPC",
    "Spring",
    "Team Management",
    "English Level",
    "Adobe Target",
    "AEM",
    "WordPress",
    "Drupal",
    "Shell Scripting",
    "Sitecore",
    "Project Management",
    "Wix",
    "Criativity",
    "Problem Solving",
    "Client Relations",
    "Colaboration",
    "Empathy",
    "Time Management",
    "Express",
    "Leadership",
    "Nest.js",
    "Microsoft Sharepoint",
    "Nintex forms",
    "Redis",
    "Nintex Workflows",
    "Sharegate",
];

/// Response prefix meaning the description was too ambiguous to classify.
/// A completion beginning with this text is a defined terminal outcome,
/// not an error.
pub const TOO_SPECIFIC_SENTINEL: &str =
    "It sounds like your project is very specific, do you want to set up a meeting to talk about it?";

/// Build the fixed classification prompt for one project description.
/// The output contract it states (a JSON skill-to-level object ordered
/// major-to-minor, or the sentinel) is what [`crate::parse_classification`]
/// expects back.
pub fn build_project_prompt(description: &str) -> String {
    let skills = SKILL_VOCABULARY
        .iter()
        .map(|skill| format!("'{skill}'"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You're a technology project manager.\n\
         You will classify which technologies are best to be used in a given project.\n\
         Only if they are mentioned in the description.\n\
         If not, you say: {TOO_SPECIFIC_SENTINEL}\n\
         If there is any correlation between technologies, you suggest the correlations.\n\
         \n\
         project description: {description}\n\
         \n\
         Always contemplate the whole scenario.\n\
         Don't describe the technologies, just suggest them.\n\
         Focus on the core of the project and the best technologies for it.\n\
         Describe the level of knowledge required for each technology in the project, on a scale of 1 to 5.\n\
         The output should contain only the technology and level of expertise required.\n\
         \n\
         Among these skills, try to approximate the correlated ones that are mentioned in the project.\n\
         Skills :\n\
         [{skills}]\n\
         \n\
         Knowledge Level Classifier :\n\
         0- I don't know this tech\n\
         1- Basic Proficiency\n\
         2- Learning the skill\n\
         3- Comfortable working with this skill\n\
         4- Expert at this skill\n\
         5- Can teach others this skill\n\
         \n\
         Don't write techs in other format, get exactly representation of Skills list to classify.\n\
         Make a json in this format : tech : level\n\
         Order by major level to minor level\n\
         Remember if no tech or programming language as cited.\n\
         Say \"{TOO_SPECIFIC_SENTINEL}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_and_vocabulary() {
        let prompt = build_project_prompt("A realtime chat app with a Rust backend");

        assert!(prompt.contains("A realtime chat app with a Rust backend"));
        assert!(prompt.contains("'Rust'"));
        assert!(prompt.contains("'Salesforce Marketing Cloud'"));
        assert!(prompt.contains(TOO_SPECIFIC_SENTINEL));
    }

    #[test]
    fn test_vocabulary_names_quote_cleanly() {
        assert!(SKILL_VOCABULARY.len() > 100);
        assert!(SKILL_VOCABULARY.iter().all(|skill| !skill.contains('\'')));
    }
}
