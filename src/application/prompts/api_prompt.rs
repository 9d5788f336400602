use super::USAGE_EXAMPLE_MARKER;
use crate::architecture_generation::domain::{ProgrammingLanguage, SoftwareModule};

pub const API_SYSTEM_PROMPT: &str = "You are an expert software architect who generates clean, well-documented API interfaces for software modules. Generate practical, production-ready APIs with proper error handling and data structures.";

/// Per-language guidance embedded in the API prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStyle {
    pub style: &'static str,
    pub conventions: &'static str,
    pub include: &'static str,
}

impl LanguageStyle {
    pub fn for_language(language: ProgrammingLanguage) -> Self {
        match language {
            ProgrammingLanguage::TypeScript => Self {
                style: "TypeScript interfaces and classes with proper typing",
                conventions: "Use async/await, proper error types, and JSDoc comments",
                include: "interface, class, type definitions",
            },
            ProgrammingLanguage::Python => Self {
                style: "Python classes with type hints and docstrings",
                conventions: "Follow PEP 8, use type hints, include docstrings",
                include: "class definitions with @property decorators and type hints",
            },
            ProgrammingLanguage::C => Self {
                style: "C header file with function prototypes and structures",
                conventions: "Use proper naming conventions, include guards, and documentation",
                include: "typedef structs, function prototypes, and #define constants",
            },
            ProgrammingLanguage::Java => Self {
                style: "Java interfaces and classes with proper annotations",
                conventions: "Follow Java naming conventions, use JavaDoc, include annotations",
                include: "interface definitions, abstract classes, and enums",
            },
        }
    }
}

/// Surroundings of a module that are worth showing the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiContext {
    /// Requirement lines, already formatted as `<id>: <description>`
    pub requirements: Vec<String>,
    /// Names of modules wired to this one
    pub connected_modules: Vec<String>,
}

pub fn api_prompt(module: &SoftwareModule, language: ProgrammingLanguage, context: &ApiContext) -> String {
    let layer = module.layer.as_str();
    let style = LanguageStyle::for_language(language);

    let mut details = vec![format!("- Layer: {}", layer), format!("- Name: {}", module.name)];
    if let Some(description) = module.description.as_deref().filter(|d| !d.is_empty()) {
        details.push(format!("- Description: {}", description));
    }
    if !module.responsibilities.is_empty() {
        details.push(format!("- Responsibilities: {}", module.responsibilities.join(", ")));
    }
    if !module.dependencies.is_empty() {
        details.push(format!("- Dependencies: {}", module.dependencies.join(", ")));
    }
    if !module.interfaces.is_empty() {
        details.push(format!("- Interfaces: {}", module.interfaces.join(", ")));
    }

    let mut prompt = format!(
        "Generate a {language} API interface for a {layer} layer module named \"{name}\".\n\n\
         Module Details:\n{details}\n\n\
         Language Requirements:\n\
         - Style: {style}\n\
         - Conventions: {conventions}\n\
         - Include: {include}\n",
        language = language,
        layer = layer,
        name = module.name,
        details = details.join("\n"),
        style = style.style,
        conventions = style.conventions,
        include = style.include,
    );

    if !context.requirements.is_empty() {
        prompt.push_str(&format!("\nRelated Requirements:\n{}\n", context.requirements.join("\n")));
    }
    if !context.connected_modules.is_empty() {
        prompt.push_str(&format!("\nConnected Modules:\n{}\n", context.connected_modules.join(", ")));
    }

    prompt.push_str(&format!(
        "\nGenerate a comprehensive API that includes:\n\
         1. Main interface/class definition\n\
         2. Data structures/types needed\n\
         3. Core methods with parameters and return types\n\
         4. Error handling approach\n\
         5. Any constants or enums needed\n\n\
         After the API definition, add:\n\
         {marker}\n\
         Provide a brief usage example showing how to use this API.\n\n\
         Make the API practical and production-ready for a {layer} layer component.",
        marker = USAGE_EXAMPLE_MARKER,
        layer = layer,
    ));

    prompt
}
