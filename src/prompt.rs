//! Prompt templates for each generation feature
//!
//! Every function here is pure: the same request always yields the same
//! prompt. Missing caller fields are rendered as `undefined`.

use crate::request::{or_undefined, SpecRequest, TranslateRequest, WorkflowRequest};

const SPEC_SYSTEM: &str = "You are an educational curriculum designer who \
creates detailed learning specifications. Your specs are used by educators \
and learning platforms to deliver structured courses.";

const WORKFLOW_SYSTEM: &str = "You are a project architect who creates \
structured learning workflows. Always respond with valid JSON that matches \
the requested format exactly.";

const TRANSLATION_SYSTEM: &str = "You are an expert educator and translator \
who specializes in making technical skills accessible across languages and \
cultures. You adapt teaching methods to different learning styles and \
cultural contexts.";

/// System instruction and user prompt for one oracle call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt
{   pub system: String
  , pub user: String
}

pub fn compose_spec(req: &SpecRequest) -> Prompt
{   let modules: String = req.modules
      .iter()
      .enumerate()
      .map(|(index, module)| format!(
        "\nModule {}: {}\n- Duration: {}\n- Difficulty: {}\n\
         - Description: {}\n- Objectives: {}\n",
        index + 1,
        or_undefined(&module.title),
        or_undefined(&module.duration),
        or_undefined(&module.difficulty),
        or_undefined(&module.description),
        module.objectives.join(", ")
      ))
      .collect();

    let user = format!(
"Create a comprehensive learning specification document for: {title}

Description: {description}

Modules:
{modules}

Generate a detailed markdown specification that includes:
1. Overview and learning outcomes
2. Detailed module breakdown with activities
3. Assessment criteria
4. Prerequisites and resources
5. Timeline and milestones
6. Success metrics

Make it professional, comprehensive, and suitable for educational use.",
      title = or_undefined(&req.title),
      description = or_undefined(&req.description),
      modules = modules
    );

    Prompt
    {   system: SPEC_SYSTEM.to_string()
      , user
    }
}

pub fn compose_workflow(req: &WorkflowRequest) -> Prompt
{   let user = format!(
r#"Generate a comprehensive {project_type} workflow for learning: {skill}

Please provide a detailed JSON response with the following structure:
{{
  "title": "Project title",
  "description": "Project description",
  "structure": [
    {{
      "type": "folder|file",
      "name": "filename",
      "description": "purpose",
      "children": [] // for folders only
    }}
  ],
  "tasks": [
    {{
      "id": number,
      "title": "task description",
      "completed": false,
      "difficulty": "Easy|Medium|Hard"
    }}
  ],
  "commands": ["command1", "command2"]
}}

Make it practical, educational, and appropriate for the skill level. Include 5-7 progressive tasks and relevant setup commands."#,
      project_type = or_undefined(&req.project_type),
      skill = or_undefined(&req.skill)
    );

    Prompt
    {   system: WORKFLOW_SYSTEM.to_string()
      , user
    }
}

pub fn compose_translation(req: &TranslateRequest) -> Prompt
{   let skill = or_undefined(&req.skill);
    let language = or_undefined(&req.language);
    let level = or_undefined(&req.level);

    let user = format!(
"You are a Universal Skill Translator. Translate the following skill learning request into a comprehensive, culturally-adapted lesson in {language} for a {level} learner.

Skill to learn: {skill}
Target language: {language}
Learner level: {level}

Please provide:
1. A clear introduction to the skill in {language}
2. Step-by-step learning approach appropriate for {level} level
3. Cultural context and examples relevant to {language} speakers
4. Practical exercises or examples
5. Key terminology with translations
6. Next steps for continued learning

Make it engaging, practical, and culturally relevant. Use simple language for beginners, more technical terms for advanced learners."
    );

    Prompt
    {   system: TRANSLATION_SYSTEM.to_string()
      , user
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::request::Module;

    fn module(title: &str, objectives: &[&str]) -> Module
    {   Module
        {   title: Some(title.to_string())
          , duration: Some("1 week".to_string())
          , difficulty: Some("Beginner".to_string())
          , description: None
          , objectives: objectives.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn spec_prompt_numbers_modules_in_order()
    {   let req = SpecRequest
        {   title: Some("Git".to_string())
          , description: Some("Version control".to_string())
          , modules: vec![
              module("Init", &["create repo", "first commit"])
            , module("Branching", &["branch"])
            ]
        };
        let prompt = compose_spec(&req);
        assert!(prompt.user.starts_with(
          "Create a comprehensive learning specification document for: Git"
        ));
        let first = prompt.user.find("Module 1: Init").unwrap();
        let second = prompt.user.find("Module 2: Branching").unwrap();
        assert!(first < second);
        assert!(prompt.user.contains("- Objectives: create repo, first commit\n"));
        assert!(prompt.user.contains("- Description: undefined\n"));
        assert!(prompt.system.contains("curriculum designer"));
    }

    #[test]
    fn workflow_prompt_keeps_json_skeleton()
    {   let req = WorkflowRequest
        {   skill: Some("Rust".to_string())
          , project_type: Some("CLI".to_string())
        };
        let prompt = compose_workflow(&req);
        assert!(prompt.user.starts_with(
          "Generate a comprehensive CLI workflow for learning: Rust"
        ));
        assert!(prompt.user.contains("\"commands\": [\"command1\", \"command2\"]"));
        assert!(prompt.user.contains("{\n  \"title\""));
        assert!(prompt.system.contains("valid JSON"));
    }

    #[test]
    fn missing_fields_render_as_undefined()
    {   let req = TranslateRequest
        {   skill: Some("Git basics".to_string())
          , language: None
          , level: Some("Beginner".to_string())
        };
        let prompt = compose_translation(&req);
        assert!(prompt.user.contains("Target language: undefined"));
        assert!(prompt.user.contains("Learner level: Beginner"));
        assert!(prompt.user.contains("Skill to learn: Git basics"));
    }

    #[test]
    fn composing_is_deterministic()
    {   let req = WorkflowRequest
        {   skill: None
          , project_type: None
        };
        assert_eq!(compose_workflow(&req), compose_workflow(&req));
    }
}
