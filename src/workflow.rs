//! Structured project workflow returned by the workflow feature

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keeps an explicit `null` as `Some(Value::Null)`; only absence is `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where D: Deserializer<'de>
{   Value::deserialize(deserializer).map(Some)
}

/// Kind of entry in the project tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind
{   Folder
  , File
}

/// One entry of the suggested project layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node
{   #[serde(rename = "type")]
    pub kind: NodeKind
  , pub name: String
  , #[serde(
      default,
      deserialize_with = "present",
      skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Value>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>
  , /// Keys the oracle added beyond the known shape
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Node
{   pub fn file(name: &str, description: &str) -> Self
    {   Node
        {   kind: NodeKind::File
          , name: name.to_string()
          , description: Some(Value::from(description))
          , children: None
          , extra: Map::new()
        }
    }

    pub fn folder(name: &str, children: Vec<Node>) -> Self
    {   Node
        {   kind: NodeKind::Folder
          , name: name.to_string()
          , description: None
          , children: Some(children)
          , extra: Map::new()
        }
    }
}

/// A progressive learning task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task
{   pub id: u64
  , pub title: String
  , pub completed: bool
  , /// Easy, Medium or Hard; kept as text so oracle output passes through
    pub difficulty: String
  , #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Task
{   fn pending(id: u64, title: &str, difficulty: &str) -> Self
    {   Task
        {   id
          , title: title.to_string()
          , completed: false
          , difficulty: difficulty.to_string()
          , extra: Map::new()
        }
    }
}

/// Project template: file tree, task list and setup commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow
{   pub title: String
  , pub description: String
  , pub structure: Vec<Node>
  , pub tasks: Vec<Task>
  , pub commands: Vec<String>
  , #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Workflow
{   /// Canned workflow used when the oracle output cannot be decoded
    pub fn fallback(skill: &str, project_type: &str) -> Self
    {   Workflow
        {   title: format!("{} - {} Project", skill, project_type)
          , description: format!(
              "A comprehensive {} project to master {}",
              project_type, skill
            )
          , structure: vec![
              Node::folder("src", vec![
                Node::file("index.js", "Main application file")
              ])
            , Node::file("README.md", "Project documentation")
            ]
          , tasks: vec![
              Task::pending(1, "Set up project structure", "Easy")
            , Task::pending(2, "Implement core functionality", "Medium")
            ]
          , commands: vec![
              "npm init -y".to_string()
            , "npm start".to_string()
            ]
          , extra: Map::new()
        }
    }
}
