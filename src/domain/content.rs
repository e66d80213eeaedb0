//! Content tree model for project documents.
//!
//! Source content is loosely shaped JSON: bare strings stand in for paragraphs,
//! objects carrying `main` but no `type` are list items, and tables may hold
//! strings, bullet objects or arrays of bullet objects in their cells. All of
//! that is normalised here, once, when content is loaded. The renderer only ever
//! sees typed [`Node`] variants; anything that cannot be understood becomes
//! [`Node::Unknown`] and renders nothing.

use serde::Deserialize;
use serde_json::{Map, Value};

type Parsed<T> = Result<T, String>;

/// Ordered sequence of nodes; order is display order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Document(Vec<Node>);

impl Document {
    /// Normalise an arbitrary JSON value into a document.
    ///
    /// Arrays yield one node per element, a bare string yields a single
    /// paragraph and `null` yields an empty document. Any other value becomes a
    /// single [`Node::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Array(items) => Self(items.iter().map(Node::from_value).collect()),
            other => Self(vec![Node::from_value(other)]),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of unrecognised nodes anywhere in the tree.
    pub fn unknown_count(&self) -> usize {
        self.0
            .iter()
            .map(|node| match node {
                Node::Unknown { .. } => 1,
                Node::Subheading { content, .. } => content.unknown_count(),
                _ => 0,
            })
            .sum()
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    PlainText { text: String },
    Heading { text: String },
    Subheading { text: String, content: Document },
    Image(Image),
    Bullet(BulletItem),
    Main(MainItem),
    Numbered(NumberedItem),
    Table(Table),
    /// A node whose shape was not understood at load time.
    Unknown { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletItem {
    pub text: String,
    pub sub_items: Option<SubItems>,
    pub table: Option<Table>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainItem {
    pub main: String,
    pub sub_items: Option<SubItems>,
    pub numbered_items: Vec<NumberedItem>,
    pub image: Option<String>,
    pub table: Option<Table>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberedItem {
    pub main: String,
    pub sub_items: Vec<String>,
}

/// Content shown beneath a bullet. Never empty: an empty list or string is
/// normalised to no sub-items at all.
#[derive(Debug, Clone, PartialEq)]
pub enum SubItems {
    List(Vec<String>),
    Note(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Declared header labels, if the source supplied any.
    pub headers: Vec<String>,
    /// Rows as written; rows are not required to share a width.
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Bullets(Vec<String>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Cell::Text(text.clone()),
            Value::Number(number) => Cell::Text(number.to_string()),
            Value::Bool(flag) => Cell::Text(flag.to_string()),
            Value::Array(items) => Cell::Bullets(items.iter().filter_map(bullet_entry).collect()),
            Value::Object(map) if is_bullet(map) => match map.get("text") {
                Some(Value::String(text)) => Cell::Bullets(vec![text.clone()]),
                _ => Cell::Text(String::new()),
            },
            _ => Cell::Text(String::new()),
        }
    }
}

impl Node {
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::Unknown {
            reason: reason.into(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Node::PlainText { text: text.clone() },
            Value::Object(map) => Self::from_object(map).unwrap_or_else(Node::unknown),
            other => Node::unknown(format!("unsupported {} node", json_kind(other))),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Parsed<Self> {
        let tag = match map.get("type") {
            Some(Value::String(tag)) => Some(tag.as_str()),
            Some(other) => return Err(format!("node `type` is a {}", json_kind(other))),
            None => None,
        };

        match tag {
            None if map.contains_key("main") => parse_main(map).map(Node::Main),
            None => Err("node has neither `type` nor `main`".to_string()),
            Some("paragraph" | "text") => {
                required_str(map, "text").map(|text| Node::PlainText { text })
            }
            Some("heading") => required_str(map, "text").map(|text| Node::Heading { text }),
            Some("subheading") => {
                let text = required_str(map, "text")?;
                let content = map.get("content").map(Document::from_value).unwrap_or_default();
                Ok(Node::Subheading { text, content })
            }
            Some("image") => Ok(Node::Image(Image {
                src: required_str(map, "src")?,
                alt: optional_str(map, "alt"),
            })),
            Some("bullet") => parse_bullet(map).map(Node::Bullet),
            Some("main") => parse_main(map).map(Node::Main),
            Some("numbered") => parse_numbered(map).map(Node::Numbered),
            Some("table") => Table::from_map(map).map(Node::Table),
            Some(other) => Err(format!("unrecognised node type `{other}`")),
        }
    }
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            headers: Vec::new(),
            rows,
        }
    }

    fn from_value(value: &Value) -> Parsed<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(format!("table is a {}", json_kind(other))),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Parsed<Self> {
        let rows = match map.get("rows") {
            Some(Value::Array(rows)) => rows
                .iter()
                .map(|row| match row {
                    Value::Array(cells) => cells.iter().map(Cell::from_value).collect(),
                    other => vec![Cell::from_value(other)],
                })
                .collect(),
            Some(other) => return Err(format!("table `rows` is a {}", json_kind(other))),
            None => return Err("table is missing `rows`".to_string()),
        };

        let headers = match map.get("headers") {
            Some(Value::Array(headers)) => headers
                .iter()
                .map(|header| match Cell::from_value(header) {
                    Cell::Text(text) => text,
                    Cell::Bullets(entries) => entries.join(", "),
                })
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self { headers, rows })
    }
}

fn parse_bullet(map: &Map<String, Value>) -> Parsed<BulletItem> {
    Ok(BulletItem {
        text: required_str(map, "text")?,
        sub_items: sub_items(map.get("subItems")),
        table: optional_table(map),
    })
}

fn parse_main(map: &Map<String, Value>) -> Parsed<MainItem> {
    let numbered_items = match map.get("numberedItems") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(entry) => parse_numbered(entry).ok(),
                Value::String(text) => Some(NumberedItem {
                    main: text.clone(),
                    sub_items: Vec::new(),
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(MainItem {
        main: required_str(map, "main")?,
        sub_items: sub_items(map.get("subItems")),
        numbered_items,
        image: optional_str(map, "image"),
        table: optional_table(map),
    })
}

fn parse_numbered(map: &Map<String, Value>) -> Parsed<NumberedItem> {
    let sub_items = match sub_items(map.get("subItems")) {
        Some(SubItems::List(items)) => items,
        Some(SubItems::Note(note)) => vec![note],
        None => Vec::new(),
    };

    Ok(NumberedItem {
        main: required_str(map, "main")?,
        sub_items,
    })
}

fn sub_items(value: Option<&Value>) -> Option<SubItems> {
    match value? {
        Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            (!items.is_empty()).then_some(SubItems::List(items))
        }
        Value::String(note) if !note.is_empty() => Some(SubItems::Note(note.clone())),
        _ => None,
    }
}

fn optional_table(map: &Map<String, Value>) -> Option<Table> {
    map.get("table").and_then(|value| Table::from_value(value).ok())
}

fn required_str(map: &Map<String, Value>, key: &str) -> Parsed<String> {
    match map.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(format!("field `{key}` is a {}", json_kind(other))),
        None => Err(format!("missing required field `{key}`")),
    }
}

fn optional_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn is_bullet(map: &Map<String, Value>) -> bool {
    matches!(map.get("type"), Some(Value::String(tag)) if tag == "bullet")
}

fn bullet_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) if is_bullet(map) => map.get("text")?.as_str().map(str::to_string),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
