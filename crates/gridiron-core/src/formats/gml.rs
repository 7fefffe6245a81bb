//! GML (Graph Modelling Language) format.
//!
//! The dialect used by the reference network datasets:
//!
//! ```text
//! graph [
//!   directed 0
//!   node [
//!     id 0
//!     label "Brigham Young"
//!   ]
//!   edge [
//!     source 0
//!     target 1
//!   ]
//! ]
//! ```
//!
//! Values are integers, reals, or quoted strings. `#` starts a comment.
//! Node ids may be integers or strings; an edge whose endpoint was never
//! declared as a node is a parse error. Unknown node attributes are kept
//! on the node; for edges only a `value`/`weight` attribute is carried.

use crate::{Error, Link, NetworkGraph, Node, NodeId, Result};
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// GML format handler.
pub struct Gml;

impl Gml {
    /// Parse GML from a reader.
    pub fn read<R: BufRead>(mut reader: R) -> Result<NetworkGraph> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::from_str(&source)
    }

    /// Parse GML from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Result<NetworkGraph> {
        let tokens = tokenize(source)?;
        parse(&tokens)
    }

    /// Write a graph in GML format.
    pub fn write<W: Write>(graph: &NetworkGraph, mut writer: W) -> Result<()> {
        writeln!(writer, "graph [")?;
        writeln!(writer, "  directed {}", i32::from(graph.is_directed()))?;

        for node in graph.nodes() {
            writeln!(writer, "  node [")?;
            writeln!(writer, "    id {}", format_id(&node.id))?;
            if let Some(ref label) = node.label {
                writeln!(writer, "    label \"{}\"", label)?;
            }
            let mut attrs: Vec<_> = node.attributes.iter().collect();
            attrs.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in attrs {
                match value {
                    serde_json::Value::Number(n) => writeln!(writer, "    {} {}", key, n)?,
                    serde_json::Value::String(s) => writeln!(writer, "    {} \"{}\"", key, s)?,
                    _ => {}
                }
            }
            writeln!(writer, "  ]")?;
        }

        let pg = graph.as_petgraph();
        for edge in pg.raw_edges() {
            writeln!(writer, "  edge [")?;
            writeln!(writer, "    source {}", format_id(&pg[edge.source()].id))?;
            writeln!(writer, "    target {}", format_id(&pg[edge.target()].id))?;
            if let Some(weight) = edge.weight.weight {
                writeln!(writer, "    weight {}", weight)?;
            }
            writeln!(writer, "  ]")?;
        }

        writeln!(writer, "]")?;
        Ok(())
    }

    /// Convert a graph to a GML string.
    pub fn to_string(graph: &NetworkGraph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}

/// Quote ids that are not plain integers.
fn format_id(id: &NodeId) -> String {
    if id.as_str().parse::<i64>().is_ok() {
        id.as_str().to_string()
    } else {
        format!("\"{}\"", id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Key(String),
    Int(i64),
    Float(f64),
    Str(String),
    Open,
    Close,
}

/// Tokenize GML source, tracking 1-based line numbers.
fn tokenize(source: &str) -> Result<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        let line_no = line_no + 1;
        let mut chars = line.char_indices().peekable();

        while let Some(&(start, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else if c == '#' {
                break;
            } else if c == '[' {
                chars.next();
                tokens.push((line_no, Token::Open));
            } else if c == ']' {
                chars.next();
                tokens.push((line_no, Token::Close));
            } else if c == '"' {
                chars.next();
                let mut value = String::new();
                let mut closed = false;
                for (_, sc) in chars.by_ref() {
                    if sc == '"' {
                        closed = true;
                        break;
                    }
                    value.push(sc);
                }
                if !closed {
                    return Err(Error::Gml {
                        line: line_no,
                        message: "unterminated string".to_string(),
                    });
                }
                tokens.push((line_no, Token::Str(value)));
            } else {
                let mut end = start;
                while let Some(&(i, nc)) = chars.peek() {
                    if nc.is_whitespace() || nc == '[' || nc == ']' || nc == '"' || nc == '#' {
                        break;
                    }
                    end = i + nc.len_utf8();
                    chars.next();
                }
                let word = &line[start..end];
                let token = if let Ok(n) = word.parse::<i64>() {
                    Token::Int(n)
                } else if let Ok(f) = word.parse::<f64>() {
                    Token::Float(f)
                } else {
                    Token::Key(word.to_string())
                };
                tokens.push((line_no, token));
            }
        }
    }

    Ok(tokens)
}

#[derive(Debug, Default)]
struct NodeRecord {
    line: usize,
    id: Option<NodeId>,
    label: Option<String>,
    attributes: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Default)]
struct EdgeRecord {
    line: usize,
    source: Option<NodeId>,
    target: Option<NodeId>,
    weight: Option<f64>,
}

struct Cursor<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<&'a (usize, Token)> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |(line, _)| *line)
    }
}

fn parse(tokens: &[(usize, Token)]) -> Result<NetworkGraph> {
    let mut cursor = Cursor { tokens, pos: 0 };

    // Scan top-level entries until the graph block; `Creator`-style
    // headers are key/value pairs we pass over.
    while let Some((line, token)) = cursor.next() {
        match token {
            Token::Key(key) if key == "graph" => {
                expect_open(&mut cursor, *line)?;
                return parse_graph(&mut cursor);
            }
            Token::Key(_) => skip_value(&mut cursor, *line)?,
            _ => {
                return Err(Error::Gml {
                    line: *line,
                    message: format!("unexpected token {:?} at top level", token),
                })
            }
        }
    }

    Err(Error::Gml {
        line: cursor.last_line(),
        message: "no graph block found".to_string(),
    })
}

fn parse_graph(cursor: &mut Cursor<'_>) -> Result<NetworkGraph> {
    let mut directed = false;
    let mut nodes: Vec<NodeRecord> = Vec::new();
    let mut edges: Vec<EdgeRecord> = Vec::new();

    loop {
        let (line, token) = cursor.next().ok_or_else(|| Error::Gml {
            line: cursor.last_line(),
            message: "unclosed graph block".to_string(),
        })?;

        match token {
            Token::Close => break,
            Token::Key(key) if key == "directed" => {
                directed = match cursor.next() {
                    Some((_, Token::Int(v))) => *v != 0,
                    _ => {
                        return Err(Error::Gml {
                            line: *line,
                            message: "directed expects 0 or 1".to_string(),
                        })
                    }
                };
            }
            Token::Key(key) if key == "node" => {
                expect_open(cursor, *line)?;
                nodes.push(parse_node(cursor, *line)?);
            }
            Token::Key(key) if key == "edge" => {
                expect_open(cursor, *line)?;
                edges.push(parse_edge(cursor, *line)?);
            }
            Token::Key(_) => skip_value(cursor, *line)?,
            _ => {
                return Err(Error::Gml {
                    line: *line,
                    message: format!("unexpected token {:?} in graph block", token),
                })
            }
        }
    }

    build_graph(directed, nodes, edges)
}

fn parse_node(cursor: &mut Cursor<'_>, open_line: usize) -> Result<NodeRecord> {
    let mut record = NodeRecord {
        line: open_line,
        ..NodeRecord::default()
    };

    loop {
        let (line, token) = cursor.next().ok_or_else(|| Error::Gml {
            line: open_line,
            message: "unclosed node block".to_string(),
        })?;

        match token {
            Token::Close => break,
            Token::Key(key) => {
                let (value_line, value) = next_scalar(cursor, *line, key)?;
                match key.as_str() {
                    "id" => record.id = Some(scalar_to_id(&value)),
                    "label" => match value {
                        Token::Str(s) => record.label = Some(s),
                        other => record.label = Some(scalar_to_id(&other).0),
                    },
                    _ => {
                        record
                            .attributes
                            .insert(key.clone(), scalar_to_json(&value, value_line)?);
                    }
                }
            }
            _ => {
                return Err(Error::Gml {
                    line: *line,
                    message: format!("unexpected token {:?} in node block", token),
                })
            }
        }
    }

    Ok(record)
}

fn parse_edge(cursor: &mut Cursor<'_>, open_line: usize) -> Result<EdgeRecord> {
    let mut record = EdgeRecord {
        line: open_line,
        ..EdgeRecord::default()
    };

    loop {
        let (line, token) = cursor.next().ok_or_else(|| Error::Gml {
            line: open_line,
            message: "unclosed edge block".to_string(),
        })?;

        match token {
            Token::Close => break,
            Token::Key(key) => {
                let (value_line, value) = next_scalar(cursor, *line, key)?;
                match key.as_str() {
                    "source" => record.source = Some(scalar_to_id(&value)),
                    "target" => record.target = Some(scalar_to_id(&value)),
                    "value" | "weight" => match value {
                        Token::Int(n) => record.weight = Some(n as f64),
                        Token::Float(f) => record.weight = Some(f),
                        _ => {
                            return Err(Error::Gml {
                                line: value_line,
                                message: format!("edge {} must be numeric", key),
                            })
                        }
                    },
                    _ => {}
                }
            }
            _ => {
                return Err(Error::Gml {
                    line: *line,
                    message: format!("unexpected token {:?} in edge block", token),
                })
            }
        }
    }

    Ok(record)
}

fn build_graph(
    directed: bool,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
) -> Result<NetworkGraph> {
    let mut graph = NetworkGraph::with_capacity(directed, nodes.len(), edges.len());

    for record in nodes {
        let id = record.id.ok_or_else(|| Error::Gml {
            line: record.line,
            message: "node record missing id".to_string(),
        })?;
        if graph.node(&id).is_some() {
            return Err(Error::Gml {
                line: record.line,
                message: format!("duplicate node id {}", id),
            });
        }
        let mut node = Node::new(id);
        node.label = record.label;
        node.attributes = record.attributes;
        graph.add_node(node);
    }

    for record in edges {
        let line = record.line;
        let source = record.source.ok_or_else(|| Error::Gml {
            line,
            message: "edge record missing source".to_string(),
        })?;
        let target = record.target.ok_or_else(|| Error::Gml {
            line,
            message: "edge record missing target".to_string(),
        })?;
        let link = record.weight.map_or_else(Link::new, Link::weighted);
        graph.add_edge(&source, &target, link).map_err(|e| {
            let id = match e {
                Error::UnknownNode(id) => id,
                _ => String::new(),
            };
            Error::Gml {
                line,
                message: format!("edge references undeclared node {}", id),
            }
        })?;
    }

    Ok(graph)
}

fn expect_open(cursor: &mut Cursor<'_>, line: usize) -> Result<()> {
    match cursor.next() {
        Some((_, Token::Open)) => Ok(()),
        _ => Err(Error::Gml {
            line,
            message: "expected [".to_string(),
        }),
    }
}

/// Consume a key's value: a scalar, or a bracketed block we have no use for.
fn skip_value(cursor: &mut Cursor<'_>, line: usize) -> Result<()> {
    match cursor.next() {
        Some((_, Token::Open)) => {
            let mut depth = 1_usize;
            while depth > 0 {
                match cursor.next() {
                    Some((_, Token::Open)) => depth += 1,
                    Some((_, Token::Close)) => depth -= 1,
                    Some(_) => {}
                    None => {
                        return Err(Error::Gml {
                            line,
                            message: "unclosed block".to_string(),
                        })
                    }
                }
            }
            Ok(())
        }
        Some(_) => Ok(()),
        None => Err(Error::Gml {
            line,
            message: "key without value".to_string(),
        }),
    }
}

fn next_scalar(cursor: &mut Cursor<'_>, line: usize, key: &str) -> Result<(usize, Token)> {
    match cursor.next() {
        Some((value_line, token @ (Token::Int(_) | Token::Float(_) | Token::Str(_)))) => {
            Ok((*value_line, token.clone()))
        }
        _ => Err(Error::Gml {
            line,
            message: format!("{} expects a scalar value", key),
        }),
    }
}

fn scalar_to_id(token: &Token) -> NodeId {
    match token {
        Token::Int(n) => NodeId::from(*n),
        Token::Float(f) => NodeId::new(f.to_string()),
        Token::Str(s) => NodeId::new(s.clone()),
        _ => unreachable!("next_scalar only yields scalars"),
    }
}

fn scalar_to_json(token: &Token, line: usize) -> Result<serde_json::Value> {
    match token {
        Token::Int(n) => Ok(serde_json::Value::from(*n)),
        Token::Float(f) => {
            serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| Error::Gml {
                    line,
                    message: format!("non-finite number {}", f),
                })
        }
        Token::Str(s) => Ok(serde_json::Value::from(s.clone())),
        _ => unreachable!("next_scalar only yields scalars"),
    }
}
