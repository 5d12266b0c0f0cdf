// File: crates/cartesian-samples/src/document.rs
// Summary: Headless host document: an ordered list of controls and chart surfaces.

use std::fmt;
use std::fmt::Write as _;

/// Handle to a node appended to a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A range input.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    /// Rendered width in pixels.
    pub width: u32,
}

impl Slider {
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        let mut s = Self { min, max, step, value: min, width: 400 };
        s.value = s.snap(value);
        s
    }

    /// Clamp into `[min, max]` and round to the nearest step from `min`.
    pub fn snap(&self, v: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        if v.is_nan() {
            return lo;
        }
        let v = v.clamp(lo, hi);
        if self.step > 0.0 {
            let snapped = lo + ((v - lo) / self.step).round() * self.step;
            snapped.min(hi)
        } else {
            v
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Break,
    Button { text: String },
    Slider(Slider),
    Checkbox { label: String, checked: bool },
    ChartSurface { title: String, width: u32, height: u32 },
}

impl Node {
    pub fn button(text: impl Into<String>) -> Self {
        Node::Button { text: text.into() }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Node::Checkbox { label: label.into(), checked }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self { Self::default() }

    pub fn append(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> { self.nodes.get(id.0) }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> { self.nodes.get_mut(id.0) }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// First button with the given text.
    pub fn find_button(&self, text: &str) -> Option<NodeId> {
        self.nodes().find(|(_, n)| matches!(n, Node::Button { text: t } if t == text)).map(|(id, _)| id)
    }

    pub fn slider(&self, id: NodeId) -> Option<&Slider> {
        match self.node(id)? {
            Node::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn checked(&self, id: NodeId) -> Option<bool> {
        match self.node(id)? {
            Node::Checkbox { checked, .. } => Some(*checked),
            _ => None,
        }
    }

    /// Readable outline, one line per visual row (breaks start a new row).
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut row: Vec<String> = Vec::new();
        let flush = |row: &mut Vec<String>, out: &mut String| {
            if !row.is_empty() {
                let _ = writeln!(out, "{}", row.join(" "));
                row.clear();
            }
        };
        for node in &self.nodes {
            match node {
                Node::Break => flush(&mut row, &mut out),
                Node::Button { text } => row.push(format!("[{text}]")),
                Node::Slider(s) => row.push(format!("<{}..{} step {} = {}>", s.min, s.max, s.step, s.value)),
                Node::Checkbox { label, checked } => {
                    row.push(format!("[{}] {label}", if *checked { "x" } else { " " }))
                }
                Node::ChartSurface { title, width, height } => {
                    flush(&mut row, &mut out);
                    let _ = writeln!(out, "<chart \"{title}\" {width}x{height}>");
                }
            }
        }
        flush(&mut row, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_and_snaps() {
        let s = Slider::new(0.0, 10.0, 0.5, 2.0);
        assert_eq!(s.value, 2.0);
        assert_eq!(s.snap(12.0), 10.0);
        assert_eq!(s.snap(-3.0), 0.0);
        assert_eq!(s.snap(3.3), 3.5);
        assert_eq!(s.snap(f64::NAN), 0.0);
    }

    #[test]
    fn outline_groups_rows_at_breaks() {
        let mut doc = Document::new();
        doc.append(Node::ChartSurface { title: "Sine".into(), width: 600, height: 600 });
        doc.append(Node::Break);
        doc.append(Node::button("Save Chart Image"));
        doc.append(Node::button("No data"));
        doc.append(Node::Break);
        doc.append(Node::checkbox("nice", true));
        let outline = doc.outline();
        assert_eq!(outline, "<chart \"Sine\" 600x600>\n[Save Chart Image] [No data]\n[x] nice\n");
        assert!(doc.find_button("No data").is_some());
    }
}
