use crate::width::strip_markup;

/// A node of a styled text tree.
///
/// Nodes may carry literal text, children, or both. Style-only containers
/// simply return an empty [`text`](StyledText::text).
pub trait StyledText: Sized {
    /// Direct children, in display order.
    fn children(&self) -> &[Self];

    /// The node's own literal text, excluding descendants.
    fn text(&self) -> &str;

    /// Bold decoration set on this node. `None` inherits from the parent.
    fn bold(&self) -> Option<bool>;

    /// Build a parent holding a plain `prefix` followed by `original`.
    fn compose(prefix: String, original: Self) -> Self;
}

/// Literal text of one node together with its resolved bold flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

/// Collect text runs in depth-first, pre-order traversal.
pub fn runs<T: StyledText>(tree: &T) -> Vec<TextRun> {
    let mut out = Vec::new();
    collect_runs(tree, false, &mut out);
    out
}

fn collect_runs<T: StyledText>(node: &T, inherited_bold: bool, out: &mut Vec<TextRun>) {
    let bold = node.bold().unwrap_or(inherited_bold);
    let text = strip_markup(node.text());
    if !text.is_empty() {
        out.push(TextRun {
            text: text.into_owned(),
            bold,
        });
    }
    for child in node.children() {
        collect_runs(child, bold, out);
    }
}

/// Flatten a tree into `(character, is_bold)` pairs.
pub fn styled_chars<T: StyledText>(tree: &T) -> Vec<(char, bool)> {
    runs(tree)
        .into_iter()
        .flat_map(|run| {
            let bold = run.bold;
            run.text.chars().map(move |c| (c, bold)).collect::<Vec<_>>()
        })
        .collect()
}

/// Minimal styled text tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
    pub bold: Option<bool>,
    pub children: Vec<TextNode>,
}

impl TextNode {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_child(mut self, child: TextNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TextNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Concatenated literal text of the whole tree.
    pub fn plain_text(&self) -> String {
        runs(self).into_iter().map(|run| run.text).collect()
    }
}

impl StyledText for TextNode {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn text(&self) -> &str {
        &self.content
    }

    fn bold(&self) -> Option<bool> {
        self.bold
    }

    fn compose(prefix: String, original: Self) -> Self {
        TextNode::empty()
            .with_child(TextNode::text(prefix))
            .with_child(original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextNode {
        TextNode::text("Hi ")
            .with_child(TextNode::text("there").with_bold(true))
            .with_child(
                TextNode::empty()
                    .with_bold(true)
                    .with_child(TextNode::text("!"))
                    .with_child(TextNode::text("?").with_bold(false)),
            )
    }

    #[test]
    fn runs_follow_depth_first_order() {
        let runs = runs(&sample());
        let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Hi ", "there", "!", "?"]);
    }

    #[test]
    fn bold_is_inherited_and_overridable() {
        let bolds: Vec<_> = runs(&sample()).iter().map(|r| r.bold).collect();
        assert_eq!(bolds, vec![false, true, true, false]);
    }

    #[test]
    fn styled_chars_flatten_runs() {
        let node = TextNode::text("ab").with_child(TextNode::text("c").with_bold(true));
        assert_eq!(
            styled_chars(&node),
            vec![('a', false), ('b', false), ('c', true)]
        );
    }

    #[test]
    fn markup_is_stripped_from_content() {
        let node = TextNode::text("\x1b[31mred\x1b[0m");
        assert_eq!(node.plain_text(), "red");
    }

    #[test]
    fn empty_tree_has_no_runs() {
        assert!(runs(&TextNode::empty()).is_empty());
    }

    #[test]
    fn compose_prefixes_original() {
        let original = TextNode::text("x").with_bold(true);
        let composed = TextNode::compose("  ".to_string(), original.clone());
        assert_eq!(composed.children.len(), 2);
        assert_eq!(composed.children[1], original);
        assert_eq!(composed.plain_text(), "  x");
    }
}
