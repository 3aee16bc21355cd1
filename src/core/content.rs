use scraper::{Html, Node};

/// Callback surface for walking an HTML document: one hook per opening tag,
/// one per text run.
pub trait ContentVisitor {
    fn start_tag(&mut self, tag: &str);
    fn text(&mut self, data: &str);
}

/// Collects the trimmed, non-empty text runs of a document along with the
/// most recently opened tag.
#[derive(Debug, Default)]
pub struct TextCollector {
    content: Vec<String>,
    current_tag: Option<String>,
}

impl TextCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn current_tag(&self) -> Option<&str> {
        self.current_tag.as_deref()
    }
}

impl ContentVisitor for TextCollector {
    fn start_tag(&mut self, tag: &str) {
        self.current_tag = Some(tag.to_string());
    }

    fn text(&mut self, data: &str) {
        let trimmed = data.trim();
        if !trimmed.is_empty() {
            self.content.push(trimmed.to_string());
        }
    }
}

/// Drives a visitor over the elements and text nodes of `html` in document
/// order.
pub fn visit_document(html: &str, visitor: &mut dyn ContentVisitor) {
    let document = Html::parse_document(html);

    for node in document.root_element().descendants() {
        match node.value() {
            Node::Element(element) => visitor.start_tag(element.name()),
            Node::Text(text) => visitor.text(text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_trimmed_text_runs() {
        let html = "<html><body><h1> Title </h1><p>First paragraph</p>\
                    <p>第二段</p></body></html>";

        let mut collector = TextCollector::new();
        visit_document(html, &mut collector);

        assert_eq!(collector.content(), &["Title", "First paragraph", "第二段"]);
    }

    #[test]
    fn test_skips_whitespace_only_text() {
        let html = "<html><body><div>   </div><p>kept</p></body></html>";

        let mut collector = TextCollector::new();
        visit_document(html, &mut collector);

        assert_eq!(collector.content(), &["kept"]);
    }

    #[test]
    fn test_tracks_most_recent_tag() {
        let html = "<html><body><h1>Title</h1><p>text</p></body></html>";

        let mut collector = TextCollector::new();
        visit_document(html, &mut collector);

        assert_eq!(collector.current_tag(), Some("p"));
    }

    #[test]
    fn test_empty_document_collects_nothing() {
        let mut collector = TextCollector::new();
        visit_document("", &mut collector);

        assert!(collector.content().is_empty());
    }
}
