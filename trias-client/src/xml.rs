//! Minidom lookup helpers.
//!
//! TRIAS responses mix default-namespace elements with `siri:`-prefixed
//! ones, so every lookup here matches on local name only.

use minidom::Element;

use crate::error::TriasError;

pub(crate) trait ElementExt {
    /// The first child with the given local name, if any.
    fn only_child(&self, name: &str) -> Option<&Element>;

    /// The unique child with the given local name; a missing or duplicated
    /// child is a malformed document.
    fn try_only_child(&self, name: &str) -> Result<&Element, TriasError>;

    /// Text content of the first child with the given local name.
    fn child_text(&self, name: &str) -> Option<String>;

    /// All children with the given local name, in document order.
    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element>;
}

impl ElementExt for Element {
    fn only_child(&self, name: &str) -> Option<&Element> {
        self.children().find(|child| child.name() == name)
    }

    fn try_only_child(&self, name: &str) -> Result<&Element, TriasError> {
        let mut matches = self.children().filter(|child| child.name() == name);
        match (matches.next(), matches.next()) {
            (Some(child), None) => Ok(child),
            (Some(_), Some(_)) => Err(TriasError::malformed(format!(
                "duplicated element '{}' in '{}'",
                name,
                self.name()
            ))),
            (None, _) => Err(TriasError::malformed(format!(
                "missing element '{}' in '{}'",
                name,
                self.name()
            ))),
        }
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.only_child(name).map(Element::text)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children().filter(move |child| child.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> Element {
        xml.parse().unwrap()
    }

    #[test]
    fn finds_child_by_local_name() {
        let root = element(
            r#"<root xmlns="urn:a" xmlns:siri="urn:b"><siri:Child>hello</siri:Child></root>"#,
        );

        assert_eq!(root.child_text("Child").as_deref(), Some("hello"));
        assert!(root.only_child("Other").is_none());
    }

    #[test]
    fn try_only_child_requires_uniqueness() {
        let root = element(r#"<root xmlns="urn:a"><Child/><Child/></root>"#);

        let err = root.try_only_child("Child").unwrap_err();
        assert!(err.to_string().contains("duplicated element 'Child'"));

        let err = root.try_only_child("Missing").unwrap_err();
        assert!(err.to_string().contains("missing element 'Missing'"));
    }

    #[test]
    fn children_named_preserves_document_order() {
        let root = element(r#"<root xmlns="urn:a"><X>1</X><Y/><X>2</X><X>3</X></root>"#);

        let texts: Vec<String> = root.children_named("X").map(Element::text).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }
}
