use crate::runner::TestNode;

/// A suite of the execution tree. Children borrow their parent, so a tree is
/// built top-down on the walker's stack.
#[derive(Debug, Clone, Copy)]
pub struct Suite<'a> {
    title: &'a str,
    file: Option<&'a str>,
    parent: Option<&'a Suite<'a>>,
    root: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Test<'a> {
    title: &'a str,
    file: Option<&'a str>,
    parent: &'a Suite<'a>,
}

impl<'a> Suite<'a> {
    /// The implicit top-level suite: untitled and without a file.
    pub fn root() -> Self {
        Self {
            title: "",
            file: None,
            parent: None,
            root: true,
        }
    }

    pub fn new(title: &'a str, file: Option<&'a str>, parent: &'a Suite<'a>) -> Self {
        Self {
            title,
            file,
            parent: Some(parent),
            root: false,
        }
    }
}

impl<'a> Test<'a> {
    pub fn new(title: &'a str, file: Option<&'a str>, parent: &'a Suite<'a>) -> Self {
        Self {
            title,
            file,
            parent,
        }
    }
}

impl<'a> TestNode for Suite<'a> {
    fn title(&self) -> &str {
        self.title
    }

    fn file(&self) -> Option<&str> {
        self.file
    }

    fn parent(&self) -> Option<&dyn TestNode> {
        self.parent.map(|suite| suite as &dyn TestNode)
    }

    fn is_root(&self) -> bool {
        self.root
    }
}

impl<'a> TestNode for Test<'a> {
    fn title(&self) -> &str {
        self.title
    }

    fn file(&self) -> Option<&str> {
        self.file
    }

    fn parent(&self) -> Option<&dyn TestNode> {
        Some(self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::{Suite, Test};
    use crate::runner::TestNode;

    #[test]
    fn test_full_title_skips_root() {
        let root = Suite::root();
        let outer = Suite::new("parser", Some("test/parser.js"), &root);
        let inner = Suite::new("literals", None, &outer);
        let test = Test::new("reads numbers", None, &inner);

        assert_eq!(test.full_title(), "parser literals reads numbers");
        assert_eq!(inner.full_title(), "parser literals");
        assert_eq!(root.full_title(), "");
    }

    #[test]
    fn test_parent_links() {
        let root = Suite::root();
        let suite = Suite::new("io", Some("io.js"), &root);
        let test = Test::new("writes", None, &suite);

        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert!(!suite.is_root());
        assert!(suite.parent().map_or(false, |p| p.is_root()));
        assert_eq!(test.parent().and_then(|p| p.file()), Some("io.js"));
    }
}
