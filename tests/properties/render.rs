use dockcraft::infrastructure::repositories::{parse_document, serialize_document};
use dockcraft::render_document;
use proptest::prelude::*;
use std::path::Path;

use crate::support::document;

proptest! {
    #[test]
    fn rendering_is_idempotent(doc in document(6)) {
        let first = render_document(&doc).unwrap();
        let second = render_document(&doc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn save_load_renders_identically(doc in document(6)) {
        let text = serialize_document(&doc).unwrap();
        let loaded = parse_document(&text, Path::new("data.json")).unwrap();

        prop_assert_eq!(&loaded, &doc);
        prop_assert_eq!(render_document(&loaded).unwrap(), render_document(&doc).unwrap());
    }

    #[test]
    fn parse_never_panics(content in "\\PC{0,200}") {
        let _ = parse_document(&content, Path::new("data.json"));
    }
}
