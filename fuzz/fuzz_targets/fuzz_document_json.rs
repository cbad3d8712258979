#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever parses must also render or report an inconsistency
        if let Ok(doc) = dockcraft::infrastructure::repositories::parse_document(
            content,
            Path::new("data.json"),
        ) {
            let _ = dockcraft::render_document(&doc);
        }
    }
});
