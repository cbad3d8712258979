use dockcraft::DockcraftError;

use crate::ui::primitives::text::ColoredText;

/// One `ERROR:` line, plus a hint line for errors the operator can act on
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let mut out = format!("{} {}\n", ColoredText::error("ERROR:").bold().render(color), err);
    if let Some(hint) = err.downcast_ref::<DockcraftError>().and_then(hint_for) {
        out.push_str(&format!("  {}\n", ColoredText::dim(hint).render(color)));
    }
    out
}

pub fn print_error(err: &anyhow::Error, color: bool) {
    eprint!("{}", format_error(err, color));
}

fn hint_for(err: &DockcraftError) -> Option<&'static str> {
    match err {
        DockcraftError::MalformedDocument { .. } | DockcraftError::InconsistentDocument { .. } => {
            Some("fix data.json by hand or move it away and run 'dockcraft create'")
        }
        DockcraftError::InvalidServiceName { .. } => {
            Some("service names become directory names: use one segment without '/' or '..'")
        }
        DockcraftError::Prompt(_) => Some("interactive prompts need a terminal on stdin"),
        DockcraftError::RuntimeInvocationFailure { code: None, .. } => {
            Some("is the container runtime installed? set DOCKCRAFT_RUNTIME to its binary")
        }
        _ => None,
    }
}
