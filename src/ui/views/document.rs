//! Output for create / update / build

use std::path::Path;

use dockcraft::application::{BuildReport, CreateResult, UpdateResult};
use dockcraft::domain::services::Change;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_summary(
    report: &BuildReport,
    root: &Path,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = format!(
        "{} Rendered {} files ({} written, {} unchanged)\n",
        Icon::Success.colored(color, unicode),
        report.total(),
        report.written.len(),
        report.unchanged.len()
    );
    for path in &report.written {
        let shown = path.strip_prefix(root).unwrap_or(path);
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(color, unicode),
            ColoredText::dim(shown.display().to_string()).render(color)
        ));
    }
    out
}

pub fn render_create_summary(
    result: &CreateResult,
    document: &Path,
    root: &Path,
    color: bool,
    unicode: bool,
) -> String {
    let document = document.strip_prefix(root).unwrap_or(document);
    let mut out = format!(
        "{} Created {} with {} service(s)\n",
        Icon::Success.colored(color, unicode),
        ColoredText::info(document.display().to_string()).bold().render(color),
        result.doc.len()
    );
    for name in result.doc.service_names() {
        out.push_str(&format!("  {} {}\n", Icon::Service.colored(color, unicode), name));
    }
    out.push_str(&render_build_summary(&result.build, root, color, unicode));
    out
}

pub fn render_update_result(
    result: &UpdateResult,
    root: &Path,
    color: bool,
    unicode: bool,
) -> String {
    match result {
        UpdateResult::Listed { services } => render_service_list(services, color, unicode),
        UpdateResult::Declined { operation, name } => format!(
            "{} Nothing to {}: '{}' left unchanged\n",
            Icon::Warning.colored(color, unicode),
            operation,
            name
        ),
        UpdateResult::Applied { change, build } => {
            let verb = match change {
                Change::Added(_) => "Added",
                Change::Replaced(_) => "Replaced",
                Change::Removed(_) => "Removed",
                Change::Changed(_) => "Updated",
            };
            let mut out = format!(
                "{} {} service '{}'\n",
                Icon::Success.colored(color, unicode),
                verb,
                change.name()
            );
            out.push_str(&render_build_summary(build, root, color, unicode));
            out
        }
    }
}

/// Mode hint followed by the current services
pub fn render_service_list(services: &[String], color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::warning("Use --add, --remove or --change flag.").render(color)
    );
    out.push_str("Services:\n");
    for name in services {
        out.push_str(&format!("  {} {}\n", Icon::Service.colored(color, unicode), name));
    }
    out
}
