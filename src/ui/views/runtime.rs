use dockcraft::application::BackupReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_backup_report(report: &BackupReport, color: bool, unicode: bool) -> String {
    let mut out = String::new();
    for (service, archive) in &report.archived {
        out.push_str(&format!(
            "{} {} {} {}\n",
            Icon::Success.colored(color, unicode),
            service,
            Icon::Arrow.colored(color, unicode),
            archive.display()
        ));
    }
    for service in &report.skipped {
        out.push_str(&format!(
            "{} {} is not running, skipped\n",
            Icon::Warning.colored(color, unicode),
            service
        ));
    }
    for (service, err) in &report.failed {
        out.push_str(&format!(
            "{} {}: {}\n",
            Icon::Error.colored(color, unicode),
            service,
            ColoredText::error(err.to_string()).render(color)
        ));
    }
    if out.is_empty() {
        out.push_str(&format!(
            "{} No services to back up\n",
            Icon::Warning.colored(color, unicode)
        ));
    }
    out
}
