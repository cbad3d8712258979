use anyhow::Result;

use dockcraft::application::BuildUseCase;
use dockcraft::domain::ports::DocumentRepository;
use dockcraft::infrastructure::LocalFs;

use super::AppContext;
use crate::ui::views::document::render_build_summary;

pub fn cmd_build(ctx: &AppContext) -> Result<()> {
    let doc = ctx.repository().load()?;
    let report = BuildUseCase::new(LocalFs::new()).execute(&doc, &ctx.workspace)?;

    print!(
        "{}",
        render_build_summary(&report, &ctx.root(), ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
