//! Domain Services
//!
//! Pure logic over domain entities. No I/O: the reconciler talks to the
//! operator through ports, the renderer returns files instead of writing them.

mod reconciler;
mod renderer;

pub use reconciler::{Change, EntityReconciler, Operation, ReconcileOutcome, PROXY_SERVICE_NAME};
pub use renderer::{
    render_document, render_dockerfile, render_env_file, render_eula, render_run_script,
    service_output_dir, COMPOSE_FILE, SERVERS_DIR,
};
