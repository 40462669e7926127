use anyhow::Context;
use orderdesk_core::{prompt::Prompter, session::Session};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let pending = super::open_store(root, false)?;
    let completed = super::open_store(root, true)?;
    tracing::debug!(
        pending = %pending.path().display(),
        completed = %completed.path().display(),
        "starting session"
    );

    let mut session = Session::open(pending.clone(), completed)
        .with_context(|| format!("failed to load {}", pending.path().display()))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    session.run(&mut prompter).context("session aborted")?;
    Ok(())
}
