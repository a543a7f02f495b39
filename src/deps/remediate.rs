// src/deps/remediate.rs

//! Best-effort remediation of missing dependencies.
//!
//! Installing packages is an environment-specific, usually privileged side
//! effect, so it sits behind the [`Remediator`] trait: the production
//! implementation shells out to apt with sudo, while sandboxed or
//! permission-restricted environments use [`NoopRemediator`] (selected with
//! `--no-install`).

use std::future::Future;
use std::pin::Pin;

use tracing::warn;

use crate::deps::DependencyCheck;
use crate::exec::{CommandExecutor, CommandSpec};

/// Capability to attempt to satisfy a missing dependency.
///
/// Remediation is best-effort by contract: implementations report nothing
/// and callers verify nothing. A failed install simply leaves the run phase
/// to fail on its own later.
pub trait Remediator: Send {
    fn remediate<'a>(
        &'a mut self,
        check: &'a DependencyCheck,
        executor: &'a mut dyn CommandExecutor,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Installs packages with `sudo apt update` + `sudo apt install -y <pkg>`.
///
/// The runner does not elevate anything itself; the elevation lives in the
/// command tokens, and on hosts without sudo rights both commands just fail
/// and get logged.
pub struct AptRemediator;

impl Remediator for AptRemediator {
    fn remediate<'a>(
        &'a mut self,
        check: &'a DependencyCheck,
        executor: &'a mut dyn CommandExecutor,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            println!("Trying to install {}...", check.package);

            let update = CommandSpec::new(["sudo", "apt", "update"]);
            if !executor.execute(&update).await.success {
                warn!(package = %check.package, "apt update failed, attempting install anyway");
            }

            let install = CommandSpec::new([
                "sudo",
                "apt",
                "install",
                "-y",
                check.package.as_str(),
            ]);
            if !executor.execute(&install).await.success {
                warn!(package = %check.package, "apt install failed, continuing");
            }
        })
    }
}

/// Does nothing; for environments where installing is impossible or unwanted.
pub struct NoopRemediator;

impl Remediator for NoopRemediator {
    fn remediate<'a>(
        &'a mut self,
        check: &'a DependencyCheck,
        _executor: &'a mut dyn CommandExecutor,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            warn!(tool = %check.tool, "remediation disabled, leaving dependency missing");
        })
    }
}
