//! Switching the calling thread into a container's network namespace
//!
//! A namespace belongs to a thread, not to the process. `NetnsGuard` is
//! therefore `!Send`: it must be created and dropped on the thread that drives
//! every request. Threads spawned afterwards by that thread inherit the
//! namespace, which is what lets a current-thread runtime (and its blocking
//! DNS pool) run entirely inside the container's network.

use std::marker::PhantomData;

use crate::error::{Error, Result};

/// Parses the output of `docker inspect -f '{{.State.Pid}}'`
///
/// Stopped containers report pid 0, which is rejected.
pub fn parse_container_pid(output: &str) -> Option<u32> {
    output.trim().parse::<u32>().ok().filter(|pid| *pid > 0)
}

/// Holds the original namespace and restores it on drop
#[derive(Debug)]
pub struct NetnsGuard {
    container: String,
    #[cfg(target_os = "linux")]
    original: std::fs::File,
    _not_send: PhantomData<*const ()>,
}

#[cfg(target_os = "linux")]
impl NetnsGuard {
    /// Moves the current thread into the network namespace of `container`
    ///
    /// # Returns
    /// * `Err(Error::Netns)` if the container pid cannot be resolved or `setns` fails
    pub fn enter(container: &str) -> Result<Self> {
        use nix::sched::{setns, CloneFlags};
        use std::fs::File;

        let netns_error = |reason: String| Error::Netns {
            container: container.to_string(),
            reason,
        };

        let pid = container_pid(container).map_err(netns_error)?;
        let original = File::open("/proc/thread-self/ns/net")
            .map_err(|e| netns_error(format!("cannot save current namespace: {}", e)))?;
        let target = File::open(format!("/proc/{}/ns/net", pid))
            .map_err(|e| netns_error(format!("cannot open namespace of pid {}: {}", pid, e)))?;

        setns(&target, CloneFlags::CLONE_NEWNET).map_err(|e| netns_error(e.to_string()))?;
        tracing::debug!(container, pid, "switched network namespace");

        Ok(Self {
            container: container.to_string(),
            original,
            _not_send: PhantomData,
        })
    }
}

#[cfg(not(target_os = "linux"))]
impl NetnsGuard {
    /// Network namespaces only exist on Linux
    pub fn enter(container: &str) -> Result<Self> {
        Err(Error::Netns {
            container: container.to_string(),
            reason: "network namespaces are only supported on Linux".to_string(),
        })
    }
}

#[cfg(target_os = "linux")]
impl Drop for NetnsGuard {
    fn drop(&mut self) {
        use nix::sched::{setns, CloneFlags};

        // best effort: the process is about to exit anyway
        if let Err(e) = setns(&self.original, CloneFlags::CLONE_NEWNET) {
            tracing::warn!(container = %self.container, error = %e, "failed to restore network namespace");
        }
    }
}

#[cfg(target_os = "linux")]
fn container_pid(container: &str) -> std::result::Result<u32, String> {
    let output = std::process::Command::new("docker")
        .args(["inspect", "-f", "{{.State.Pid}}", container])
        .output()
        .map_err(|e| format!("cannot run docker inspect: {}", e))?;
    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_container_pid(&stdout).ok_or_else(|| format!("container is not running (pid {:?})", stdout.trim()))
}
