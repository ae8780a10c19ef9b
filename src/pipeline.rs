//! Single-pass resolution pipeline
//!
//! Composes the three stages in sequence: read the declared version
//! from the manifest, look up and normalize the latest release tag,
//! resolve the next version. Control flows strictly forward; the only
//! suspension point is the release-host call.

use crate::config::{RepoId, RunConfig};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Outputs;
use crate::release::{LatestRelease, ReleaseHost};
use crate::tag::{format_tag, normalize};
use crate::ui;
use crate::version::{clean, default_version, resolve_next};

/// Runs the pipeline against the given release host.
///
/// # Arguments
/// * `config` - Run configuration (paths, affixes, write-back choice)
/// * `repo` - Repository identity on the release host
/// * `host` - Release host collaborator
///
/// # Returns
/// * `Ok(Outputs)` - Resolved version and formatted tag
/// * `Err` - Any taxonomy error; no partial output is produced
pub fn run(config: &RunConfig, repo: &RepoId, host: &dyn ReleaseHost) -> Result<Outputs> {
    let package_dir = config.workspace_root.join(&config.package_root);
    let mut manifest = Manifest::locate(&package_dir)?;

    let raw_declared = manifest.version()?;
    if config.verbose {
        ui::display_debug(&format!("Detected package version {}", raw_declared));
    }
    let declared = clean(raw_declared)?;

    let latest = match host.latest_release(repo)? {
        LatestRelease::Found(tag) => {
            if config.verbose {
                ui::display_debug(&format!("Latest release tag: {}", tag));
            }
            clean(&normalize(&tag, &config.tag_prefix, &config.tag_suffix))?
        }
        LatestRelease::NotFound => default_version(),
    };

    let next = resolve_next(&declared, &latest);
    if config.verbose {
        ui::display_debug(&format!(
            "Package version: {}; previous release version: {}; next release version: {}",
            declared, latest, next
        ));
    }

    let manifest_path = if config.write_manifest {
        manifest.set_version(&next);
        manifest.save()?;
        Some(manifest.path().to_path_buf())
    } else {
        None
    };

    Ok(Outputs {
        version: next.to_string(),
        tag: format_tag(&next, &config.tag_prefix, &config.tag_suffix),
        manifest: manifest_path,
    })
}
