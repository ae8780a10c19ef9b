use anyhow::Result;
use clap::Parser;

use next_semver::config::{self, ConfigOverrides, RepoId, RunConfig};
use next_semver::error::NextSemverError;
use next_semver::output::{Outputs, OutputSink};
use next_semver::release::GithubReleaseHost;
use next_semver::{pipeline, ui};

#[derive(clap::Parser)]
#[command(
    name = "next-semver",
    about = "Compute the next semantic-version tag from the manifest and latest release"
)]
struct Args {
    #[arg(short, long, help = "Directory under the workspace to search for the manifest")]
    package_root: Option<String>,

    #[arg(long, help = "Prefix carried by every managed tag (e.g. 'v')")]
    tag_prefix: Option<String>,

    #[arg(long, help = "Suffix carried by every managed tag (e.g. '-beta')")]
    tag_suffix: Option<String>,

    #[arg(long, help = "Write the resolved version back into the manifest")]
    write_manifest: bool,

    #[arg(long, help = "Emit diagnostic detail to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("next-semver {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let overrides = ConfigOverrides {
        package_root: args.package_root,
        tag_prefix: args.tag_prefix,
        tag_suffix: args.tag_suffix,
        write_manifest: args.write_manifest,
        verbose: args.verbose,
    };
    let config = config::load_config(&overrides);

    if config.verbose {
        ui::display_debug(&ui::format_env_dump(std::env::vars()));
    }

    match run(&config) {
        Ok(outputs) => {
            ui::display_success(&format!("Next release tag: {}", outputs.tag));
        }
        Err(e) => {
            // Taxonomy errors carry a stable human-readable message;
            // anything unexpected is reported generically.
            match e.downcast_ref::<NextSemverError>() {
                Some(err) => ui::display_error(&err.to_string()),
                None => {
                    if config.verbose {
                        ui::display_debug(&format!("{:#}", e));
                    }
                    ui::display_error("Unable to generate next version");
                }
            }
            std::process::exit(1);
        }
    }
}

fn run(config: &RunConfig) -> Result<Outputs> {
    let repo = RepoId::from_env()?;
    if config.verbose {
        ui::display_debug(&format!(
            "Github context: owner -> {}; repo -> {}",
            repo.owner, repo.repo
        ));
    }

    // Precondition: no network call without a credential
    let token = config::credential()?;
    let host = GithubReleaseHost::new(token)?;

    ui::display_status(&format!(
        "Resolving next version for {}/{}",
        repo.owner, repo.repo
    ));
    let outputs = pipeline::run(config, &repo, &host)?;

    let sink = OutputSink::from_env();
    sink.emit(&outputs)?;

    Ok(outputs)
}
