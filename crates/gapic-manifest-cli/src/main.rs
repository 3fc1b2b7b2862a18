use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gapic_manifest::{
    GoListResolver, GoModResolver, ManifestBuilder, ModuleResolver, PostProcessorConfig,
};

#[derive(Parser, Debug)]
#[command(name = "gapic-manifest", about = "Write internal/.repo-metadata-full.json")]
struct Args {
    /// Post-processor config listing manual clients and service configs
    #[arg(long)]
    config: PathBuf,

    /// Root of the googleapis checkout holding the service configs
    #[arg(long)]
    googleapis_dir: PathBuf,

    /// Root of the Go monorepo the manifest describes
    #[arg(long, default_value = ".")]
    google_cloud_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Resolver::GoMod)]
    resolver: Resolver,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Resolver {
    /// Read go.mod files directly
    GoMod,
    /// Shell out to `go list -m`
    GoList,
}

impl Resolver {
    fn build(self) -> Box<dyn ModuleResolver> {
        match self {
            Resolver::GoMod => Box::new(GoModResolver),
            Resolver::GoList => Box::new(GoListResolver),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PostProcessorConfig::load(&args.config)?;
    let builder = ManifestBuilder::new(
        &args.googleapis_dir,
        &args.google_cloud_dir,
        args.resolver.build(),
    );
    info!(
        "Building manifest from {:?} into {:?}",
        builder.googleapis_dir(),
        builder.google_cloud_dir()
    );

    let manifest = builder
        .build(config.manual_entries(), &config.build_configs())
        .context("updating gapic manifest")?;

    println!("wrote {} entries to {}", manifest.len(), builder.output_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from([
            "gapic-manifest",
            "--config",
            "config.yaml",
            "--googleapis-dir",
            "/src/googleapis",
        ])
        .unwrap();
        assert_eq!(args.config, PathBuf::from("config.yaml"));
        assert_eq!(args.google_cloud_dir, PathBuf::from("."));
        assert_eq!(args.resolver, Resolver::GoMod);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_go_list_resolver() {
        let args = Args::try_parse_from([
            "gapic-manifest",
            "--config",
            "config.yaml",
            "--googleapis-dir",
            "/src/googleapis",
            "--google-cloud-dir",
            "/src/google-cloud-go",
            "--resolver",
            "go-list",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.resolver, Resolver::GoList);
        assert_eq!(args.google_cloud_dir, PathBuf::from("/src/google-cloud-go"));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_require_config() {
        assert!(Args::try_parse_from(["gapic-manifest", "--googleapis-dir", "/x"]).is_err());
    }
}
