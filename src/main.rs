use clap::{Parser, Subcommand};
use imgsrc::{config, output, rewrite, srcset};
use imgsrc::{Fit, ImageKind, Quality, RewriteOptions};
use std::path::PathBuf;

/// Shared per-call rewrite options.
#[derive(clap::Args, Clone)]
struct OptionArgs {
    /// Image kind: image-product, image-category, or image-wysiwyg
    #[arg(long)]
    kind: Option<ImageKind>,

    /// Requested width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Requested height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Quality hint, 0-100 (values above 100 are clamped)
    #[arg(long)]
    quality: Option<Quality>,

    /// Crop hint, emitted as crop=true/false
    #[arg(long)]
    crop: Option<bool>,

    /// Fit mode: cover or contain
    #[arg(long)]
    fit: Option<Fit>,
}

impl OptionArgs {
    fn to_options(&self) -> RewriteOptions {
        RewriteOptions {
            kind: self.kind,
            width: self.width,
            height: self.height,
            quality: self.quality,
            crop: self.crop,
            fit: self.fit,
        }
    }
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "imgsrc")]
#[command(about = "Image URL rewriter for storefront media backends")]
#[command(long_about = "\
Image URL rewriter for storefront media backends

Rewrites image URLs the way the storefront's media/CDN backend expects:
qualifies relative paths under the media path, appends optimization query
parameters, and strips or prepends the backend origin depending on the
configured optimizing-origin mode.

Examples:

  imgsrc rewrite /some/img.jpg --kind image-product --width 100
      → /media/catalog/product/some/img.jpg?auto=webp&format=pjpg&width=100

  imgsrc srcset /some/img.jpg --kind image-product
      → one candidate per configured width, joined for a srcset attribute

  imgsrc rewrite /a.jpg /b.jpg --kind image-category --json
      → JSON records for batch rewrites

Configuration lives in imgsrc.toml (see 'imgsrc gen-config'). A missing
config file means stock defaults: media path /media, no backend origin,
onboard optimizing origin.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "imgsrc.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite one or more image URLs
    Rewrite {
        /// URLs or site-relative paths to rewrite
        #[arg(required = true)]
        urls: Vec<String>,

        #[command(flatten)]
        options: OptionArgs,

        /// Emit JSON records instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a srcset attribute value for an image URL
    Srcset {
        /// URL or site-relative path
        url: String,

        /// Image kind for every candidate
        #[arg(long, default_value = "image-product")]
        kind: ImageKind,
    },
    /// Validate the config file and print the resolved values
    Check,
    /// Print a stock imgsrc.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Rewrite {
            urls,
            options,
            json,
        } => {
            let media_config = config::load_config(&cli.config)?;
            let rewrite_options = options.to_options();
            let records: Vec<output::RewriteRecord> = urls
                .into_iter()
                .map(|url| {
                    let rewritten = rewrite(&url, &rewrite_options, &media_config);
                    output::RewriteRecord {
                        input: url,
                        output: rewritten,
                    }
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                output::print_rewrite_output(&records);
            }
        }
        Command::Srcset { url, kind } => {
            let media_config = config::load_config(&cli.config)?;
            println!("{}", srcset(&url, kind, &media_config));
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let media_config = config::load_config(&cli.config)?;
            output::print_check_output(&media_config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
