//! sedoc CLI - blog document generation tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use sedoc::render::{self, StyleConfig, TextFormat};
use sedoc::{BuildStyle, DocumentBuilder, JsonFormat, ParsedDocument};

#[derive(Parser)]
#[command(name = "sedoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Turn generated blog text into editor payloads, Markdown, text, and HTML",
    long_about = None
)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Build style file (JSON) for payload.json
    #[arg(long, value_name = "FILE", env = "SEDOC_BUILD_STYLE")]
    build_style: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Renderer style arguments shared by the text subcommands.
#[derive(clap::Args)]
struct StyleArgs {
    /// Style configuration file (JSON)
    #[arg(long, value_name = "FILE", env = "SEDOC_STYLE")]
    style: Option<PathBuf>,

    /// Override a style option, e.g. --set qa_style=quote
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every output format into a directory
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        /// Build style file (JSON) for payload.json
        #[arg(long, value_name = "FILE", env = "SEDOC_BUILD_STYLE")]
        build_style: Option<PathBuf>,
    },

    /// Print the parsed structure as JSON
    Parse {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render as plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render as HTML
    Html {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit an editor-embeddable fragment instead of a full page
        #[arg(long)]
        naver: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Build the editor payload
    Build {
        /// Input text file, or block JSON with --blocks ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Treat the input as generated block JSON
        #[arg(long)]
        blocks: bool,

        /// Uploaded image metadata (JSON array)
        #[arg(long, value_name = "FILE")]
        images: Option<PathBuf>,

        /// Build style file (JSON)
        #[arg(long, value_name = "FILE", env = "SEDOC_BUILD_STYLE")]
        style: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            style,
            build_style,
        }) => cmd_convert(&input, output.as_deref(), &style, build_style.as_deref()),
        Some(Commands::Parse {
            input,
            output,
            compact,
        }) => cmd_parse(&input, output.as_deref(), compact),
        Some(Commands::Text {
            input,
            output,
            style,
        }) => cmd_render(&input, output.as_deref(), &style, TextFormat::Text),
        Some(Commands::Markdown {
            input,
            output,
            style,
        }) => cmd_render(&input, output.as_deref(), &style, TextFormat::Markdown),
        Some(Commands::Html {
            input,
            output,
            naver,
            style,
        }) => {
            let format = if naver {
                TextFormat::NaverHtml
            } else {
                TextFormat::Html
            };
            cmd_render(&input, output.as_deref(), &style, format)
        }
        Some(Commands::Build {
            input,
            output,
            blocks,
            images,
            style,
            compact,
        }) => cmd_build(
            &input,
            output.as_deref(),
            blocks,
            images.as_deref(),
            style.as_deref(),
            compact,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let style = StyleArgs {
                    style: None,
                    overrides: Vec::new(),
                };
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    &style,
                    cli.build_style.as_deref(),
                )
            } else {
                println!("{}", "Usage: sedoc <FILE> [OUTPUT]".yellow());
                println!("       sedoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn read_input(input: &Path) -> CliResult<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn parse_input(input: &Path) -> CliResult<ParsedDocument> {
    Ok(sedoc::parse_text(&read_input(input)?))
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn load_style(args: &StyleArgs) -> CliResult<StyleConfig> {
    let mut style = match &args.style {
        Some(path) => StyleConfig::from_json(&fs::read_to_string(path)?)?,
        None => StyleConfig::default(),
    };
    for pair in &args.overrides {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid --set value (expected KEY=VALUE): {}", pair))?;
        if !style.apply(key, value) {
            return Err(format!("Unknown style option: {}", key.trim()).into());
        }
    }
    log::debug!("Using style {:?}", style);
    Ok(style)
}

fn load_build_style(path: Option<&Path>) -> CliResult<BuildStyle> {
    match path {
        Some(path) => Ok(BuildStyle::from_json(&fs::read_to_string(path)?)?),
        None => Ok(BuildStyle::default()),
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

/// `<stem>_output` next to the working directory; stdin has no stem.
fn default_output_dir(input: &Path) -> PathBuf {
    let stem = match input.file_stem() {
        Some(stem) if input != Path::new("-") => stem.to_string_lossy(),
        _ => "sedoc".into(),
    };
    PathBuf::from(format!("{}_output", stem))
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
    build_style: Option<&Path>,
) -> CliResult<()> {
    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_dir(input));

    let doc = parse_input(input)?;
    let style = load_style(style)?;
    let build_style = load_build_style(build_style)?;
    let payload = DocumentBuilder::from_parsed(&doc, &build_style).to_json(JsonFormat::Pretty)?;
    fs::create_dir_all(&output_dir)?;

    let outputs = [
        ("post.txt", render::render(&doc, &style, TextFormat::Text)),
        ("post.md", render::render(&doc, &style, TextFormat::Markdown)),
        ("post.html", render::render(&doc, &style, TextFormat::Html)),
        ("payload.json", payload),
    ];
    for (name, content) in &outputs {
        fs::write(output_dir.join(name), content)?;
    }

    println!("\n{}", "Output files:".green().bold());
    for (i, (name, _)) in outputs.iter().enumerate() {
        let branch = if i + 1 == outputs.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let doc = parse_input(input)?;
    let json = if compact {
        serde_json::to_string(&doc)?
    } else {
        serde_json::to_string_pretty(&doc)?
    };
    write_output(output, &json)
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
    format: TextFormat,
) -> CliResult<()> {
    let doc = parse_input(input)?;
    let style = load_style(style)?;
    write_output(output, &render::render(&doc, &style, format))
}

fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    blocks: bool,
    images: Option<&Path>,
    style: Option<&Path>,
    compact: bool,
) -> CliResult<()> {
    let style = load_build_style(style)?;
    let text = read_input(input)?;

    let document = if blocks {
        let content = sedoc::GeneratedContent::from_json(&text)?;
        let images = match images {
            Some(path) => sedoc::load_images(path)?,
            None => Vec::new(),
        };
        DocumentBuilder::from_generated(&content, &images, &style)
    } else {
        if images.is_some() {
            log::warn!("--images is only used with --blocks");
        }
        DocumentBuilder::from_parsed(&sedoc::parse_text(&text), &style)
    };

    write_output(output, &document.to_json(json_format(compact))?)
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let doc = parse_input(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if doc.has_title() {
        println!("{}: {}", "Title".bold(), doc.title);
    }
    println!("{}: {}", "Sections".bold(), doc.sections.len());
    println!("{}: {}", "Items".bold(), doc.item_count());

    let headings: Vec<&str> = doc.headings().collect();
    if !headings.is_empty() {
        println!();
        println!("{}", "Headings".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for heading in headings {
            println!("  {}", heading);
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = render::to_text(&doc, &StyleConfig::default());
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let questions = doc
        .sections
        .iter()
        .flat_map(|s| &s.content)
        .filter(|item| matches!(item, sedoc::ContentItem::Question(_)))
        .count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);
    println!("{}: {}", "Questions".bold(), questions);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sedoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Blog document generation tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/sedoc".dimmed());
    println!("License: MIT");
}
