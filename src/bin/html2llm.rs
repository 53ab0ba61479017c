//! Command-line front end: reads an HTML page from a file or stdin and prints
//! the converted document.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use html2llm::encoding::decode_html;
use html2llm::{
    convert, extract, render_upstream_error, Document, Extraction, Flow, Method, Options,
    ScorerVariant, NO_CONTENT_PLACEHOLDER,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "html2llm")]
#[command(about = "Convert an HTML page to an LLM-friendly Markdown document")]
struct Args {
    /// HTML file to convert; omit or pass `-` to read stdin
    input: Option<PathBuf>,

    /// URL the page was loaded from
    #[arg(short, long)]
    url: Option<String>,

    /// Title reported by the browser, overrides `<title>`
    #[arg(long)]
    title: Option<String>,

    /// Extraction method: auto, engine or selector
    #[arg(short, long, default_value = "auto")]
    method: Method,

    /// Where the page came from: file, network or browser
    #[arg(long, default_value = "file")]
    flow: Flow,

    /// Content scorer: score-all or first-match (default depends on flow)
    #[arg(long)]
    scorer: Option<ScorerVariant>,

    /// Maximum output length in characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print title, description, url and content as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            method: self.method,
            flow: self.flow,
            scorer: self.scorer,
            max_length: self.max_length,
        }
    }

    fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}

fn read_input(args: &Args) -> Result<String, html2llm::Error> {
    let bytes = if args.reads_stdin() {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| html2llm::Error::Io {
                path: "-".to_string(),
                source,
            })?;
        buf
    } else {
        let path = args.input.clone().unwrap_or_default();
        fs::read(&path).map_err(|source| html2llm::Error::Io {
            path: path.display().to_string(),
            source,
        })?
    };
    Ok(decode_html(&bytes))
}

fn render_json(document: &Document, options: &Options) -> Result<String, serde_json::Error> {
    match extract(document, options) {
        Ok(extraction) => serde_json::to_string_pretty(&extraction),
        Err(err) => match options.flow {
            Flow::File => {
                let metadata = html2llm::metadata::extract_metadata(document);
                serde_json::to_string_pretty(&Extraction {
                    metadata,
                    content: NO_CONTENT_PLACEHOLDER.to_string(),
                })
            }
            Flow::Network | Flow::Browser => {
                serde_json::to_string_pretty(&serde_json::json!({ "error": err.to_string() }))
            }
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging only if LOG_LEVEL environment variable is set
    if let Ok(log_level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
            )
            .with_writer(io::stderr)
            .with_ansi(false)
            .init();
    }

    let args = Args::parse();
    let options = args.options();
    tracing::info!(method = %options.method, flow = ?options.flow, "converting");

    let result = match read_input(&args) {
        Ok(html) => {
            let mut document = Document::new(html);
            document.url.clone_from(&args.url);
            document.title.clone_from(&args.title);

            if args.json {
                render_json(&document, &options)?
            } else {
                convert(&document, &options)
            }
        }
        Err(err) if options.flow == Flow::File => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to read input");
            render_upstream_error(&err, &options)
        }
    };

    if let Some(path) = &args.output {
        fs::write(path, &result)?;
        eprintln!("Content saved to {}", path.display());
    } else {
        println!("{result}");
    }

    Ok(())
}
