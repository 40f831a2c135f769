//! vt-statusline CLI
//!
//! Renders a status line template against a demo snapshot, for previewing
//! templates while editing a terminal configuration.
//!
//! Usage:
//!   vt-statusline [OPTIONS] [TEMPLATE]
//!   echo '<template>' | vt-statusline

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vt_statusline::{parse, render, ParseError, StaticSnapshot, StatusLineConfig};

#[derive(Parser)]
#[command(name = "vt-statusline")]
#[command(about = "Preview status line templates for terminal emulators")]
struct Cli {
    /// Template string (reads from stdin if not provided)
    template: Option<String>,

    /// Render the three-region definition from a TOML config file instead
    #[arg(short, long, conflicts_with = "template")]
    config: Option<PathBuf>,

    /// Show the placeholder vocabulary reference
    #[arg(short, long)]
    placeholders: bool,

    /// Window title reported by the demo snapshot
    #[arg(long, default_value = "bash")]
    title: String,

    /// Cursor line reported by the demo snapshot
    #[arg(long, default_value_t = 1)]
    line: i32,

    /// Cursor column reported by the demo snapshot
    #[arg(long, default_value_t = 1)]
    column: i32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.placeholders {
        print_placeholders();
        return ExitCode::SUCCESS;
    }

    let mut snapshot = StaticSnapshot {
        title: cli.title.clone(),
        time: chrono::Local::now().time(),
        ..StaticSnapshot::default()
    };
    snapshot.cursor.line = cli.line;
    snapshot.cursor.column = cli.column;

    if let Some(path) = &cli.config {
        let config = match StatusLineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };

        let mut failed = false;
        let regions = [
            ("left", &config.left),
            ("middle", &config.middle),
            ("right", &config.right),
        ];
        let mut rendered = Vec::new();
        for (name, template) in regions {
            match parse(template) {
                Ok(segment) => rendered.push(render(&segment, &snapshot)),
                Err(errors) => {
                    report_errors(&errors, template, name);
                    failed = true;
                }
            }
        }
        if failed {
            return ExitCode::FAILURE;
        }
        println!("{}", rendered.join(" | "));
        return ExitCode::SUCCESS;
    }

    let template = match &cli.template {
        Some(template) => template.clone(),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("No template given; pass one as an argument or pipe it on stdin.");
                eprintln!("Run with --placeholders for the vocabulary reference.");
                return ExitCode::FAILURE;
            }
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            // A trailing newline from `echo` is not part of the template.
            buffer.trim_end_matches('\n').to_string()
        }
    };

    match parse(&template) {
        Ok(segment) => {
            println!("{}", render(&segment, &snapshot));
            ExitCode::SUCCESS
        }
        Err(errors) => {
            report_errors(&errors, &template, "<template>");
            ExitCode::FAILURE
        }
    }
}

fn report_errors(errors: &[ParseError], source: &str, filename: &str) {
    for error in errors {
        eprint!("{}", error.format(source, filename));
    }
}

fn print_placeholders() {
    println!(
        r#"STATUS LINE PLACEHOLDERS
========================

Syntax: {{Name}} or {{Name:Flag1,Flag2,Key=Value,...}}
Anything outside braces is literal text.

LIVE VALUES
-----------
{{AnsiCursorLocation}}   Cursor position as line:column
{{MousePosition}}        Mouse position as line:column
{{AppTitle}}             Window title
{{VTType}}               Terminal hardware level (e.g. VT525)
{{Clock}}                Local time as HH:MM
{{InputMode}}            Input mode (INSERT, NORMAL, VISUAL, ...)
{{Hyperlink}}            Hyperlink target under the cursor, if any
{{Cell:UTF-8}}           Text of the cell under the cursor
{{Cell:UTF-32}}          Same, as U+XXXX codepoints
{{Cell:SGR}}             SGR attributes of the cell under the cursor

STATIC VALUES
-------------
{{Text:text=...}}        Literal text
{{Shell:command=...}}    A command string (displayed, never executed)
{{Search:prompt=...}}    Search prompt followed by the live search input

STYLE METADATA
--------------
Flags: Bold, Italic, Underline, Blinking
Attributes: Color=#rrggbb, BackgroundColor=#rrggbb (or a palette name)

Example:
    {{Clock:Bold,Color=#FFFF00}} | {{VTType}} | {{InputMode}}

Unknown placeholder names are dropped silently. {{Search}}, {{Shell}} and
{{Text}} without their required attribute are reported as errors."#
    );
}
