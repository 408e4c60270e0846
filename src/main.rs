use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::sync::Arc;

use itertools::Itertools;
use maskfield::{
    CaseMode, MaskedField, Prompt, PromptOutcome, ValidationResult, compile,
    terminal::CrosstermTerminal,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check complete values against a mask (reads lines from stdin if none given)
    Check {
        /// Input mask
        mask: String,
        /// Values to check
        values: Vec<String>,
    },
    /// Type text into an empty field, one keystroke per character
    Type {
        /// Input mask
        mask: String,
        /// Keystrokes
        text: String,
        /// Deliver the text as a single paste instead
        #[arg(short, long)]
        paste: bool,
    },
    /// Show the compiled slots of a mask
    Layers {
        /// Input mask
        mask: String,
    },
    /// Edit a value interactively
    Prompt {
        /// Input mask
        mask: String,
        /// Label shown before the field
        #[arg(short, long, default_value = "Value")]
        label: String,
        /// Initial value
        #[arg(long, value_name = "VALUE")]
        initial: Option<String>,
    },
}

fn main() {
    let args = Args::parse();
    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when a value was rejected or the prompt cancelled.
fn run(args: Args) -> anyhow::Result<bool> {
    match args.command {
        Command::Check { mask, values } => {
            let compiled = compile(&mask);
            let values = if values.is_empty() {
                io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
            } else {
                values
            };
            let mut all_ok = true;
            for value in values {
                match maskfield::validate(&compiled, &value) {
                    ValidationResult::Accepted(_) => println!("{}: OK", value),
                    ValidationResult::Rejected(rejection) => {
                        println!("{}: {}", value, rejection);
                        all_ok = false;
                    }
                }
            }
            Ok(all_ok)
        }
        Command::Type { mask, text, paste } => {
            let mut field = MaskedField::new(Arc::new(compile(&mask)));
            let suppressed = if paste {
                let dropped = field.paste(&text);
                if dropped > 0 {
                    eprintln!(
                        "{} character{} dropped",
                        dropped,
                        if dropped == 1 { "" } else { "s" }
                    );
                }
                dropped
            } else {
                let rejected = text
                    .chars()
                    .enumerate()
                    .filter(|&(_, ch)| !field.type_char(ch))
                    .collect_vec();
                if !rejected.is_empty() {
                    eprintln!(
                        "suppressed: {}",
                        rejected
                            .iter()
                            .map(|(i, ch)| format!("{:?} (key {})", ch, i + 1))
                            .join(", ")
                    );
                }
                rejected.len()
            };
            println!("{}", field.value());
            println!("cursor {}", field.caret());
            Ok(suppressed == 0)
        }
        Command::Layers { mask } => {
            let compiled = compile(&mask);
            println!("canonical: {}", compiled);
            println!("slots:     {}", compiled.len());
            let symbols: String = compiled
                .symbol_layer()
                .iter()
                .map(|sym| sym.map_or(' ', |s| s.as_char()))
                .collect();
            let literals: String = compiled
                .literal_layer()
                .iter()
                .map(|lit| lit.unwrap_or(' '))
                .collect();
            println!("symbols:   |{}|", symbols);
            println!("literals:  |{}|", literals);
            let mut start = 0;
            let spans = compiled
                .case_layer()
                .into_iter()
                .chunk_by(|case| *case)
                .into_iter()
                .filter_map(|(case, run)| {
                    let from = start;
                    start += run.count();
                    (case != CaseMode::None).then(|| format!("{}..{} {:?}", from, start, case))
                })
                .join(", ");
            println!("case:      {}", if spans.is_empty() { "-" } else { spans.as_str() });
            Ok(true)
        }
        Command::Prompt {
            mask,
            label,
            initial,
        } => {
            let compiled = Arc::new(compile(&mask));
            let field = match initial {
                Some(value) => MaskedField::with_value(compiled, &value),
                None => MaskedField::new(compiled),
            };
            let mut prompt = Prompt::new(field, &label);
            let mut terminal = CrosstermTerminal::new();
            match prompt.run(&mut terminal)? {
                PromptOutcome::Submitted(value) => {
                    println!("{}", value);
                    Ok(true)
                }
                PromptOutcome::Cancelled => Ok(false),
            }
        }
    }
}
