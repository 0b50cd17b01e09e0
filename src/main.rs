use std::path::Path;

use clap::{Arg, ArgMatches, Command};
use phrasebook::{
    Lexicon, Phrasebook, Structure, VerbosityLevel, load_grammar_from_file, load_lexicon_from_file,
    load_lexicon_from_json,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("phrasebook")
        .version("0.1.0")
        .about("Rule-based bilingual phrase generation, validation and translation")
        .arg(
            Arg::new("lexicon")
                .long("lexicon")
                .short('l')
                .help("Path to the word lexicon file (a .json extension selects the JSON form)")
                .required(true),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .short('g')
                .help("Path to the grammar rules file")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show resolved tag sequences and degradations")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a sentence for a language and structure")
                .arg(Arg::new("language").required(true).index(1))
                .arg(
                    Arg::new("structure")
                        .help("A language name, or comma-separated tags like DET,ADJ,NOU")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a sentence against a language's grammar")
                .arg(Arg::new("sentence").required(true).index(1))
                .arg(Arg::new("language").required(true).index(2)),
        )
        .subcommand(
            Command::new("transform")
                .about("Reorder a sentence from one structure into another")
                .arg(Arg::new("sentence").required(true).index(1))
                .arg(Arg::new("source-structure").required(true).index(2))
                .arg(Arg::new("target-structure").required(true).index(3)),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate a sentence word for word between two languages")
                .arg(Arg::new("sentence").required(true).index(1))
                .arg(Arg::new("source-language").required(true).index(2))
                .arg(Arg::new("target-language").required(true).index(3))
                .arg(
                    Arg::new("with-grammar")
                        .long("with-grammar")
                        .help("Reorder the result into the target language's grammar")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Print the loaded lexicon and grammar")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Dump as JSON instead of plain text")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    let lexicon_path = matches.get_one::<String>("lexicon").unwrap();
    let grammar_path = matches.get_one::<String>("grammar").unwrap();
    let verbosity = if matches.get_flag("verbose") {
        VerbosityLevel::Verbose
    } else {
        VerbosityLevel::Normal
    };

    let book = Phrasebook::new()
        .with_lexicon(load_lexicon(Path::new(lexicon_path))?)
        .with_grammar(load_grammar_from_file(Path::new(grammar_path))?)
        .with_verbosity(verbosity);

    match matches.subcommand() {
        Some(("generate", sub)) => {
            let language = arg(sub, "language");
            let structure = parse_structure_arg(arg(sub, "structure"));
            match book.generate(language, &structure) {
                Some(sentence) => println!("{}", sentence),
                None => println!("nil"),
            }
        }
        Some(("validate", sub)) => {
            println!("{}", book.validate(arg(sub, "sentence"), arg(sub, "language")));
        }
        Some(("transform", sub)) => {
            let source = parse_structure_arg(arg(sub, "source-structure"));
            let target = parse_structure_arg(arg(sub, "target-structure"));
            println!("{}", book.transform(arg(sub, "sentence"), &source, &target));
        }
        Some(("translate", sub)) => {
            let sentence = arg(sub, "sentence");
            let source = arg(sub, "source-language");
            let target = arg(sub, "target-language");
            let result = if sub.get_flag("with-grammar") {
                book.translate_with_grammar(sentence, source, target)
            } else {
                book.translate_words(sentence, source, target)
            };
            match result {
                Some(translated) => println!("{}", translated),
                None => println!("nil"),
            }
        }
        Some(("dump", sub)) => {
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(book.lexicon())?);
                println!("{}", serde_json::to_string_pretty(book.grammar())?);
            } else {
                print!("{}", book.lexicon());
                print!("{}", book.grammar());
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

/// Pick the lexicon loader by file extension: `.json` files use the JSON
/// form, anything else the line format.
fn load_lexicon(path: &Path) -> phrasebook::LoadResult<Lexicon> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        load_lexicon_from_json(path)
    } else {
        load_lexicon_from_file(path)
    }
}

fn arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.get_one::<String>(name).unwrap().as_str()
}

/// A structure argument is either a language name or a comma-separated tag
/// list; anything containing a comma or shaped like a single tag is treated
/// as explicit.
fn parse_structure_arg(value: &str) -> Structure {
    let looks_like_tag = |t: &str| {
        let t = t.trim();
        t.len() >= 3 && t.chars().take(3).all(|c| c.is_ascii_uppercase())
    };
    if value.contains(',') || looks_like_tag(value) {
        let tags: Vec<&str> = value.split(',').map(str::trim).collect();
        Structure::explicit(&tags)
    } else {
        Structure::named(value)
    }
}
