//! Build script to generate embedded word lists
//!
//! Reads the per-language TSV dictionaries and generates Rust source code with const arrays.
//! Each non-empty, non-comment line is `display<TAB>kind[<TAB>definition]` where `kind`
//! is `s` for a solution word or `a` for a word that is only allowed as a guess.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words_pt.tsv",
        &Path::new(&out_dir).join("words_pt.rs"),
        "PT_WORDS",
        "Portuguese dictionary entries",
    );

    generate_word_list(
        "data/words_en.tsv",
        &Path::new(&out_dir).join("words_en.rs"),
        "EN_WORDS",
        "English dictionary entries",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words_pt.tsv");
    println!("cargo:rerun-if-changed=data/words_en.tsv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, bool, Option<String>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.split('\t');
            let display = fields.next().unwrap_or_default().trim().to_string();
            let is_solution = fields.next().is_some_and(|kind| kind.trim() == "s");
            let definition = fields
                .next()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);
            (display, is_solution, definition)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}: (display, is solution, definition)").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(&str, bool, Option<&str>)] = &["
    )
    .unwrap();

    for (display, is_solution, definition) in entries {
        match definition {
            Some(definition) => writeln!(
                output,
                "    ({display:?}, {is_solution}, Some({definition:?})),"
            )
            .unwrap(),
            None => writeln!(output, "    ({display:?}, {is_solution}, None),").unwrap(),
        }
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
