use log::info;
use rs_entropy_core::model::markov_model::MarkovModel;
use rs_entropy_core::tokenize;

/// Column width used to re-flow the generated samples.
const FILL_WIDTH: usize = 70;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Input text file, model order and sample lengths from the command line.
    // Only the file is required.
    let args: Vec<String> = std::env::args().collect();
    let filename = args
        .get(1)
        .ok_or("Usage: rs-entropy-exemple <text-file> [order] [letters] [words]")?;
    let order: usize = args.get(2).map(|arg| arg.parse()).transpose()?.unwrap_or(3);
    let letter_sample: usize = args.get(3).map(|arg| arg.parse()).transpose()?.unwrap_or(300);
    let word_sample: usize = args.get(4).map(|arg| arg.parse()).transpose()?.unwrap_or(100);

    let mut rng = rand::rng();

    // Build the character-level model and estimate the entropy of the
    // text one letter at a time
    info!("building order-{} letter model from {}", order, filename);
    let model = MarkovModel::from_tokens(tokenize::chars(filename)?, order)?;
    info!("letter model holds {} contexts", model.len());

    println!("Letter entropy: {} bits/letter.", model.entropy_rate()?);
    println!("Model order = {}", order);

    // Generate a random sample from the letter model and format it as
    // a block of width 70
    let letters: String = model.generate(letter_sample, &mut rng)?.into_iter().collect();
    println!("Model letter output:");
    println!("{}", fill(&letters, FILL_WIDTH));

    // Same again, one word at a time. Word models need far more text
    // to saturate, so expect a lower entropy estimate on small inputs
    info!("building order-{} word model from {}", order, filename);
    let model = MarkovModel::from_tokens(tokenize::words(filename)?, order)?;
    info!("word model holds {} contexts", model.len());

    println!();
    println!("Word entropy: {} bits/word.", model.entropy_rate()?);
    println!("Model order = {}", order);

    let words = model.generate(word_sample, &mut rng)?.join(" ");
    println!("Model word output:");
    println!("{}", fill(&words, FILL_WIDTH));

    Ok(())
}

/// Re-flows text into lines of at most `width` columns, breaking on
/// whitespace. Words longer than `width` are kept whole.
fn fill(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
