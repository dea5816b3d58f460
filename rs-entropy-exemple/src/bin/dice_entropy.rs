use rs_entropy_core::information;
use rs_entropy_core::model::frequency::FrequencyTable;

fn main() {
    env_logger::init();

    // All outcomes for a single die
    let die = [1, 2, 3, 4, 5, 6];

    // Count the sum of every combination of two dice
    let mut totals = FrequencyTable::new();
    for first in die {
        for second in die {
            totals.record(first + second);
        }
    }

    // Turn the counts into the outcome distribution and display it
    let combinations = totals.total();
    println!("Outcome  Frequency  Probability");
    for (sum, frequency) in totals.iter() {
        println!(
            "{:>7}  {:>9}  {:>11}",
            sum,
            frequency,
            information::rounded(*frequency as f64 / combinations as f64, 3)
        );
    }

    let entropy = information::entropy_from_frequencies(&totals.frequencies());
    println!();
    println!("Entropy = {} bits/pair", information::rounded(entropy, 3));
}
