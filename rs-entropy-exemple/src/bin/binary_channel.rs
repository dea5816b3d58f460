use log::info;
use rand::Rng;
use rs_entropy_core::information;

/// Probability that the channel flips a transmitted bit.
const NOISE_LEVEL: f64 = 0.1;
/// Number of bits pushed through the channel.
const SAMPLES: usize = 1_000_000;

fn main() {
    env_logger::init();

    let mut rng = rand::rng();

    // Joint probability of input -> output, accumulated one
    // transmitted bit at a time. Rows are inputs, columns outputs.
    let mut joint = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
    let increment = 1.0 / SAMPLES as f64;

    info!("simulating {} bits at noise level {}", SAMPLES, NOISE_LEVEL);
    for _ in 0..SAMPLES {
        let input = usize::from(rng.random_bool(0.5));
        let output = if rng.random_bool(NOISE_LEVEL) { 1 - input } else { input };
        joint[input][output] += increment;
    }

    let input_marginal = information::row_totals(&joint);
    let output_marginal = information::col_totals(&joint);

    let hx = information::entropy_from_probabilities(&input_marginal);
    let hy = information::entropy_from_probabilities(&output_marginal);
    let hxy = information::entropy_from_probabilities(&information::flatten(&joint));
    let ixy = hx + hy - hxy;

    // Analytic entropy of the channel noise, for comparison with the
    // measured H(Y|X)
    let noise = information::entropy_from_probabilities(&[NOISE_LEVEL, 1.0 - NOISE_LEVEL]);

    println!("Joint probabilities");
    println!();
    println!("          Output=0  Output=1  Total");
    for (input, row) in joint.iter().enumerate() {
        println!(
            "Input={}   {:>8}  {:>8}  {:>5}",
            input,
            information::rounded(row[0], 3),
            information::rounded(row[1], 3),
            information::rounded(input_marginal[input], 3)
        );
    }
    println!(
        "Total     {:>8}  {:>8}  {:>5}",
        information::rounded(output_marginal[0], 3),
        information::rounded(output_marginal[1], 3),
        information::rounded(input_marginal.iter().sum::<f64>(), 3)
    );

    println!();
    println!("H(X)     = {} bits", information::rounded(hx, 3));
    println!("H(Y)     = {} bits", information::rounded(hy, 3));
    println!("H(X,Y)   = {} bits", information::rounded(hxy, 3));
    println!("I(X,Y)   = {} bits", information::rounded(ixy, 3));
    println!("H(X|Y)   = {} bits", information::rounded(hx - ixy, 3));
    println!("H(Y|X)   = {} bits", information::rounded(hy - ixy, 3));
    println!("H(noise) = {} bits (analytic)", information::rounded(noise, 3));
}
