use log::info;
use rand_distr::{Distribution, Normal};
use rs_entropy_core::information;

/// Number of Gaussian samples drawn.
const SAMPLES: usize = 1_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mean = 0.0;
    let standard_deviation = 1.0_f64;

    // Analytic differential entropy of the Gaussian
    let analytic = 0.5
        * (2.0 * std::f64::consts::PI * std::f64::consts::E * standard_deviation.powi(2)).log2();

    info!("drawing {} samples from N({}, {})", SAMPLES, mean, standard_deviation);
    let normal = Normal::new(mean, standard_deviation)?;
    let mut rng = rand::rng();
    let samples: Vec<f64> = (0..SAMPLES).map(|_| normal.sample(&mut rng)).collect();

    // Histogram the same data at three bin widths. The raw histogram
    // entropy grows as the bins shrink; subtracting log2(1/width)
    // converges on the differential entropy
    for (bin_width, bin_count) in [(1.0, 11), (0.5, 23), (0.1, 111)] {
        let half_range = bin_width * bin_count as f64 / 2.0;

        let mut histogram = vec![0usize; bin_count];
        for value in samples.iter().filter(|value| value.abs() < half_range) {
            let bin = ((value + half_range) / bin_width) as usize;
            histogram[bin.min(bin_count - 1)] += 1;
        }

        let entropy = information::entropy_from_frequencies(&histogram);
        let differential = entropy - (1.0 / bin_width).log2();

        println!(
            "Bin width = {}: H(X) = {} bits, Hdiff(X) = {} bits",
            bin_width,
            information::rounded(entropy, 3),
            information::rounded(differential, 3)
        );
    }

    println!();
    println!("Analytic Hdiff(X) = {} bits", information::rounded(analytic, 3));

    Ok(())
}
