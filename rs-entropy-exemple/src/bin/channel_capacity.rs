use rs_entropy_core::information;

/// Number of points along the SNR axis.
const POINTS: usize = 101;
/// Transmissions per second over the channel.
const TRANSMISSION_RATE: f64 = 1000.0;

fn main() {
    env_logger::init();

    // Capacity of a Gaussian channel as the signal to noise ratio
    // grows towards 4
    let step = 4.0 / POINTS as f64;

    println!("   SNR  Capacity (bits/s)");
    for point in 0..POINTS {
        let snr = point as f64 * step;
        let capacity = TRANSMISSION_RATE * information::gaussian_channel_capacity(snr);
        println!("{:>6.3}  {:>17.1}", snr, capacity);
    }
}
