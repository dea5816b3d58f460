use rs_entropy_core::information;

/// Number of points along the message-length axis.
const POINTS: usize = 101;

fn main() {
    env_logger::init();

    // Probability of decoding error as the message length grows, for
    // a code running just below channel capacity
    let signal_power: f64 = 10.0;
    let noise_power = 1.0;
    let rate = 0.99;
    let capacity = 1.0;

    // The factor in front of sqrt(n) only depends on the channel and
    // the coding rate
    let static_factor = ((2.0 * signal_power * (signal_power + noise_power))
        / (noise_power * (signal_power + 2.0 * noise_power)))
        .sqrt()
        * (rate - capacity);

    let step = 4000.0 / POINTS as f64;

    println!("Message length    P(error)");
    for point in 0..POINTS {
        let message_length = point as f64 * step;
        let error = information::cumulative_gaussian(message_length.sqrt() * static_factor);
        println!("{:>14.0}  {:>10.6}", message_length, error);
    }
}
