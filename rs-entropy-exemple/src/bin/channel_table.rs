use rs_entropy_core::information;

fn main() {
    env_logger::init();

    // Joint input/output frequency counts of a 4-symbol discrete
    // channel: rows are outputs y1..y4, columns are inputs x1..x4
    let distribution: Vec<Vec<usize>> = vec![
        vec![12, 15, 2, 0],
        vec![4, 21, 10, 0],
        vec![0, 10, 21, 4],
        vec![0, 2, 15, 12],
    ];

    let col_frequencies = information::col_totals(&distribution);
    let row_frequencies = information::row_totals(&distribution);

    println!("Joint frequencies");
    println!();
    for (row, row_total) in distribution.iter().zip(&row_frequencies) {
        let cells: String = row.iter().map(|cell| format!("{:<5}", cell)).collect();
        println!("{}|{}", cells, row_total);
    }
    println!("{}", "-".repeat(24));
    let cells: String = col_frequencies.iter().map(|cell| format!("{:<5}", cell)).collect();
    println!("{}|{}", cells, col_frequencies.iter().sum::<usize>());

    // Input entropy from the column totals, output entropy from the
    // row totals, joint entropy from the full table
    let hx = information::entropy_from_frequencies(&col_frequencies);
    let hy = information::entropy_from_frequencies(&row_frequencies);
    let hxy = information::entropy_from_frequencies(&information::flatten(&distribution));
    let ixy = hx + hy - hxy;

    println!();
    println!("H(X)      = {} bits", information::rounded(hx, 3));
    println!("H(Y)      = {} bits", information::rounded(hy, 3));
    println!("H(X,Y)    = {} bits", information::rounded(hxy, 3));
    println!("H(X)+H(Y) = {} bits", information::rounded(hx + hy, 3));
    println!("I(X,Y)    = {} bits", information::rounded(ixy, 3));
    println!("H(Y|X)    = {} bits", information::rounded(hy - ixy, 3));
}
