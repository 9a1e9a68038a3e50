//! Solve a rank-deficient least-squares problem and print the factors

use cod_solve::utils::{matmul, satisfies_penrose};
use cod_solve::{decompose, DTensor};

fn print_matrix(name: &str, m: &DTensor<f64, 2>) {
    let (rows, cols) = *m.shape();
    println!("{} ({}x{}):", name, rows, cols);
    for i in 0..rows {
        let row: Vec<String> = (0..cols).map(|j| format!("{:>10.5}", m[[i, j]])).collect();
        println!("  {}", row.join(" "));
    }
}

fn main() {
    // Third column is the sum of the first two
    let a = DTensor::<f64, 2>::from_fn([4, 3], |idx| {
        let t = idx[0] as f64;
        [1.0, t, 1.0 + t][idx[1]]
    });
    let b = DTensor::<f64, 2>::from_fn([4, 1], |idx| [1.0, 2.9, 5.1, 7.0][idx[0]]);

    let cod = decompose(&a, 1e-6).expect("decomposition failed");
    println!("rank = {} (of {})", cod.rank(), a.shape().0.min(a.shape().1));
    print_matrix("L", &cod.lower_factor());

    let x = cod.solve(&b).expect("solve failed");
    print_matrix("minimum-norm x", &x);
    print_matrix("A·x", &matmul(&a, &x));

    let a_pinv = cod.pseudoinverse();
    println!("Penrose conditions hold: {}", satisfies_penrose(&a, &a_pinv, 1e-10));
}
