// UVa 108: Maximum Sum
use std::io::{BufRead, BufWriter, Write};

use io::{scan, AutoSource, Source};
use seq::max_subrect_sum;

fn solve<R: BufRead, W: Write>(
    mut src: AutoSource<R>,
    out: &mut W,
) -> std::io::Result<()> {
    while !src.is_empty() {
        scan! {
            from &mut src,
            n: usize,
            a: [[i32; n]; n],
        }
        if let Some(sum) = max_subrect_sum(&a) {
            writeln!(out, "{sum}")?;
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    solve(AutoSource::new(std::io::stdin().lock()), &mut out)?;
    out.flush()
}

#[test]
fn sample() {
    let input = "4
0 -2 -7 0 9 2 -6 2
-4 1 -4 1 -1
8 0 -2
";
    let mut out = vec![];
    solve(AutoSource::from(input), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "15\n");
}
