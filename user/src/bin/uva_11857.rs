// UVa 11857: Driving Range
use std::io::{BufRead, BufWriter, Write};

use graph::kruskal_bottleneck;
use io::{scan, AutoSource, Source};

fn solve<R: BufRead, W: Write>(
    mut src: AutoSource<R>,
    out: &mut W,
) -> std::io::Result<()> {
    while !src.is_empty() {
        scan! {
            from &mut src,
            n: usize,
            m: usize,
        }
        if n == 0 && m == 0 {
            break;
        }
        scan! {
            from &mut src,
            roads: [(usize, usize, u64); m],
        }

        match kruskal_bottleneck(n, &roads) {
            Some(range) => writeln!(out, "{}", range.copied().unwrap_or(0))?,
            None => writeln!(out, "IMPOSSIBLE")?,
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
    let input = "3 3
0 1 10
1 2 20
0 2 15
2 0
1 0
4 4
0 1 5
1 2 5
2 0 1
3 3 9
0 0
";
    let mut out = vec![];
    solve(AutoSource::from(input), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "15\nIMPOSSIBLE\n0\nIMPOSSIBLE\n"
    );
}
