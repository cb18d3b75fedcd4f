// UVa 10608: Friends
use std::io::{BufRead, BufWriter, Write};

use algo::largest_circle;
use io::{marker::Usize1, scan, AutoSource};

fn solve<R: BufRead, W: Write>(
    mut src: AutoSource<R>,
    out: &mut W,
) -> std::io::Result<()> {
    scan! {
        from &mut src,
        t: usize,
    }
    for _ in 0..t {
        scan! {
            from &mut src,
            n: usize,
            m: usize,
            pairs: [(Usize1, Usize1); m],
        }
        writeln!(out, "{}", largest_circle(n, pairs))?;
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
    let input = "2
3 2
1 2
2 3
10 12
1 2
3 1
3 4
5 4
3 5
4 6
5 2
2 1
7 1
1 2
9 10
8 9
";
    let mut out = vec![];
    solve(AutoSource::from(input), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3\n7\n");
}
